//! Per-sensor seeds derived from one run seed.
//!
//! The mixing is spelled out (FNV-1a over the key, then a `splitmix64`
//! finaliser) so a seed maps to the same sensor streams on every toolchain.

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Derives a child seed from a run seed and a sensor name.
///
/// Each sensor gets its own stream, so adding a draw to one sensor does not
/// shift the readings of another.
#[must_use]
pub fn derive_seed(parent: u64, key: &str) -> u64 {
    let mut key_hash = FNV_OFFSET;
    for byte in key.bytes() {
        key_hash = (key_hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME);
    }
    splitmix64(parent ^ key_hash)
}

const fn splitmix64(state: u64) -> u64 {
    let mut z = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
