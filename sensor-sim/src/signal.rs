//! Interrupt handling for graceful shutdown.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

/// Cancellation signal shared between the interrupt handler and the loop.
#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag(Arc<AtomicBool>);

impl ShutdownFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a flag and registers a Ctrl-C handler that raises it.
    ///
    /// On Unix the handler also catches `SIGTERM` and `SIGHUP`. Only one
    /// handler may be installed per process.
    pub fn install_ctrl_c() -> Result<Self> {
        let flag = Self::new();
        let handler = flag.clone();
        ctrlc::set_handler(move || {
            log::debug!("received interrupt signal");
            handler.request();
        })
        .context("install Ctrl-C handler")?;
        Ok(flag)
    }

    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
