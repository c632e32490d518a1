//! Signal handling for the recording loop

use tokio::sync::mpsc;

/// Shutdown signal for the recording loop
///
/// Listens for Ctrl-C and exposes it as an awaitable event so the
/// recording loop can select between transcript events and the stop
/// request.
pub struct ShutdownSignal {
    receiver: mpsc::Receiver<()>,
}

impl ShutdownSignal {
    /// Create a new shutdown signal handler and start listening
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(1);

        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = tx.send(()).await;
            }
        });

        Self { receiver: rx }
    }

    /// Wait until shutdown is requested
    pub async fn recv(&mut self) {
        let _ = self.receiver.recv().await;
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}
