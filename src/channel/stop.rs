use tokio::sync::watch;
use tokio::time::{sleep, Duration};
use tracing::{debug, warn};

/// Create a connected stop trigger and listener.
///
/// The listener can be cloned for every loop that should observe the same
/// signal.
pub fn channel() -> (StopTrigger, StopListener) {
    let (tx, rx) = watch::channel(false);
    (StopTrigger { tx }, StopListener { rx })
}

/// Coordinator half. Raising the signal never blocks, whether or not the
/// listeners are still around.
#[derive(Debug)]
pub struct StopTrigger {
    tx: watch::Sender<bool>,
}

impl StopTrigger {
    pub fn stop(&self) {
        if self.tx.send_replace(true) {
            warn!("Stop signal has already been raised.");
        } else {
            debug!(
                "Raised stop signal to {} listener(s).",
                self.tx.receiver_count()
            );
        }
    }

    pub fn is_stopped(&self) -> bool {
        *self.tx.borrow()
    }
}

/// Loop half. A dropped trigger counts as a stop.
#[derive(Debug, Clone)]
pub struct StopListener {
    rx: watch::Receiver<bool>,
}

impl StopListener {
    /// Check the signal without waiting.
    pub fn is_stopped(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }

    /// Resolve once the signal is raised.
    pub async fn stopped(&self) {
        let mut rx = self.rx.clone();
        loop {
            let stopped = *rx.borrow_and_update();
            if stopped {
                return;
            }
            if rx.changed().await.is_err() {
                return;
            }
        }
    }

    /// Sleep for `duration`, waking early if the signal is raised meanwhile.
    pub async fn sleep(&self, duration: Duration) {
        tokio::select! {
            _ = sleep(duration) => {}
            _ = self.stopped() => {}
        }
    }
}
