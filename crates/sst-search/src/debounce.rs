//! Debounced delivery of rapidly changing input (filter boxes).
//!
//! Values sent in quick succession collapse into the last one, delivered once
//! the input has been quiet for the configured delay.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const CHANNEL_CAPACITY: usize = 64;

/// Sending half of a debounced stream.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    input: mpsc::Sender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawn the debounce task on the current tokio runtime.
    ///
    /// Returns the sender and the receiver of settled values. When every
    /// sender is dropped, a pending value is delivered immediately and the
    /// receiver then closes.
    #[must_use]
    pub fn spawn(delay: Duration) -> (Self, mpsc::Receiver<T>, JoinHandle<()>) {
        let (input, mut rx) = mpsc::channel::<T>(CHANNEL_CAPACITY);
        let (output, settled) = mpsc::channel::<T>(CHANNEL_CAPACITY);

        let handle = tokio::spawn(async move {
            while let Some(mut latest) = rx.recv().await {
                loop {
                    tokio::select! {
                        next = rx.recv() => match next {
                            Some(value) => latest = value,
                            None => {
                                let _ = output.send(latest).await;
                                return;
                            }
                        },
                        () = tokio::time::sleep(delay) => {
                            if output.send(latest).await.is_err() {
                                return;
                            }
                            break;
                        }
                    }
                }
            }
        });

        (Self { input }, settled, handle)
    }

    /// Push a new value, restarting the quiet period.
    ///
    /// Returns `false` once the debounce task has stopped.
    pub async fn push(&self, value: T) -> bool {
        self.input.send(value).await.is_ok()
    }
}
