//! Debounced propagation of a rapidly-changing input value.

use std::time::Duration;

use tokio::sync::{mpsc, watch};

/// Delays propagation of an input value until it has been stable for the
/// configured interval.
///
/// Every [`update`](Debouncer::update) restarts the quiet-period timer; the
/// last value set is delivered on the paired receiver once the input stops
/// changing for the full delay, so at most one value is emitted per quiet
/// period. Dropping the `Debouncer` aborts the worker task, which guarantees
/// a pending emission never fires after the owning screen is torn down.
pub struct Debouncer<T> {
    input: watch::Sender<Option<T>>,
    worker: tokio::task::JoinHandle<()>,
}

impl<T: Clone + Send + Sync + 'static> Debouncer<T> {
    /// Spawns the debounce worker and returns the handle together with the
    /// channel on which stabilized values arrive.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (input, mut rx) = watch::channel::<Option<T>>(None);
        let (out, settled) = mpsc::unbounded_channel();
        let worker = tokio::spawn(async move {
            loop {
                if rx.changed().await.is_err() {
                    return;
                }
                // Keep restarting the timer until the input survives a full
                // quiet period unchanged.
                loop {
                    match tokio::time::timeout(delay, rx.changed()).await {
                        Ok(Ok(())) => continue,
                        Ok(Err(_)) => return,
                        Err(_) => break,
                    }
                }
                let value = rx.borrow_and_update().clone();
                if let Some(value) = value {
                    if out.send(value).is_err() {
                        return;
                    }
                }
            }
        });
        (Self { input, worker }, settled)
    }

    /// Feeds a new input value, restarting the quiet-period timer.
    pub fn update(&self, value: T) {
        let _ = self.input.send(Some(value));
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.worker.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn emits_last_value_once_after_quiet_period() {
        let (debouncer, mut settled) = Debouncer::new(Duration::from_millis(500));

        // Input changes at t=0, t=100, t=200.
        debouncer.update("a".to_string());
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.update("ab".to_string());
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.update("abc".to_string());

        // Nothing may arrive before t=700.
        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(settled.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(settled.try_recv().unwrap(), "abc");
        assert!(settled.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn separate_quiet_periods_emit_separately() {
        let (debouncer, mut settled) = Debouncer::new(Duration::from_millis(200));

        debouncer.update(1);
        tokio::time::sleep(Duration::from_millis(250)).await;
        tokio::task::yield_now().await;
        assert_eq!(settled.try_recv().unwrap(), 1);

        debouncer.update(2);
        tokio::time::sleep(Duration::from_millis(250)).await;
        tokio::task::yield_now().await;
        assert_eq!(settled.try_recv().unwrap(), 2);
        assert!(settled.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn pending_emission_cancelled_on_teardown() {
        let (debouncer, mut settled) = Debouncer::new(Duration::from_millis(500));

        debouncer.update("doomed".to_string());
        tokio::time::sleep(Duration::from_millis(100)).await;
        drop(debouncer);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        tokio::task::yield_now().await;
        assert!(settled.try_recv().is_err());
    }
}
