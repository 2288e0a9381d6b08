//! # extkit Sequential Chaining (`common::sequence`)
//!
//! File: cli/src/common/sequence.rs
//!
//! `chain` runs an async builder over a list of items one at a time. Each
//! future is awaited to completion before the next item is built, and the
//! first error stops the chain. `extkit install` uses it to run setup steps.
//!
use std::future::Future;

/// Awaits `build(item)` for every item, strictly in order.
///
/// Returns `Ok(Some(last))` with the final item's result, `Ok(None)` for an
/// empty input, or the first error. Items after a failing one are never built.
pub async fn chain<I, F, Fut, T, E>(items: I, mut build: F) -> Result<Option<T>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut last = None;
    for item in items {
        last = Some(build(item).await?);
    }
    Ok(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Default)]
    struct Recorder {
        log: Mutex<Vec<String>>,
        in_flight: AtomicBool,
    }

    impl Recorder {
        async fn build(&self, n: u32, fail_on: Option<u32>) -> Result<u32, String> {
            assert!(
                !self.in_flight.swap(true, Ordering::SeqCst),
                "build({}) overlapped with another build",
                n
            );
            self.log.lock().unwrap().push(format!("start {}", n));
            // Give a concurrent implementation the chance to interleave.
            tokio::time::sleep(Duration::from_millis(10)).await;
            tokio::task::yield_now().await;
            self.log.lock().unwrap().push(format!("end {}", n));
            self.in_flight.store(false, Ordering::SeqCst);
            if fail_on == Some(n) {
                Err(format!("build({}) failed", n))
            } else {
                Ok(n * 10)
            }
        }
    }

    #[tokio::test]
    async fn test_runs_in_order_without_overlap() {
        let recorder = Arc::new(Recorder::default());
        let result = chain([1, 2, 3], |n| {
            let recorder = Arc::clone(&recorder);
            async move { recorder.build(n, None).await }
        })
        .await;

        assert_eq!(result, Ok(Some(30)));
        assert_eq!(
            *recorder.log.lock().unwrap(),
            vec!["start 1", "end 1", "start 2", "end 2", "start 3", "end 3"]
        );
    }

    #[tokio::test]
    async fn test_stops_at_first_failure() {
        let recorder = Arc::new(Recorder::default());
        let result = chain([1, 2, 3], |n| {
            let recorder = Arc::clone(&recorder);
            async move { recorder.build(n, Some(2)).await }
        })
        .await;

        assert_eq!(result, Err("build(2) failed".to_string()));
        let log = recorder.log.lock().unwrap();
        assert!(!log.iter().any(|entry| entry.ends_with('3')));
    }

    #[tokio::test]
    async fn test_empty_input_resolves_none() {
        let result: Result<Option<u32>, String> =
            chain(Vec::<u32>::new(), |n| async move { Ok(n) }).await;
        assert_eq!(result, Ok(None));
    }
}
