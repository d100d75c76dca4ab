//! Ordered, all-or-nothing batch fan-out.
//!
//! Every plural operation goes through here:
//!
//! 1. spawn one task per input, tagged with its index
//! 2. await all of them (no cancellation when one fails)
//! 3. restore input order and drop absent results
//! 4. succeed only if the survivor count equals the expected count
//!
//! A batch with one failed element yields `None`, not a shorter list.
//! Must be awaited inside a tokio runtime.

use std::future::Future;

use tokio::task::JoinSet;

/// Run `op` over every input concurrently and return the per-input
/// outcomes in input order. A task that panics is reported as `None`.
pub async fn gather<I, T, F, Fut>(inputs: impl IntoIterator<Item = I>, op: F) -> Vec<Option<T>>
where
    F: Fn(I) -> Fut,
    Fut: Future<Output = Option<T>> + Send + 'static,
    T: Send + 'static,
{
    let mut tasks = JoinSet::new();
    let mut launched = 0usize;
    for (index, input) in inputs.into_iter().enumerate() {
        let unit = op(input);
        tasks.spawn(async move { (index, unit.await) });
        launched += 1;
    }

    let mut slots: Vec<Option<T>> = (0..launched).map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, outcome)) => slots[index] = outcome,
            Err(error) => tracing::warn!(%error, "batch task did not complete"),
        }
    }
    slots
}

/// [`gather`], then collapse to `None` unless exactly `expected` inputs
/// produced a result.
pub async fn collect_all<I, T, F, Fut>(
    inputs: impl IntoIterator<Item = I>,
    expected: usize,
    op: F,
) -> Option<Vec<T>>
where
    F: Fn(I) -> Fut,
    Fut: Future<Output = Option<T>> + Send + 'static,
    T: Send + 'static,
{
    let outcomes = gather(inputs, op).await;
    let launched = outcomes.len();
    let produced: Vec<T> = outcomes.into_iter().flatten().collect();

    if produced.len() == expected {
        Some(produced)
    } else {
        tracing::debug!(launched, expected, produced = produced.len(), "batch collapsed");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn order_survives_reverse_completion() {
        let out = collect_all(0..20u64, 20, |i| async move {
            tokio::time::sleep(Duration::from_millis(100 - i * 5)).await;
            Some(i)
        })
        .await
        .unwrap();
        assert_eq!(out, (0..20).collect::<Vec<_>>());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn order_survives_parallel_workers() {
        let out = collect_all(0..200usize, 200, |i| async move { Some(i * 2) })
            .await
            .unwrap();
        assert!(out.iter().enumerate().all(|(i, v)| *v == i * 2));
    }

    #[tokio::test]
    async fn one_failure_collapses_batch() {
        let out = collect_all(0..3, 3, |i| async move { (i != 1).then_some(i) }).await;
        assert_eq!(out, None);
    }

    #[tokio::test]
    async fn gather_keeps_failures_in_place() {
        let out = gather(0..4, |i| async move { (i % 2 == 0).then_some(i) }).await;
        assert_eq!(out, vec![Some(0), None, Some(2), None]);
    }

    #[tokio::test]
    async fn expected_count_is_caller_supplied() {
        let out = collect_all(0..3, 2, |i| async move { Some(i) }).await;
        assert_eq!(out, None);
        let out = collect_all(0..3, 3, |i| async move { Some(i) }).await;
        assert_eq!(out, Some(vec![0, 1, 2]));
    }

    #[tokio::test]
    async fn empty_batch_with_zero_expected() {
        let out = collect_all(Vec::<u8>::new(), 0, |i| async move { Some(i) }).await;
        assert_eq!(out, Some(vec![]));
    }

    #[tokio::test]
    async fn panicking_task_counts_as_absent() {
        let out = collect_all(0..3, 3, |i| async move {
            if i == 2 {
                panic!("unit failed");
            }
            Some(i)
        })
        .await;
        assert_eq!(out, None);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_failure_does_not_cancel_others() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let finished = Arc::new(AtomicUsize::new(0));
        let out = collect_all(0..5u64, 5, {
            let finished = finished.clone();
            move |i| {
                let finished = finished.clone();
                async move {
                    tokio::time::sleep(Duration::from_millis(10 * (i + 1))).await;
                    finished.fetch_add(1, Ordering::SeqCst);
                    (i != 0).then_some(i)
                }
            }
        })
        .await;
        assert_eq!(out, None);
        assert_eq!(finished.load(Ordering::SeqCst), 5);
    }
}
