use std::ops::Range;

use rayon::prelude::*;
use thiserror::Error;

/// Errors that can occur while dispatching row work units.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The dedicated thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    ThreadPoolBuild(String),

    /// The requested worker count is invalid.
    #[error("worker count must be > 0, got {0}")]
    InvalidThreadCount(usize),
}

/// Controls how row work units are scheduled across threads.
///
/// All strategies produce byte-identical output; they only differ in how the
/// output rows are assigned to threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    ///
    /// This is the baseline the parallel strategies must match bit-for-bit.
    /// Useful for small images or debugging.
    Serial,

    /// Split the output rows into `n` contiguous ranges, one per thread of
    /// a dedicated `n`-thread pool (the last range absorbs the remainder).
    /// All workers start together and the call returns only once every
    /// worker has finished.
    ///
    /// # Warning
    /// Builds a new thread pool on every call, which has measurable
    /// overhead; prefer [`ExecutionStrategy::Dynamic`] unless a specific
    /// thread count is required.
    Fixed(usize),

    /// Let the global work-stealing pool pull individual output rows until
    /// none remain. Balances load when rows have uneven cost and uses the
    /// runtime-reported hardware parallelism.
    #[default]
    Dynamic,
}

/// Split `height` output rows into `workers` contiguous half-open ranges.
///
/// Every range except the last holds `height / workers` rows; the last one
/// always ends at `height` and absorbs the remainder. The ranges are
/// pairwise disjoint and their union is exactly `[0, height)`. When
/// `workers > height` the leading ranges are empty.
///
/// # Panics
///
/// Panics when `workers` is zero.
pub fn partition_rows(height: usize, workers: usize) -> Vec<Range<usize>> {
    assert!(workers > 0, "workers must be > 0");

    let rows_per_worker = height / workers;
    (0..workers)
        .map(|i| {
            let start = i * rows_per_worker;
            let end = if i == workers - 1 {
                height
            } else {
                (i + 1) * rows_per_worker
            };
            start..end
        })
        .collect()
}

/// Run `op` over every output row of `dst` under the given strategy.
///
/// `dst` is split into rows of `row_stride` elements and `op` receives each
/// row index together with its destination row. Rows are handed out
/// disjointly, so `op` needs no synchronization; it must produce the same
/// bytes for a given row regardless of scheduling for the strategies to
/// stay interchangeable.
///
/// # Errors
///
/// Returns [`ParallelError::InvalidThreadCount`] when
/// [`ExecutionStrategy::Fixed`] is given zero workers, and
/// [`ParallelError::ThreadPoolBuild`] when the dedicated pool cannot be
/// built.
///
/// # Panics
///
/// Panics when `row_stride` is zero.
pub fn dispatch_rows<T, F>(
    strategy: ExecutionStrategy,
    dst: &mut [T],
    row_stride: usize,
    op: F,
) -> Result<(), ParallelError>
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    assert!(row_stride > 0, "row_stride must be > 0");
    debug_assert_eq!(dst.len() % row_stride, 0);

    match strategy {
        ExecutionStrategy::Serial => {
            for (row, dst_row) in dst.chunks_exact_mut(row_stride).enumerate() {
                op(row, dst_row);
            }
        }
        ExecutionStrategy::Dynamic => {
            dst.par_chunks_exact_mut(row_stride)
                .enumerate()
                .for_each(|(row, dst_row)| op(row, dst_row));
        }
        ExecutionStrategy::Fixed(workers) => {
            if workers == 0 {
                return Err(ParallelError::InvalidThreadCount(workers));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .build()
                .map_err(|e| ParallelError::ThreadPoolBuild(e.to_string()))?;

            let height = dst.len() / row_stride;
            let mut units = Vec::with_capacity(workers);
            let mut rest = dst;
            for range in partition_rows(height, workers) {
                let (chunk, tail) = rest.split_at_mut(range.len() * row_stride);
                rest = tail;
                units.push((range, chunk));
            }

            let op = &op;
            pool.scope(move |scope| {
                for (range, chunk) in units {
                    if range.is_empty() {
                        continue;
                    }
                    scope.spawn(move |_| {
                        for (offset, dst_row) in chunk.chunks_exact_mut(row_stride).enumerate() {
                            op(range.start + offset, dst_row);
                        }
                    });
                }
            });
        }
    }

    Ok(())
}
