// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Fixed set of tokio tasks, each producing a partial result.
///
/// The partial results are folded together with `merge::Merge` once every worker finished.
#[derive(Debug)]
pub struct WorkerPool<R> {
    workers: Vec<tokio::task::JoinHandle<R>>,
}

impl<R> WorkerPool<R>
where
    R: Default + merge::Merge + Send + 'static,
{
    /// Spawns `count` workers, each running the future returned by `make_worker`.
    pub fn start<F>(count: usize, mut make_worker: impl FnMut() -> F) -> Self
    where
        F: std::future::Future<Output = R> + Send + 'static,
    {
        let workers = (0..count).map(|_| tokio::spawn(make_worker())).collect();
        Self { workers }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.workers.len()
    }

    /// Waits for the workers and merges their results.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a worker panicked or was cancelled.
    pub async fn finish(self) -> Result<R, tokio::task::JoinError> {
        let mut merged = R::default();
        for worker in self.workers {
            merged.merge(worker.await?);
        }
        Ok(merged)
    }
}
