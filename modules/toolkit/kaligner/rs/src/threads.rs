use std::thread::available_parallelism;

use eyre::Result;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Resolves the requested number of threads against the number of available cores.
/// Negative values count back from all cores (-1 = all of them), zero means a single thread.
fn resolve(requested: isize, cores: usize) -> usize {
    let cores = cores.max(1);
    if requested > 0 {
        (requested as usize).min(cores)
    } else if requested == 0 {
        1
    } else {
        cores.saturating_sub(requested.unsigned_abs() - 1).max(1)
    }
}

/// Dedicated rayon pool with the normalized number of threads.
pub(crate) fn pool(requested: isize) -> Result<ThreadPool> {
    let threads = resolve(requested, available_parallelism()?.get());
    log::debug!("Building a thread pool with {threads} threads ({requested} requested)");
    Ok(ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|ind| format!("kaligner-{ind}"))
        .build()?)
}
