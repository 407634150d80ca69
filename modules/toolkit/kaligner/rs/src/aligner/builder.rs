use eyre::Result;
use rayon::ThreadPool;
use thread_local::ThreadLocal;

use super::KAligner;
use crate::mapper::Mapper;
use crate::params::Params;
use crate::threads;

pub struct KAlignerBuilder {
    params: Params,
    thread_pool: Option<ThreadPool>,
    threads: Option<isize>,
}

impl KAlignerBuilder {
    pub fn new(params: Params) -> Self {
        Self {
            params,
            thread_pool: None,
            threads: None,
        }
    }

    /// Pool used by batch alignment. Takes precedence over [`Self::set_threads`].
    pub fn set_thread_pool(mut self, pool: ThreadPool) -> Self {
        self.thread_pool = Some(pool);
        self
    }

    /// Builds a dedicated pool for batch alignment. Negative values count back from the number of
    /// available cores (-1 = all cores), zero means a single thread.
    pub fn set_threads(mut self, requested: isize) -> Self {
        self.threads = Some(requested);
        self
    }

    pub fn build<P>(self) -> Result<KAligner<P>> {
        self.params.validate()?;
        let mapper = Mapper::new(self.params.alphabet(), self.params.mapper.clone())?;
        let thread_pool = match (self.thread_pool, self.threads) {
            (Some(pool), _) => Some(pool),
            (None, Some(requested)) => Some(threads::pool(requested)?),
            (None, None) => None,
        };
        Ok(KAligner::new(
            thread_pool,
            self.params,
            mapper,
            Vec::new(),
            Vec::new(),
            ThreadLocal::new(),
        ))
    }
}
