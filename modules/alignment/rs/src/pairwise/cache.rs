/// Growable scratch array reused between alignments. Never shrinks.
#[derive(Clone, Debug, Default)]
pub struct ScratchBuffer {
    data: Vec<i32>,
}

impl ScratchBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Array of at least `size` cells. The content is unspecified and must be initialized by the caller.
    pub fn get(&mut self, size: usize) -> &mut [i32] {
        if self.data.len() < size {
            self.data.resize(size, 0);
        }
        &mut self.data[..size]
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }
}

/// Scratch matrices for the dynamic programming kernels. A cache belongs to a single thread at a
/// time, e.g. one cache per worker.
#[derive(Clone, Debug, Default)]
pub struct MatrixCache {
    main: ScratchBuffer,
    deletions: ScratchBuffer,
    insertions: ScratchBuffer,
}

impl MatrixCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single score matrix for linear gap kernels.
    pub fn linear(&mut self, size: usize) -> &mut [i32] {
        self.main.get(size)
    }

    /// Match, deletion, and insertion matrices for affine gap kernels.
    pub fn affine(&mut self, size: usize) -> (&mut [i32], &mut [i32], &mut [i32]) {
        (
            self.main.get(size),
            self.deletions.get(size),
            self.insertions.get(size),
        )
    }

    /// Total number of cells currently held by the cache.
    pub fn footprint(&self) -> usize {
        self.main.capacity() + self.deletions.capacity() + self.insertions.capacity()
    }
}
