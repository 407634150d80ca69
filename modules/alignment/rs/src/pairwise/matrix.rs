use std::ops::Range;

/// Score of unreachable cells. Far enough from `i32::MIN` to survive adding penalties.
pub(crate) const UNREACHABLE: i32 = i32::MIN / 2;

/// Cell layout of a `(len1 + 1) x (len2 + 1)` dynamic programming matrix.
pub(crate) trait Layout: Copy {
    /// Number of cells required to store the matrix.
    fn size(&self) -> usize;

    /// Storage index of the cell or `None` if the cell is not stored.
    fn index(&self, i: usize, j: usize) -> Option<usize>;

    /// Columns `j` such that the cell `(row + 1, j + 1)` is computed while filling the row.
    fn columns(&self, row: usize) -> Range<usize>;

    /// Stored cells of the top row, excluding the origin.
    fn first_row(&self) -> usize;

    /// Stored cells of the left column, excluding the origin.
    fn first_column(&self) -> usize;
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) struct Dense {
    len1: usize,
    len2: usize,
}

impl Dense {
    pub fn new(len1: usize, len2: usize) -> Self {
        Self { len1, len2 }
    }
}

impl Layout for Dense {
    fn size(&self) -> usize {
        (self.len1 + 1) * (self.len2 + 1)
    }

    #[inline(always)]
    fn index(&self, i: usize, j: usize) -> Option<usize> {
        Some(i * (self.len2 + 1) + j)
    }

    #[inline(always)]
    fn columns(&self, _: usize) -> Range<usize> {
        0..self.len2
    }

    fn first_row(&self) -> usize {
        self.len2
    }

    fn first_column(&self) -> usize {
        self.len1
    }
}

/// Diagonal band around the main diagonal, widened by the length difference of the sequences.
/// Cell `(i, j)` is stored iff `-column_delta <= j - i <= row_factor - column_delta`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) struct Band {
    len1: usize,
    len2: usize,
    row_factor: usize,
    column_delta: usize,
}

impl Band {
    pub fn new(len1: usize, len2: usize, width: usize) -> Self {
        let width = width.min(len1).min(len2);
        Self {
            len1,
            len2,
            row_factor: 2 * width + len1.abs_diff(len2),
            column_delta: width + len1.saturating_sub(len2),
        }
    }

    #[inline(always)]
    fn contains(&self, i: usize, j: usize) -> bool {
        j + self.column_delta >= i && j <= i + self.row_factor - self.column_delta
    }
}

impl Layout for Band {
    fn size(&self) -> usize {
        self.len1 * self.row_factor + self.column_delta + self.len2 + 1
    }

    #[inline(always)]
    fn index(&self, i: usize, j: usize) -> Option<usize> {
        self.contains(i, j)
            .then(|| i * self.row_factor + j + self.column_delta)
    }

    #[inline(always)]
    fn columns(&self, row: usize) -> Range<usize> {
        let end = (row + self.row_factor - self.column_delta + 1).min(self.len2);
        row.saturating_sub(self.column_delta)..end
    }

    fn first_row(&self) -> usize {
        (self.row_factor - self.column_delta).min(self.len2)
    }

    fn first_column(&self) -> usize {
        self.column_delta.min(self.len1)
    }
}

/// Score matrix backed by a scratch buffer. Cells outside of the layout read as unreachable.
pub(crate) struct Matrix<'a, L: Layout> {
    data: &'a mut [i32],
    layout: L,
}

impl<'a, L: Layout> Matrix<'a, L> {
    pub fn new(data: &'a mut [i32], layout: L) -> Self {
        debug_assert!(data.len() >= layout.size());
        Self { data, layout }
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> i32 {
        match self.layout.index(i, j) {
            Some(ind) => self.data[ind],
            None => UNREACHABLE,
        }
    }

    #[inline(always)]
    pub fn set(&mut self, i: usize, j: usize, value: i32) {
        let ind = self.layout.index(i, j);
        debug_assert!(ind.is_some(), "Cell ({i}, {j}) is outside of the matrix layout");
        if let Some(ind) = ind {
            self.data[ind] = value;
        }
    }

    #[inline(always)]
    pub fn layout(&self) -> &L {
        &self.layout
    }
}
