use std::fmt::{self, Debug};

use bitvec::{slice::BitSlice, vec::BitVec};

/// A square matrix of boolean flags, stored row-major in a single bitvec.
///
/// The side length is tracked explicitly and changes only through
/// [`Self::push_vertex`] and [`Self::remove_vertex`], which keep the matrix
/// square by growing or splicing a row and a column together.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FlagMatrix {
    /// Invariant: `bits.len() == size * size`.
    bits: BitVec,
    size: usize,
}

impl FlagMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `size` x `size` matrix with every flag cleared.
    pub fn with_size(size: usize) -> Self {
        FlagMatrix {
            bits: BitVec::repeat(false, size * size),
            size,
        }
    }

    /// The number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "index ({row}, {col}) out of bounds for {0}x{0} matrix",
            self.size
        );
        row * self.size + col
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.bits[self.index(row, col)]
    }

    /// Sets the flag at `row` and `col`, returning its previous value.
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> bool {
        let index = self.index(row, col);
        self.bits.replace(index, value)
    }

    pub fn row(&self, row: usize) -> &BitSlice {
        let start = self.index(row, 0);
        &self.bits[start..start + self.size]
    }

    /// Iterates over the flags in column `col`, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = bool> + '_ {
        let start = self.index(0, col);
        self.bits[start..].iter().by_vals().step_by(self.size)
    }

    /// Number of set flags in `row`.
    pub fn row_count(&self, row: usize) -> usize {
        self.row(row).count_ones()
    }

    /// Number of set flags in `col`.
    pub fn column_count(&self, col: usize) -> usize {
        self.column(col).filter(|&flag| flag).count()
    }

    /// Number of set flags in the whole matrix.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterates over the `(row, col)` coordinates of every set flag in
    /// row-major order.
    pub fn iter_ones(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.bits
            .iter_ones()
            .map(move |index| (index / size, index % size))
    }

    /// Grows the matrix by one: a cleared column is appended to every row,
    /// then a cleared row is appended.  Returns the index of the new row and
    /// column.
    pub fn push_vertex(&mut self) -> usize {
        let old_size = self.size;
        let new_size = old_size + 1;
        let mut bits = BitVec::with_capacity(new_size * new_size);
        for row in 0..old_size {
            bits.extend_from_bitslice(self.row(row));
            bits.push(false);
        }
        bits.resize(new_size * new_size, false);
        self.bits = bits;
        self.size = new_size;
        old_size
    }

    /// Shrinks the matrix by one, removing row `index` and column `index`.
    /// Rows and columns after `index` shift down by one.
    pub fn remove_vertex(&mut self, index: usize) {
        assert!(
            index < self.size,
            "index {index} out of bounds for {0}x{0} matrix",
            self.size
        );
        let new_size = self.size - 1;
        let mut bits = BitVec::with_capacity(new_size * new_size);
        for row in (0..self.size).filter(|&row| row != index) {
            let flags = self.row(row);
            bits.extend_from_bitslice(&flags[..index]);
            bits.extend_from_bitslice(&flags[index + 1..]);
        }
        self.bits = bits;
        self.size = new_size;
    }
}

impl Debug for FlagMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Row<'a>(&'a BitSlice);

        impl Debug for Row<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for flag in self.0.iter().by_vals() {
                    f.write_str(if flag { "1" } else { "0" })?;
                }
                Ok(())
            }
        }

        f.debug_list()
            .entries((0..self.size).map(|row| Row(self.row(row))))
            .finish()
    }
}
