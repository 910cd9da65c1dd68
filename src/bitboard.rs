//! A fixed-size bitboard implementation using const generics.
//!
//! Boards are an `N×N` grid packed into an unsigned integer `T`, stored
//! row-major. Besides the usual set/get helpers the board knows how to grow
//! itself by one cell in every direction (`halo`), which is what both the
//! placement buffer and the sunk-ship inference need.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the board", row, col)
            }
        }
    }
}

/// A fixed-size N×N bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const BOARD_BITS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    /// Create a new empty bitboard without size check.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Every cell of the board set.
    #[inline]
    pub fn full() -> Self {
        BitBoard { bits: Self::mask() }
    }

    /// Number of set cells.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Sets the bit at (row, col).
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        Self::check_bounds(row, col)?;
        self.bits = self.bits | (T::one() << (row * N + col));
        Ok(())
    }

    /// True when (row, col) is set. Cells off the board read as unset.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < N && col < N && self.bit(row * N + col)
    }

    /// The board grown by one cell in all eight directions, clipped to the
    /// grid. Set cells stay set.
    pub fn halo(&self) -> Self {
        let b = self.bits;
        // Shifting by one column wraps into the neighbouring row, and the
        // last cell spills past the grid. Both must be gone before the
        // vertical shifts, which would otherwise carry them back in.
        let grid = Self::mask();
        let wide = b | ((b << 1) & grid & !Self::column(0)) | ((b >> 1) & !Self::column(N - 1));
        let tall = wide | (wide << N) | (wide >> N);
        BitBoard {
            bits: tall & Self::mask(),
        }
    }

    #[inline]
    fn column(col: usize) -> T {
        (0..N).fold(T::zero(), |acc, row| acc | (T::one() << (row * N + col)))
    }

    /// Creates a bitboard from an iterator over `(row, col)` positions.
    pub fn from_cells<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new();
        for (r, c) in iter {
            board.set(r, c)?;
        }
        Ok(board)
    }

    /// Iterator over the set cells in row-major order.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<T, N> {
        SetBits {
            bits: self.bits,
            idx: 0,
        }
    }

    #[inline]
    fn bit(&self, idx: usize) -> bool {
        ((self.bits >> idx) & T::one()) != T::zero()
    }

    #[inline]
    fn check_bounds(row: usize, col: usize) -> Result<(), BitBoardError> {
        if row >= N || col >= N {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}x{}>:", N, N)?;
        for r in 0..N {
            for c in 0..N {
                let cell = if self.bit(r * N + c) { '■' } else { '□' };
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set cells of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for SetBits<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

/// Inverts the board, keeping bits beyond `N*N` cleared.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        BitBoard {
            bits: !self.bits & Self::mask(),
        }
    }
}

impl<T, const N: usize> BitAndAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits = self.bits & rhs.bits;
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type BB5 = BitBoard<u32, 5>;

    #[test]
    fn halo_of_corner_is_clipped() {
        let bb = BB5::from_cells([(0, 0)]).unwrap();
        let halo = bb.halo();
        let cells: alloc::vec::Vec<_> = halo.iter_set_bits().collect();
        assert_eq!(cells, [(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn halo_of_centre_is_three_by_three() {
        let bb = BB5::from_cells([(2, 2)]).unwrap();
        assert_eq!(bb.halo().count_ones(), 9);
        assert!(!bb.halo().contains(0, 2));
    }

    #[test]
    fn halo_does_not_wrap_rows() {
        let bb = BB5::from_cells([(1, 4)]).unwrap();
        let halo = bb.halo();
        assert_eq!(halo.count_ones(), 6);
        assert!(!halo.contains(2, 0));
        assert!(!halo.contains(0, 0));
        assert!(halo.contains(2, 3));
    }

    #[test]
    fn halo_of_last_cell_stays_in_last_row() {
        let bb = BB5::from_cells([(4, 4)]).unwrap();
        let cells: alloc::vec::Vec<_> = bb.halo().iter_set_bits().collect();
        assert_eq!(cells, [(3, 3), (3, 4), (4, 3), (4, 4)]);
    }

    #[test]
    fn halo_of_right_edge_is_two_columns() {
        let edge = BB5::from_cells((0..5).map(|r| (r, 4))).unwrap();
        let halo = edge.halo();
        assert_eq!(halo.count_ones(), 10);
        for r in 0..5 {
            assert!(halo.contains(r, 3) && halo.contains(r, 4));
            assert!(!halo.contains(r, 0), "({}, 0) wrapped in", r);
        }
    }

    #[test]
    fn full_width_halo_keeps_corners_apart() {
        type BB10 = BitBoard<u128, 10>;
        let corner = BB10::from_cells([(9, 9)]).unwrap();
        assert!(!corner.halo().contains(9, 0));
        let left = BB10::from_cells([(9, 0)]).unwrap();
        assert!(!left.halo().contains(8, 9));
        assert_eq!((corner.halo() & left.halo()).count_ones(), 0);
    }

    #[test]
    fn not_stays_inside_board() {
        let bb = !BB5::new();
        assert_eq!(bb, BB5::full());
        assert_eq!(bb.count_ones(), 25);
    }

    #[test]
    fn out_of_bounds_is_reported() {
        let mut bb = BB5::new();
        assert_eq!(
            bb.set(5, 0),
            Err(BitBoardError::IndexOutOfBounds { row: 5, col: 0 })
        );
        assert!(!bb.contains(7, 7));
    }
}
