// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetries of a rectangular board.
//!
//! A rectangle that is not square has four symmetries (the Klein four-group:
//! identity, two flips and the half turn). A square board adds the four
//! elements that swap rows and columns, giving the dihedral group of order 8.
//!
//! Each symmetry is a [`Remapping`] from a destination cell `(i, j)` to the
//! source cell `(k, l)` it is copied from. Remappings are precomputed as
//! permutations of cell indices, in the style of a permutation table:
//! `image[dest] = state[permutation[dest]]`.
//!
//! On a torus every one of these commutes with the Life rule, which is what
//! lets the search skip configurations symmetric to ones it has already seen.

use strum_macros::{EnumCount as EnumCountMacro, EnumIter};
use strum::IntoEnumIterator;

/// One element of the symmetry group of a rectangle.
///
/// Declaration order is the generator order and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter)]
pub enum Symmetry {
    Identity,
    /// Mirror left-right: `(i, j) <- (i, w-1-j)`.
    FlipHorizontal,
    /// Mirror top-bottom: `(i, j) <- (h-1-i, j)`.
    FlipVertical,
    /// Half turn: `(i, j) <- (h-1-i, w-1-j)`.
    Rotate180,
    /// Reflect in the main diagonal: `(i, j) <- (j, i)`. Square boards only.
    Transpose,
    /// Quarter turn: `(i, j) <- (j, n-1-i)`. Square boards only.
    TransposeFlipHorizontal,
    /// Three-quarter turn: `(i, j) <- (n-1-j, i)`. Square boards only.
    TransposeFlipVertical,
    /// Reflect in the anti-diagonal: `(i, j) <- (n-1-j, n-1-i)`. Square boards only.
    TransposeRotate180,
}

impl Symmetry {
    /// Whether this symmetry swaps rows and columns, and so only exists on
    /// square boards.
    pub fn requires_square(self) -> bool {
        matches!(
            self,
            Symmetry::Transpose
                | Symmetry::TransposeFlipHorizontal
                | Symmetry::TransposeFlipVertical
                | Symmetry::TransposeRotate180
        )
    }

    /// Source coordinate for destination `(i, j)` on a `height` x `width` board.
    pub fn source(self, i: usize, j: usize, height: usize, width: usize) -> (usize, usize) {
        match self {
            Symmetry::Identity => (i, j),
            Symmetry::FlipHorizontal => (i, width - 1 - j),
            Symmetry::FlipVertical => (height - 1 - i, j),
            Symmetry::Rotate180 => (height - 1 - i, width - 1 - j),
            Symmetry::Transpose => (j, i),
            Symmetry::TransposeFlipHorizontal => (j, width - 1 - i),
            Symmetry::TransposeFlipVertical => (height - 1 - j, i),
            Symmetry::TransposeRotate180 => (height - 1 - j, width - 1 - i),
        }
    }
}

/// A symmetry bound to concrete board dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remapping {
    symmetry: Symmetry,
    height: usize,
    width: usize,
    /// `permutation[i * width + j]` is the index of `source(i, j)`.
    permutation: Vec<usize>,
}

impl Remapping {
    /// Bind `symmetry` to a `height` x `width` board.
    ///
    /// # Panics
    ///
    /// Panics if `symmetry` swaps rows and columns but the board is not square.
    pub fn new(symmetry: Symmetry, height: usize, width: usize) -> Self {
        assert!(
            !symmetry.requires_square() || height == width,
            "{:?} needs a square board, got {}x{}",
            symmetry,
            height,
            width
        );
        let permutation = (0..height)
            .flat_map(|i| (0..width).map(move |j| (i, j)))
            .map(|(i, j)| {
                let (k, l) = symmetry.source(i, j, height, width);
                k * width + l
            })
            .collect();
        Self {
            symmetry,
            height,
            width,
            permutation,
        }
    }

    pub fn symmetry(&self) -> Symmetry {
        self.symmetry
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Source coordinate `(k, l)` for destination `(i, j)`.
    pub fn source(&self, i: usize, j: usize) -> (usize, usize) {
        self.symmetry.source(i, j, self.height, self.width)
    }

    /// Source cell index for every destination cell index.
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    pub fn is_identity(&self) -> bool {
        self.symmetry == Symmetry::Identity
    }
}

/// Generate the symmetries of a `height` x `width` board.
///
/// Yields 4 remappings (8 for a square board) in [`Symmetry`] declaration
/// order. With `include_identity` false the identity is skipped, which is
/// what callers looking for a *different* representation of a board want.
///
/// # Examples
///
/// ```
/// use life_oscillators::symmetry::{symmetries, Symmetry};
///
/// let kinds: Vec<Symmetry> = symmetries(3, 4, false).map(|r| r.symmetry()).collect();
/// assert_eq!(
///     kinds,
///     vec![Symmetry::FlipHorizontal, Symmetry::FlipVertical, Symmetry::Rotate180]
/// );
/// assert_eq!(symmetries(3, 3, true).count(), 8);
/// ```
pub fn symmetries(
    height: usize,
    width: usize,
    include_identity: bool,
) -> impl Iterator<Item = Remapping> {
    let square = height == width;
    Symmetry::iter()
        .filter(move |s| include_identity || *s != Symmetry::Identity)
        .filter(move |s| square || !s.requires_square())
        .map(move |s| Remapping::new(s, height, width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GridState;
    use strum::EnumCount;

    #[test]
    fn test_group_sizes() {
        assert_eq!(Symmetry::COUNT, 8);
        assert_eq!(symmetries(3, 4, true).count(), 4);
        assert_eq!(symmetries(3, 4, false).count(), 3);
        assert_eq!(symmetries(3, 3, true).count(), 8);
        assert_eq!(symmetries(3, 3, false).count(), 7);
        assert_eq!(symmetries(5, 2, false).count(), 3);
    }

    #[test]
    fn test_generator_order() {
        let kinds: Vec<Symmetry> = symmetries(4, 4, true).map(|r| r.symmetry()).collect();
        assert_eq!(kinds, Symmetry::iter().collect::<Vec<_>>());
        assert!(symmetries(4, 4, true).next().unwrap().is_identity());
    }

    #[test]
    fn test_flip_horizontal_permutation() {
        let remap = Remapping::new(Symmetry::FlipHorizontal, 2, 3);
        assert_eq!(remap.permutation(), &[2, 1, 0, 5, 4, 3]);
        assert_eq!(remap.source(1, 0), (1, 2));
    }

    #[test]
    fn test_square_elements_distinct() {
        // An asymmetric pattern has 8 distinct images on a square board.
        let state: GridState = "oo./.../o..".parse().unwrap();
        let images: std::collections::HashSet<GridState> = symmetries(3, 3, true)
            .map(|r| state.apply_symmetry(&r))
            .collect();
        assert_eq!(images.len(), 8);
    }

    #[test]
    fn test_quarter_turn() {
        let state: GridState = "oo./.../...".parse().unwrap();
        let turned = state.apply_symmetry(&Remapping::new(Symmetry::TransposeFlipHorizontal, 3, 3));
        assert_eq!(turned.to_string(), ".../o../o..");
    }

    #[test]
    fn test_involutions() {
        let state: GridState = "oo../o..o/...o".parse().unwrap();
        for remap in symmetries(3, 4, true) {
            assert_eq!(state.apply_symmetry(&remap).apply_symmetry(&remap), state);
        }

        let square: GridState = "oo./o../..o".parse().unwrap();
        for kind in [Symmetry::Transpose, Symmetry::TransposeRotate180] {
            let remap = Remapping::new(kind, 3, 3);
            assert_eq!(square.apply_symmetry(&remap).apply_symmetry(&remap), square);
        }
    }

    #[test]
    #[should_panic(expected = "needs a square board")]
    fn test_transpose_on_rectangle() {
        Remapping::new(Symmetry::Transpose, 3, 4);
    }

    #[test]
    #[should_panic(expected = "applied to a")]
    fn test_dimension_mismatch() {
        let state = GridState::empty(3, 5).unwrap();
        state.apply_symmetry(&Remapping::new(Symmetry::FlipVertical, 3, 4));
    }
}
