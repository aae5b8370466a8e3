// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::indexes::Indices;
use crate::{Index, Jumps, Shape};

/// A strided, sliceable enumeration of the coordinates of an index space.
///
/// An access pattern is a `(start, final, jumps)` triple per axis. It
/// enumerates `start[n], start[n] + jumps[n], ...` below `final[n]` on
/// every axis, in row-major order (the last axis varies fastest), and it
/// translates *local* coordinates `i` into pattern coordinates with
/// [`.map_index()`](Self::map_index). An [`Array`](crate::Array) applies
/// that translation before querying its provider, which is how slicing and
/// re-striding compose without touching memory.
///
/// Access patterns are small `Copy` values; the `with_*` methods return a
/// modified copy and never change the original.
///
/// ```
/// use ndlazy::{AccessPattern, Index, Shape};
///
/// let pattern = AccessPattern::from_shape(Shape::from((4, 6))).with_jumps((2, 3));
/// assert_eq!(pattern.shape(), Shape::from((2, 2)));
///
/// let visited: Vec<Index<2>> = pattern.indices().collect();
/// assert_eq!(visited, [[0, 0], [0, 3], [2, 0], [2, 3]].map(Index::new));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct AccessPattern<const N: usize>
{
    start: Index<N>,
    final_: Index<N>,
    jumps: Jumps<N>,
}

impl<const N: usize> Default for AccessPattern<N>
{
    /// Start and final all zero, jumps all one: the empty pattern.
    fn default() -> Self
    {
        AccessPattern {
            start: Index::uniform(0),
            final_: Index::uniform(0),
            jumps: Jumps::uniform(1),
        }
    }
}

impl<const N: usize> AccessPattern<N>
{
    /// Create a pattern from explicit start, final and jumps.
    ///
    /// **Panics** if any jump is zero or negative.
    pub fn new(start: impl Into<Index<N>>, final_: impl Into<Index<N>>, jumps: impl Into<Jumps<N>>) -> Self
    {
        Self::default()
            .with_start(start)
            .with_final(final_)
            .with_jumps(jumps)
    }

    /// Create the canonical pattern of `shape`: zero start, unit jumps and
    /// `shape` as the final index, enumerating every valid index once.
    pub fn from_shape(shape: impl Into<Shape<N>>) -> Self
    {
        Self::default().with_final(shape.into())
    }

    /// Return a copy of the pattern with a new start index.
    #[must_use]
    pub fn with_start(&self, start: impl Into<Index<N>>) -> Self
    {
        AccessPattern {
            start: start.into(),
            ..*self
        }
    }

    /// Return a copy of the pattern with a new final index.
    #[must_use]
    pub fn with_final(&self, final_: impl Into<Index<N>>) -> Self
    {
        AccessPattern {
            final_: final_.into(),
            ..*self
        }
    }

    /// Return a copy of the pattern with new jumps.
    ///
    /// **Panics** if any jump is zero or negative.
    #[must_use]
    #[track_caller]
    pub fn with_jumps(&self, jumps: impl Into<Jumps<N>>) -> Self
    {
        let jumps = jumps.into();
        assert!(jumps.iter().all(|&j| j > 0), "access pattern jumps must be positive, got {:?}", jumps);
        AccessPattern { jumps, ..*self }
    }

    #[inline(always)]
    pub fn start(&self) -> Index<N>
    {
        self.start
    }

    /// Return the final (exclusive) index.
    #[inline(always)]
    pub fn final_index(&self) -> Index<N>
    {
        self.final_
    }

    #[inline(always)]
    pub fn jumps(&self) -> Jumps<N>
    {
        self.jumps
    }

    /// Return the number of local coordinates per axis.
    ///
    /// Axis `n` has extent `final[n] / jumps[n] - start[n] / jumps[n]` in
    /// integer division, or zero if that would be negative.
    pub fn shape(&self) -> Shape<N>
    {
        let mut shape = Shape::uniform(0);
        for n in 0..N {
            let jump = self.jump(n);
            shape[n] = (self.final_[n] / jump).saturating_sub(self.start[n] / jump);
        }
        shape
    }

    /// Return the number of coordinates the pattern enumerates.
    ///
    /// A rank 0 pattern is empty.
    pub fn size(&self) -> usize
    {
        if N == 0 {
            0
        } else {
            self.shape().size()
        }
    }

    /// Return `true` if the pattern enumerates no coordinates.
    pub fn empty(&self) -> bool
    {
        N == 0 || self.shape().iter().any(|&len| len == 0)
    }

    /// Return `true` if `index` is a valid local coordinate of the pattern.
    #[inline]
    pub fn contains(&self, index: impl Into<Index<N>>) -> bool
    {
        self.shape().contains(&index.into())
    }

    /// Translate the local coordinate `index` into a pattern coordinate:
    /// `start + jumps * index` on every axis.
    #[inline]
    pub fn map_index(&self, index: &Index<N>) -> Index<N>
    {
        let mut result = self.start;
        for n in 0..N {
            result[n] += self.jump(n) * index[n];
        }
        result
    }

    /// Step `index` to the next pattern coordinate in row-major order.
    ///
    /// The last axis is incremented by its jump; an axis that reaches or
    /// passes its final value is reset to its start and the increment is
    /// carried into the axis before it. Returns `true` if a next coordinate
    /// exists. When the carry runs off axis 0 the index is set to exactly
    /// the final index and `false` is returned.
    pub fn advance(&self, index: &mut Index<N>) -> bool
    {
        if N == 0 {
            return false;
        }
        let mut n = N - 1;
        index[n] += self.jump(n);

        while index[n] >= self.final_[n] {
            if n == 0 {
                *index = self.final_;
                return false;
            }
            index[n] = self.start[n];
            n -= 1;
            index[n] += self.jump(n);
        }
        true
    }

    /// Return an iterator of the pattern coordinates, in row-major order.
    ///
    /// The iterator yields `self.map_index(i)` for every local coordinate
    /// `i` within [`.shape()`](Self::shape), so exactly
    /// [`.size()`](Self::size) items.
    pub fn indices(&self) -> Indices<N>
    {
        Indices::new(self)
    }

    /// Return the pattern whose odometer bound on each axis is
    /// `start + jumps * shape`, so [`.advance()`](Self::advance) visits
    /// exactly `shape()` values per axis even when `final - start` is not a
    /// multiple of the jump.
    pub(crate) fn bounded(&self) -> Self
    {
        AccessPattern {
            final_: self.map_index(&self.shape().into()),
            ..*self
        }
    }

    #[inline(always)]
    fn jump(&self, axis: usize) -> usize
    {
        self.jumps[axis] as usize
    }
}

impl<'a, const N: usize> IntoIterator for &'a AccessPattern<N>
{
    type Item = Index<N>;
    type IntoIter = Indices<N>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.indices()
    }
}

impl<const N: usize> IntoIterator for AccessPattern<N>
{
    type Item = Index<N>;
    type IntoIter = Indices<N>;

    fn into_iter(self) -> Self::IntoIter
    {
        Indices::new(&self)
    }
}
