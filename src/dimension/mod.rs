// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fixed-rank coordinate types: [`Shape`], [`Index`], [`Jumps`] and
//! [`Strides`].
//!
//! Each is a plain `Copy` value holding `N` integers, with the rank `N`
//! part of its static type; combining coordinates of different ranks is a
//! compile error.

use crate::error::ShapeError;

#[macro_use]
mod sequence;
mod conversion;

short_sequence! {
    /// Per-axis element counts of an array.
    ///
    /// ```
    /// use ndlazy::{Index, Shape};
    ///
    /// let shape = Shape::from((2, 3));
    /// assert_eq!(shape.size(), 6);
    /// assert!(shape.contains(&Index::from((1, 2))));
    /// assert!(!shape.contains(&Index::from((2, 0))));
    /// ```
    Shape, usize
}

short_sequence! {
    /// A concrete coordinate, valid for a shape iff every entry is less
    /// than the shape's entry on the same axis.
    Index, usize
}

short_sequence! {
    /// Per-axis step sizes of an access pattern.
    Jumps, isize
}

short_sequence! {
    /// Per-axis distances between consecutive elements in linear memory.
    Strides, usize
}

impl<const N: usize> Shape<N>
{
    /// Return `true` if `index` is a valid coordinate in this shape.
    #[inline]
    pub fn contains(&self, index: &Index<N>) -> bool
    {
        self.iter().zip(index).all(|(&len, &i)| i < len)
    }

    /// Compute the size while checking for overflow.
    pub fn size_checked(&self) -> Option<usize>
    {
        self.iter().try_fold(1usize, |size, &len| size.checked_mul(len))
    }

    /// Return the row-major memory strides for this shape.
    #[inline]
    pub fn strides_row_major(&self) -> Strides<N>
    {
        Strides::row_major(self)
    }
}

impl<const N: usize> Strides<N>
{
    /// Compute row-major strides for `shape`.
    ///
    /// Shape (a, b, c) => Give strides (b * c, c, 1)
    pub fn row_major(shape: &Shape<N>) -> Self
    {
        let mut strides = Self::uniform(0);
        let mut cum_prod = 1;
        for (stride, &len) in strides.as_mut_slice().iter_mut().rev().zip(shape.iter().rev()) {
            *stride = cum_prod;
            cum_prod *= len;
        }
        strides
    }

    /// Return the linear memory offset of `index`: `Σ index[n] * strides[n]`.
    #[inline]
    pub fn compute_offset(&self, index: &Index<N>) -> usize
    {
        self.iter().zip(index).map(|(&s, &i)| s * i).sum()
    }
}

impl<const N: usize> From<Shape<N>> for Index<N>
{
    /// Reinterpret a shape as the coordinate one past its last element on
    /// every axis; used as the final index of a full access pattern.
    #[inline]
    fn from(shape: Shape<N>) -> Self
    {
        Index::new(shape.into_array())
    }
}
