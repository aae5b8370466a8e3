// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use core::iter::FusedIterator;

use crate::{AccessPattern, Index};

/// An iterator over the coordinates of an access pattern.
///
/// Iterator element type is `Index<N>`.
///
/// This iterator is created by [`AccessPattern::indices()`].
#[derive(Clone, Debug)]
pub struct Indices<const N: usize>
{
    pattern: AccessPattern<N>,
    index: Option<Index<N>>,
    remaining: usize,
}

impl<const N: usize> Indices<N>
{
    pub(crate) fn new(pattern: &AccessPattern<N>) -> Self
    {
        let index = if pattern.empty() { None } else { Some(pattern.start()) };
        Indices {
            pattern: pattern.bounded(),
            index,
            remaining: pattern.size(),
        }
    }
}

impl<const N: usize> Iterator for Indices<N>
{
    type Item = Index<N>;

    #[inline]
    fn next(&mut self) -> Option<Index<N>>
    {
        let index = self.index?;
        let mut next = index;
        self.index = if self.pattern.advance(&mut next) { Some(next) } else { None };
        self.remaining -= 1;
        Some(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>)
    {
        (self.remaining, Some(self.remaining))
    }
}

impl<const N: usize> ExactSizeIterator for Indices<N> {}

impl<const N: usize> FusedIterator for Indices<N> {}
