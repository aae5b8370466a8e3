// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::{Index, Provider, Shape};

/// A provider whose value at each coordinate is that coordinate.
///
/// Materializing it gives an "index array".
///
/// ```
/// use ndlazy::{Array, Index, IndexProvider};
///
/// let a = Array::new(IndexProvider::new((2, 3)));
/// assert_eq!(a.get((1, 2)), Index::from((1, 2)));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IndexProvider<const N: usize>
{
    shape: Shape<N>,
}

impl<const N: usize> IndexProvider<N>
{
    pub fn new(shape: impl Into<Shape<N>>) -> Self
    {
        IndexProvider { shape: shape.into() }
    }
}

impl<const N: usize> Provider<N> for IndexProvider<N>
{
    type Elem = Index<N>;

    #[inline]
    fn shape(&self) -> Shape<N>
    {
        self.shape
    }

    #[inline(always)]
    fn provide(&self, index: &Index<N>) -> Index<N>
    {
        *index
    }
}
