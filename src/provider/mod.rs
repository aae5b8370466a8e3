// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Providers: the index → value mappings that back an array.

use crate::{Index, Shape};

mod index;
mod shared;
mod unique;
mod zip;

pub use self::index::IndexProvider;
pub use self::shared::SharedProvider;
pub use self::unique::UniqueProvider;
pub use self::zip::{try_zip_arrays, zip_arrays, ProviderTuple, ZippedProvider};

/// A source of array elements: a shape and a mapping from each index of
/// that shape to a value.
///
/// Each provider type is a distinct static type, so arrays composed from
/// providers are monomorphized and element access is a direct call.
///
/// `provide` performs no validation of its own: callers pass indices
/// within `shape()`. The memory-backed providers turn an index into a
/// linear offset and index their buffer with it, so an index outside the
/// shape either reads some other element or panics, but never touches
/// memory outside the buffer.
///
/// If `P` implements `Provider`, so does `&P`, which lets arrays and
/// providers be borrowed into zips and materialization.
pub trait Provider<const N: usize>
{
    /// The element type produced for each index.
    type Elem;

    fn shape(&self) -> Shape<N>;

    /// Return the number of elements, the product of the shape.
    fn size(&self) -> usize
    {
        self.shape().size()
    }

    /// Return the element at `index`.
    fn provide(&self, index: &Index<N>) -> Self::Elem;
}

impl<'a, P, const N: usize> Provider<N> for &'a P
where P: Provider<N> + ?Sized
{
    type Elem = P::Elem;

    #[inline]
    fn shape(&self) -> Shape<N>
    {
        (**self).shape()
    }

    #[inline]
    fn size(&self) -> usize
    {
        (**self).size()
    }

    #[inline]
    fn provide(&self, index: &Index<N>) -> Self::Elem
    {
        (**self).provide(index)
    }
}
