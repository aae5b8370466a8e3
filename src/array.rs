// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use core::ops;

use crate::evaluate::evaluate_as_unique;
use crate::{AccessPattern, Index, Provider, Shape, SharedProvider, UniqueProvider};

/// An n-dimensional array: a provider paired with an access pattern.
///
/// Indexing an array first translates the requested local index through
/// the access pattern ([`AccessPattern::map_index`]) and then queries the
/// provider at the result. That single indirection is the whole cost of a
/// lazy transformation: replacing the access pattern re-strides or slices
/// the array without allocating or copying.
///
/// The shape of an array is the shape of its access pattern, which for an
/// array built with [`Array::new`] is the provider's own shape.
///
/// [`.unique()`](Self::unique) and [`.shared()`](Self::shared) materialize
/// the array into freshly allocated memory.
///
/// ```
/// use ndlazy::{Array, IndexProvider, Index};
///
/// let a = Array::new(IndexProvider::new((4, 6)));
/// let strided = a.clone().with_access_pattern(a.access_pattern().with_jumps((2, 3)));
/// assert_eq!(strided.shape(), [2, 2]);
/// assert_eq!(strided.get((1, 1)), Index::from((2, 3)));
///
/// let owned = strided.unique();
/// assert_eq!(owned[(1, 0)], Index::from((2, 0)));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Array<P, const N: usize>
{
    provider: P,
    pattern: AccessPattern<N>,
}

impl<P, const N: usize> Array<P, N>
where P: Provider<N>
{
    /// Create an array over every element of `provider`, using the
    /// canonical access pattern of its shape.
    pub fn new(provider: P) -> Self
    {
        let pattern = AccessPattern::from_shape(provider.shape());
        Array { provider, pattern }
    }

    /// Return the element at local index `index`.
    #[inline]
    pub fn get(&self, index: impl Into<Index<N>>) -> P::Elem
    {
        self.provider.provide(&self.pattern.map_index(&index.into()))
    }

    /// Materialize the array into a new array backed by a unique provider.
    pub fn unique(&self) -> Array<UniqueProvider<P::Elem, N>, N>
    where P::Elem: Default + Clone
    {
        Array::new(evaluate_as_unique(&self.provider, &self.pattern))
    }

    /// Materialize the array into a new array backed by a shared provider.
    pub fn shared(&self) -> Array<SharedProvider<P::Elem, N>, N>
    where P::Elem: Default + Clone
    {
        Array::new(evaluate_as_unique(&self.provider, &self.pattern).into_shared())
    }
}

impl<P, const N: usize> Array<P, N>
{
    /// Create an array from a provider and any access pattern of the same
    /// rank.
    ///
    /// The pattern is not checked against the provider's shape; indices it
    /// maps to must be ones the provider can answer.
    pub fn from_parts(provider: P, pattern: AccessPattern<N>) -> Self
    {
        Array { provider, pattern }
    }

    /// Return the array with its access pattern replaced by `pattern`.
    #[must_use]
    pub fn with_access_pattern(self, pattern: AccessPattern<N>) -> Self
    {
        Array { pattern, ..self }
    }

    #[inline]
    pub fn shape(&self) -> Shape<N>
    {
        self.pattern.shape()
    }

    /// Return the number of elements the access pattern enumerates.
    ///
    /// This is the product of the shape, except that a rank 0 array
    /// enumerates nothing and has size 0.
    #[inline]
    pub fn size(&self) -> usize
    {
        self.pattern.size()
    }

    pub fn provider(&self) -> &P
    {
        &self.provider
    }

    pub fn access_pattern(&self) -> &AccessPattern<N>
    {
        &self.pattern
    }

    pub fn into_parts(self) -> (P, AccessPattern<N>)
    {
        (self.provider, self.pattern)
    }
}

impl<A, const N: usize> Array<UniqueProvider<A, N>, N>
{
    /// Return a mutable reference to the element at local index `index`.
    #[inline]
    pub fn get_mut(&mut self, index: impl Into<Index<N>>) -> &mut A
    {
        let index = self.pattern.map_index(&index.into());
        self.provider.get_mut(index)
    }
}

impl<P, const N: usize> Provider<N> for Array<P, N>
where P: Provider<N>
{
    type Elem = P::Elem;

    #[inline]
    fn shape(&self) -> Shape<N>
    {
        Array::shape(self)
    }

    #[inline]
    fn size(&self) -> usize
    {
        Array::size(self)
    }

    #[inline]
    fn provide(&self, index: &Index<N>) -> P::Elem
    {
        self.provider.provide(&self.pattern.map_index(index))
    }
}

macro_rules! impl_index_memory {
    ($provider:ident) => {
        impl<A, I, const N: usize> ops::Index<I> for Array<$provider<A, N>, N>
        where I: Into<Index<N>>
        {
            type Output = A;

            #[inline]
            fn index(&self, index: I) -> &A
            {
                self.provider.get(self.pattern.map_index(&index.into()))
            }
        }
    };
}

impl_index_memory!(UniqueProvider);
impl_index_memory!(SharedProvider);

impl<A, I, const N: usize> ops::IndexMut<I> for Array<UniqueProvider<A, N>, N>
where I: Into<Index<N>>
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut A
    {
        self.get_mut(index)
    }
}
