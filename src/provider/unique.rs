// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::vec::Vec;
use core::ops;

use log::trace;
use num_traits::Zero;

use crate::error::ShapeError;
use crate::provider::shared::Arc;
use crate::{Buffer, Index, Provider, Shape, SharedProvider, Strides};

/// A provider that exclusively owns a row-major buffer.
///
/// `UniqueProvider` is the only mutable provider: elements can be written
/// through [`.get_mut()`](Self::get_mut) or `[]`. It has a single owner;
/// `clone` is an explicit deep copy of the buffer.
///
/// It converts into a [`SharedProvider`] either by copying the buffer
/// ([`.to_shared()`](Self::to_shared)) or by moving it
/// ([`.into_shared()`](Self::into_shared)).
///
/// ```
/// use ndlazy::UniqueProvider;
///
/// let mut p = UniqueProvider::<f64, 2>::zeros((2, 3));
/// p[(1, 2)] = 5.;
/// assert_eq!(p.as_slice(), &[0., 0., 0., 0., 0., 5.]);
///
/// let s = p.into_shared();
/// assert_eq!(s[(1, 2)], 5.);
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UniqueProvider<A, const N: usize>
{
    shape: Shape<N>,
    strides: Strides<N>,
    buffer: Buffer<A>,
}

impl<A, const N: usize> UniqueProvider<A, N>
{
    /// Create a provider over `buffer`, laid out in row-major order.
    ///
    /// **Errors** with `ShapeError::Overflow` if the shape's size does not
    /// fit in `usize`, or `ShapeError::IncompatibleSize` if it differs from
    /// the buffer's length; the buffer is dropped.
    pub fn from_buffer(shape: impl Into<Shape<N>>, buffer: Buffer<A>) -> Result<Self, ShapeError>
    {
        let shape = shape.into();
        let size = shape.size_checked().ok_or(ShapeError::Overflow)?;
        if size != buffer.len() {
            return Err(ShapeError::IncompatibleSize(size, buffer.len()));
        }
        Ok(UniqueProvider {
            shape,
            strides: shape.strides_row_major(),
            buffer,
        })
    }

    /// Create a provider from a vector of elements in row-major order.
    ///
    /// **Errors** like [`from_buffer`](Self::from_buffer).
    pub fn from_shape_vec(shape: impl Into<Shape<N>>, v: Vec<A>) -> Result<Self, ShapeError>
    {
        Self::from_buffer(shape, Buffer::from_vec(v))
    }

    /// Create a provider of default values.
    pub fn from_shape(shape: impl Into<Shape<N>>) -> Self
    where A: Default
    {
        let shape = shape.into();
        Self::from_parts(shape, Buffer::from_default(shape.size()))
    }

    /// Create a provider with every element a clone of `elem`.
    pub fn from_elem(shape: impl Into<Shape<N>>, elem: A) -> Self
    where A: Clone
    {
        let shape = shape.into();
        Self::from_parts(shape, Buffer::from_elem(shape.size(), elem))
    }

    /// Create a provider filled with zeros.
    pub fn zeros(shape: impl Into<Shape<N>>) -> Self
    where A: Clone + Zero
    {
        Self::from_elem(shape, A::zero())
    }

    fn from_parts(shape: Shape<N>, buffer: Buffer<A>) -> Self
    {
        debug_assert_eq!(shape.size(), buffer.len());
        UniqueProvider {
            shape,
            strides: shape.strides_row_major(),
            buffer,
        }
    }

    #[inline]
    pub fn shape(&self) -> Shape<N>
    {
        self.shape
    }

    #[inline]
    pub fn size(&self) -> usize
    {
        self.buffer.len()
    }

    #[inline]
    pub fn strides(&self) -> Strides<N>
    {
        self.strides
    }

    /// Return a reference to the element at `index`.
    ///
    /// **Panics** if the index maps past the end of the buffer.
    #[inline]
    pub fn get(&self, index: impl Into<Index<N>>) -> &A
    {
        &self.buffer[self.strides.compute_offset(&index.into())]
    }

    /// Return a mutable reference to the element at `index`.
    ///
    /// **Panics** if the index maps past the end of the buffer.
    #[inline]
    pub fn get_mut(&mut self, index: impl Into<Index<N>>) -> &mut A
    {
        let offset = self.strides.compute_offset(&index.into());
        &mut self.buffer[offset]
    }

    /// Return the elements in memory (row-major) order.
    pub fn as_slice(&self) -> &[A]
    {
        self.buffer.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [A]
    {
        self.buffer.as_mut_slice()
    }

    pub fn buffer(&self) -> &Buffer<A>
    {
        &self.buffer
    }

    pub fn into_buffer(self) -> Buffer<A>
    {
        self.buffer
    }

    /// Copy the buffer into a new shared provider; `self` is unchanged.
    pub fn to_shared(&self) -> SharedProvider<A, N>
    where A: Clone
    {
        trace!("copying unique buffer of {} elements into shared ownership", self.buffer.len());
        SharedProvider::from_parts(self.shape, self.strides, Arc::new(self.buffer.clone()))
    }

    /// Move the buffer into a new shared provider without copying elements.
    pub fn into_shared(self) -> SharedProvider<A, N>
    {
        trace!("moving unique buffer of {} elements into shared ownership", self.buffer.len());
        SharedProvider::from_parts(self.shape, self.strides, Arc::new(self.buffer))
    }
}

impl<A, I, const N: usize> ops::Index<I> for UniqueProvider<A, N>
where I: Into<Index<N>>
{
    type Output = A;

    #[inline]
    fn index(&self, index: I) -> &A
    {
        self.get(index)
    }
}

impl<A, I, const N: usize> ops::IndexMut<I> for UniqueProvider<A, N>
where I: Into<Index<N>>
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut A
    {
        self.get_mut(index)
    }
}

impl<A, const N: usize> Provider<N> for UniqueProvider<A, N>
where A: Clone
{
    type Elem = A;

    #[inline]
    fn shape(&self) -> Shape<N>
    {
        self.shape
    }

    #[inline]
    fn provide(&self, index: &Index<N>) -> A
    {
        self.buffer[self.strides.compute_offset(index)].clone()
    }
}
