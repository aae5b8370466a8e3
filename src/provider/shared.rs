// Copyright 2019 ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use core::fmt;
use core::ops;

#[cfg(target_has_atomic = "ptr")]
pub(crate) use alloc::sync::Arc;
#[cfg(not(target_has_atomic = "ptr"))]
pub(crate) use portable_atomic_util::Arc;

use num_traits::Zero;

use crate::error::ShapeError;
use crate::{Buffer, Index, Provider, Shape, Strides};

/// A provider over a reference-counted, immutable row-major buffer.
///
/// Cloning a `SharedProvider` is O(1) and shares the allocation; the buffer
/// is never mutated after construction, so shared providers may be read
/// from several threads at once. It is freed when the last clone is
/// dropped.
#[derive(PartialEq, Eq)]
pub struct SharedProvider<A, const N: usize>
{
    shape: Shape<N>,
    strides: Strides<N>,
    buffer: Arc<Buffer<A>>,
}

impl<A, const N: usize> SharedProvider<A, N>
{
    /// Create a provider over a shared buffer, laid out in row-major order.
    ///
    /// **Errors** with `ShapeError::Overflow` if the shape's size does not
    /// fit in `usize`, or `ShapeError::IncompatibleSize` if it differs from
    /// the buffer's length.
    pub fn from_buffer(shape: impl Into<Shape<N>>, buffer: Arc<Buffer<A>>) -> Result<Self, ShapeError>
    {
        let shape = shape.into();
        let size = shape.size_checked().ok_or(ShapeError::Overflow)?;
        if size != buffer.len() {
            return Err(ShapeError::IncompatibleSize(size, buffer.len()));
        }
        Ok(Self::from_parts(shape, shape.strides_row_major(), buffer))
    }

    /// Create a provider of default values.
    pub fn from_shape(shape: impl Into<Shape<N>>) -> Self
    where A: Default
    {
        let shape = shape.into();
        let buffer = Arc::new(Buffer::from_default(shape.size()));
        Self::from_parts(shape, shape.strides_row_major(), buffer)
    }

    /// Create a provider filled with zeros.
    pub fn zeros(shape: impl Into<Shape<N>>) -> Self
    where A: Clone + Zero
    {
        let shape = shape.into();
        let buffer = Arc::new(Buffer::from_elem(shape.size(), A::zero()));
        Self::from_parts(shape, shape.strides_row_major(), buffer)
    }

    pub(crate) fn from_parts(shape: Shape<N>, strides: Strides<N>, buffer: Arc<Buffer<A>>) -> Self
    {
        debug_assert_eq!(shape.size(), buffer.len());
        SharedProvider { shape, strides, buffer }
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

    /// Return the elements in memory (row-major) order.
    pub fn as_slice(&self) -> &[A]
    {
        self.buffer.as_slice()
    }

    pub fn buffer(&self) -> &Arc<Buffer<A>>
    {
        &self.buffer
    }

    /// Return `true` if both providers read the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool
    {
        Arc::ptr_eq(&self.buffer, &other.buffer)
    }
}

impl<A, const N: usize> Clone for SharedProvider<A, N>
{
    fn clone(&self) -> Self
    {
        SharedProvider {
            shape: self.shape,
            strides: self.strides,
            buffer: Arc::clone(&self.buffer),
        }
    }
}

impl<A: fmt::Debug, const N: usize> fmt::Debug for SharedProvider<A, N>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("SharedProvider")
            .field("shape", &self.shape)
            .field("strides", &self.strides)
            .field("buffer", &*self.buffer)
            .finish()
    }
}

impl<A, I, const N: usize> ops::Index<I> for SharedProvider<A, N>
where I: Into<Index<N>>
{
    type Output = A;

    #[inline]
    fn index(&self, index: I) -> &A
    {
        self.get(index)
    }
}

impl<A, const N: usize> Provider<N> for SharedProvider<A, N>
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

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn clones_share_the_allocation()
    {
        let a = SharedProvider::<f32, 2>::zeros((3, 4));
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert_eq!(Arc::strong_count(a.buffer()), 2);
        drop(b);
        assert_eq!(Arc::strong_count(a.buffer()), 1);
    }

    #[test]
    fn buffer_length_must_match_shape()
    {
        let buffer = Arc::new(Buffer::from_elem(5, 1u8));
        let res = SharedProvider::<u8, 2>::from_buffer((2, 3), buffer);
        assert_eq!(res.err(), Some(ShapeError::IncompatibleSize(6, 5)));
    }

    #[test]
    fn providers_are_send_and_sync()
    {
        fn is_send_sync<T: Send + Sync>() {}
        is_send_sync::<SharedProvider<f64, 3>>();
    }
}
