// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::borrow::ToOwned;
use alloc::vec::Vec;
use core::fmt;
use core::mem::ManuallyDrop;
use core::ops;
use core::ptr::NonNull;
use core::slice;

use rawpointer::PointerExt;

use crate::error::ShapeError;

/// A contiguous, rank-agnostic block of values.
///
/// `Buffer` has value semantics: `clone` makes an independent deep copy of
/// every element, while moving it (or calling [`.take()`](Self::take))
/// transfers the allocation without touching any element.
///
/// Element access comes in three flavours: [`.at()`](Self::at) checks the
/// offset and returns an error, indexing with `[]` panics on a bad offset,
/// and the `unsafe` [`.uget()`](Self::uget) performs no check at all.
///
/// ```
/// use ndlazy::{Buffer, ShapeError};
///
/// let mut a = Buffer::from_elem(3, 1.);
/// let b = a.take();
/// assert!(a.is_empty());
/// assert_eq!(b.at(2), Ok(&1.));
/// assert_eq!(b.at(3), Err(ShapeError::OutOfBounds(3, 3)));
/// ```
// Like a Vec, but only ever built to its final length; no reallocation.
pub struct Buffer<A>
{
    ptr: NonNull<A>,
    len: usize,
    capacity: usize,
}

impl<A> Buffer<A>
{
    /// Create an empty buffer.
    pub fn new() -> Self
    {
        Self::from_vec(Vec::new())
    }

    /// Create a buffer of `count` clones of `value`.
    pub fn from_elem(count: usize, value: A) -> Self
    where A: Clone
    {
        Self::from_vec(alloc::vec![value; count])
    }

    /// Create a buffer of `count` default values.
    pub fn from_default(count: usize) -> Self
    where A: Default
    {
        Self::from_vec((0..count).map(|_| A::default()).collect())
    }

    /// Create a buffer that takes ownership of the vector's elements.
    pub fn from_vec(v: Vec<A>) -> Self
    {
        let mut v = ManuallyDrop::new(v);
        let len = v.len();
        let capacity = v.capacity();
        // this pointer is guaranteed to be non-null
        let ptr = unsafe { NonNull::new_unchecked(v.as_mut_ptr()) };
        Buffer { ptr, len, capacity }
    }

    /// Return the elements as a vector, without copying.
    pub fn into_vec(self) -> Vec<A>
    {
        ManuallyDrop::new(self).take_as_vec()
    }

    /// Move the storage out into a new buffer, leaving `self` empty.
    pub fn take(&mut self) -> Self
    {
        let v = self.take_as_vec();
        self.ptr = NonNull::dangling();
        Self::from_vec(v)
    }

    /// Return the number of elements.
    #[inline(always)]
    pub fn len(&self) -> usize
    {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool
    {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[A]
    {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [A]
    {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_ptr(&self) -> *const A
    {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, A>
    {
        self.as_slice().iter()
    }

    /// Return a reference to the element at `offset`.
    ///
    /// **Errors** with `ShapeError::OutOfBounds(offset, len)` if `offset` is
    /// not less than the length.
    pub fn at(&self, offset: usize) -> Result<&A, ShapeError>
    {
        if offset >= self.len {
            return Err(ShapeError::OutOfBounds(offset, self.len));
        }
        unsafe { Ok(self.uget(offset)) }
    }

    /// Return a mutable reference to the element at `offset`.
    ///
    /// **Errors** with `ShapeError::OutOfBounds(offset, len)` if `offset` is
    /// not less than the length.
    pub fn at_mut(&mut self, offset: usize) -> Result<&mut A, ShapeError>
    {
        if offset >= self.len {
            return Err(ShapeError::OutOfBounds(offset, self.len));
        }
        unsafe { Ok(self.uget_mut(offset)) }
    }

    /// Return a reference to the element at `offset` without bounds check.
    ///
    /// ## Safety
    ///
    /// `offset` must be less than `self.len()`.
    #[inline]
    pub unsafe fn uget(&self, offset: usize) -> &A
    {
        debug_assert!(offset < self.len, "offset {} out of bounds for length {}", offset, self.len);
        &*PointerExt::add(self.ptr, offset).as_ptr()
    }

    /// Return a mutable reference to the element at `offset` without bounds
    /// check.
    ///
    /// ## Safety
    ///
    /// `offset` must be less than `self.len()`.
    #[inline]
    pub unsafe fn uget_mut(&mut self, offset: usize) -> &mut A
    {
        debug_assert!(offset < self.len, "offset {} out of bounds for length {}", offset, self.len);
        &mut *PointerExt::add(self.ptr, offset).as_ptr()
    }

    fn take_as_vec(&mut self) -> Vec<A>
    {
        let capacity = self.capacity;
        let len = self.len;
        self.len = 0;
        self.capacity = 0;
        unsafe { Vec::from_raw_parts(self.ptr.as_ptr(), len, capacity) }
    }
}

impl<A> Default for Buffer<A>
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl<A> Clone for Buffer<A>
where A: Clone
{
    fn clone(&self) -> Self
    {
        Self::from_vec(self.as_slice().to_owned())
    }

    fn clone_from(&mut self, other: &Self)
    {
        let mut v = self.take_as_vec();
        let other = other.as_slice();

        if v.len() > other.len() {
            v.truncate(other.len());
        }
        let (front, back) = other.split_at(v.len());
        v.clone_from_slice(front);
        v.extend_from_slice(back);
        *self = Self::from_vec(v);
    }
}

impl<A> Drop for Buffer<A>
{
    fn drop(&mut self)
    {
        if self.capacity > 0 {
            // drop as a Vec.
            self.take_as_vec();
        }
    }
}

impl<A, B> PartialEq<Buffer<B>> for Buffer<A>
where A: PartialEq<B>
{
    /// Unequal lengths compare unequal without looking at any element.
    fn eq(&self, other: &Buffer<B>) -> bool
    {
        self.len == other.len && self.as_slice() == other.as_slice()
    }
}

impl<A: Eq> Eq for Buffer<A> {}

impl<A: fmt::Debug> fmt::Debug for Buffer<A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<A> ops::Index<usize> for Buffer<A>
{
    type Output = A;

    #[inline]
    fn index(&self, offset: usize) -> &A
    {
        &self.as_slice()[offset]
    }
}

impl<A> ops::IndexMut<usize> for Buffer<A>
{
    #[inline]
    fn index_mut(&mut self, offset: usize) -> &mut A
    {
        &mut self.as_mut_slice()[offset]
    }
}

impl<A> From<Vec<A>> for Buffer<A>
{
    fn from(v: Vec<A>) -> Self
    {
        Self::from_vec(v)
    }
}

impl<A> FromIterator<A> for Buffer<A>
{
    fn from_iter<I>(iterable: I) -> Self
    where I: IntoIterator<Item = A>
    {
        Self::from_vec(iterable.into_iter().collect())
    }
}

impl<'a, A> IntoIterator for &'a Buffer<A>
{
    type Item = &'a A;
    type IntoIter = slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}

unsafe impl<A> Sync for Buffer<A> where A: Sync {}
unsafe impl<A> Send for Buffer<A> where A: Send {}
