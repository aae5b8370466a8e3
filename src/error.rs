// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::boxed::Box;
use core::fmt;

/// An error related to sequence length, shape size or buffer bounds.
///
/// All errors are produced synchronously by the call that detected them;
/// no constructor leaves a partially built value behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError
{
    /// sequence built from a source of the wrong length, (rank, found)
    IncompatibleLength(usize, usize),
    /// shape element count disagrees with the buffer length, (shape size, buffer length)
    IncompatibleSize(usize, usize),
    /// arrays combined elementwise have different shapes, (lhs, rhs)
    IncompatibleShapes(Box<[usize]>, Box<[usize]>),
    /// checked access past the end of a buffer, (offset, length)
    OutOfBounds(usize, usize),
    /// shape element count does not fit in `usize`
    Overflow,
}

impl ShapeError
{
    fn description(&self) -> &'static str
    {
        match *self {
            ShapeError::IncompatibleLength(..) => "sequence constructed from range of wrong size",
            ShapeError::IncompatibleSize(..) => "shape and buffer sizes do not match",
            ShapeError::IncompatibleShapes(..) => "incompatible shapes",
            ShapeError::OutOfBounds(..) => "buffer index out of range",
            ShapeError::Overflow => "arithmetic overflow",
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShapeError {}

impl fmt::Display for ShapeError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match *self {
            ShapeError::IncompatibleLength(rank, found) => {
                write!(f, "{}: expected {}, found {}", self.description(), rank, found)
            }
            ShapeError::IncompatibleSize(size, len) => {
                write!(f, "{}: shape has {} elements, buffer has {}", self.description(), size, len)
            }
            ShapeError::IncompatibleShapes(ref a, ref b) => {
                write!(f, "{}: {:?} and {:?}", self.description(), a, b)
            }
            ShapeError::OutOfBounds(offset, len) => {
                write!(f, "{} on index {} / {}", self.description(), offset, len)
            }
            ShapeError::Overflow => write!(f, "{}: shape size exceeds usize", self.description()),
        }
    }
}

#[inline]
pub(crate) fn incompatible_shapes(a: &[usize], b: &[usize]) -> ShapeError
{
    ShapeError::IncompatibleShapes(a.into(), b.into())
}
