// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "ndlazy"]
#![doc(html_root_url = "https://docs.rs/ndlazy/0.1/")]
#![cfg_attr(not(feature = "std"), no_std)]

//! The `ndlazy` crate provides lazily evaluated n-dimensional arrays.
//!
//! An [`Array`] pairs a *provider*, a function from a multi-index to a
//! value, with an [`AccessPattern`], a strided enumeration of multi-indices.
//! Slicing and re-striding replace the access pattern and zipping combines
//! providers, all without touching memory; [`.unique()`](Array::unique) and
//! [`.shared()`](Array::shared) materialize any such composition into owned
//! memory.
//!
//! - Coordinates: [`Shape`], [`Index`], [`Jumps`] and [`Strides`], fixed-rank
//!   `Copy` values with the rank `N` in their type.
//! - [`AccessPattern`]: `(start, final, jumps)` per axis, with odometer
//!   iteration ([`AccessPattern::advance`]).
//! - [`Buffer`]: contiguous owned storage with deep-copy `clone`.
//! - Providers implementing [`Provider`]: [`IndexProvider`],
//!   [`UniqueProvider`] (exclusive, mutable), [`SharedProvider`]
//!   (reference counted, immutable) and [`ZippedProvider`].
//! - Materialization: [`evaluate_as_unique`] and friends.
//!
//! ```
//! use ndlazy::{Array, UniqueProvider};
//!
//! let p = UniqueProvider::from_shape_vec((4, 4), (0..16).collect()).unwrap();
//! let a = Array::new(p);
//!
//! // every other row, every second column starting at column 1
//! let pattern = a.access_pattern().with_start((0, 1)).with_jumps((2, 2));
//! let b = Array::from_parts(a.provider(), pattern);
//! assert_eq!(b.shape(), [2, 2]);
//! assert_eq!(b.get((1, 1)), 11);
//!
//! let c = b.shared();
//! assert_eq!(c.provider().as_slice(), &[1, 3, 9, 11]);
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `std`: Rust standard library (enabled by default). Without it the
//!   crate is `no_std` and needs only `alloc`.

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod access_pattern;
mod array;
mod buffer;
mod dimension;
mod error;
mod evaluate;
mod indexes;
mod provider;

pub use crate::access_pattern::AccessPattern;
pub use crate::array::Array;
pub use crate::buffer::Buffer;
pub use crate::dimension::{Index, Jumps, Shape, Strides};
pub use crate::error::ShapeError;
pub use crate::evaluate::{evaluate_as_shared, evaluate_as_unique, evaluate_full_as_shared, evaluate_full_as_unique};
pub use crate::provider::{
    try_zip_arrays,
    zip_arrays,
    IndexProvider,
    Provider,
    ProviderTuple,
    SharedProvider,
    UniqueProvider,
    ZippedProvider,
};

/// Iterators over access patterns.
pub mod iter
{
    pub use crate::indexes::Indices;
}
