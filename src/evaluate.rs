// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Materialization: evaluating a provider over an access pattern into
//! freshly owned memory.

use log::debug;

use crate::{AccessPattern, Index, Provider, SharedProvider, UniqueProvider};

/// Evaluate `provider` at every coordinate of `pattern` into a new unique
/// provider of shape `pattern.shape()`.
///
/// The element at local index `i` of the result is
/// `provider.provide(&pattern.map_index(&i))`. The walk makes exactly
/// `pattern.size()` provider calls and allocates only the result buffer,
/// which is default-filled first.
///
/// A rank 0 pattern enumerates no coordinates, yet the result of rank 0
/// still has one element; it receives the provider's scalar value.
///
/// ```
/// use ndlazy::{evaluate_as_unique, AccessPattern, IndexProvider, Index};
///
/// let ix = IndexProvider::new((4, 6));
/// let pattern = AccessPattern::from_shape((4, 6)).with_start((1, 0)).with_jumps((2, 3));
/// let p = evaluate_as_unique(&ix, &pattern);
/// assert_eq!(p.shape(), [2, 2]);
/// assert_eq!(p[(1, 1)], Index::from((3, 3)));
/// ```
pub fn evaluate_as_unique<P, const N: usize>(provider: &P, pattern: &AccessPattern<N>) -> UniqueProvider<P::Elem, N>
where
    P: Provider<N> + ?Sized,
    P::Elem: Default,
{
    let target_shape = pattern.shape();
    let mut target = UniqueProvider::from_shape(target_shape);
    debug!(
        "materializing {} elements of shape {:?} from provider of shape {:?}",
        pattern.size(),
        target_shape,
        provider.shape()
    );
    if N == 0 {
        // a rank 0 pattern enumerates nothing, but the target still holds
        // the provider's single scalar
        *target.get_mut(Index::new([0; N])) = provider.provide(&pattern.start());
        return target;
    }
    if pattern.empty() {
        return target;
    }

    // Two odometers stepped together: the target over its own canonical
    // pattern, the source over the caller's pattern.
    let target_pattern = AccessPattern::from_shape(target_shape);
    let source_pattern = pattern.bounded();
    let mut target_index = target_pattern.start();
    let mut source_index = source_pattern.start();
    loop {
        *target.get_mut(target_index) = provider.provide(&source_index);
        let target_more = target_pattern.advance(&mut target_index);
        let source_more = source_pattern.advance(&mut source_index);
        debug_assert_eq!(target_more, source_more);
        if !target_more {
            break;
        }
    }
    target
}

/// Like [`evaluate_as_unique`], then move the result into shared ownership.
pub fn evaluate_as_shared<P, const N: usize>(provider: &P, pattern: &AccessPattern<N>) -> SharedProvider<P::Elem, N>
where
    P: Provider<N> + ?Sized,
    P::Elem: Default,
{
    evaluate_as_unique(provider, pattern).into_shared()
}

/// Evaluate every element of `provider` over its canonical access pattern.
pub fn evaluate_full_as_unique<P, const N: usize>(provider: &P) -> UniqueProvider<P::Elem, N>
where
    P: Provider<N> + ?Sized,
    P::Elem: Default,
{
    evaluate_as_unique(provider, &AccessPattern::from_shape(provider.shape()))
}

/// Evaluate every element of `provider` into a shared provider.
pub fn evaluate_full_as_shared<P, const N: usize>(provider: &P) -> SharedProvider<P::Elem, N>
where
    P: Provider<N> + ?Sized,
    P::Elem: Default,
{
    evaluate_full_as_unique(provider).into_shared()
}
