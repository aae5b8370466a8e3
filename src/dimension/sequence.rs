// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The fixed-rank coordinate sequence template.

/// Define a fixed-length, rank-parameterized sequence of integers.
///
/// All four coordinate types share this representation; they differ only
/// in element type and in the extra methods `dimension/mod.rs` attaches.
macro_rules! short_sequence {
    ($(#[$meta:meta])* $name:ident, $elem:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash)]
        pub struct $name<const N: usize>
        {
            values: [$elem; N],
        }

        impl<const N: usize> $name<N>
        {
            /// Create a sequence from its `N` entries.
            #[inline(always)]
            pub const fn new(values: [$elem; N]) -> Self
            {
                $name { values }
            }

            /// Create a sequence with every entry set to `value`.
            #[inline]
            pub const fn uniform(value: $elem) -> Self
            {
                $name { values: [value; N] }
            }

            /// Create a sequence from an iterable of exactly `N` values.
            ///
            /// **Errors** with `ShapeError::IncompatibleLength` if the
            /// iterable yields more or fewer than `N` values. At most `N + 1`
            /// values are consumed, so a longer iterable is reported as
            /// `N + 1` and an unbounded one still returns.
            pub fn try_from_iter<I>(iterable: I) -> Result<Self, ShapeError>
            where I: IntoIterator<Item = $elem>
            {
                let mut values = [0; N];
                let mut found = 0;
                for value in iterable.into_iter().take(N + 1) {
                    if found < N {
                        values[found] = value;
                    }
                    found += 1;
                }
                if found != N {
                    return Err(ShapeError::IncompatibleLength(N, found));
                }
                Ok($name { values })
            }

            /// Return the number of entries, which is always `N`.
            #[inline(always)]
            pub const fn rank(&self) -> usize
            {
                N
            }

            /// Return the product of all entries (1 for rank 0).
            #[inline]
            pub fn size(&self) -> $elem
            {
                self.values.iter().product()
            }

            #[inline(always)]
            pub fn as_slice(&self) -> &[$elem]
            {
                &self.values
            }

            #[inline(always)]
            pub fn as_mut_slice(&mut self) -> &mut [$elem]
            {
                &mut self.values
            }

            #[inline(always)]
            pub fn into_array(self) -> [$elem; N]
            {
                self.values
            }

            #[inline]
            pub fn iter(&self) -> core::slice::Iter<'_, $elem>
            {
                self.values.iter()
            }
        }

        impl<const N: usize> Default for $name<N>
        {
            #[inline]
            fn default() -> Self
            {
                Self::uniform(0)
            }
        }

        impl<const N: usize> core::fmt::Debug for $name<N>
        {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
            {
                write!(f, "{:?}", self.values)
            }
        }

        impl<const N: usize> core::ops::Index<usize> for $name<N>
        {
            type Output = $elem;

            #[inline(always)]
            fn index(&self, axis: usize) -> &$elem
            {
                &self.values[axis]
            }
        }

        impl<const N: usize> core::ops::IndexMut<usize> for $name<N>
        {
            #[inline(always)]
            fn index_mut(&mut self, axis: usize) -> &mut $elem
            {
                &mut self.values[axis]
            }
        }

        impl<const N: usize> From<[$elem; N]> for $name<N>
        {
            #[inline(always)]
            fn from(values: [$elem; N]) -> Self
            {
                $name { values }
            }
        }

        impl<const N: usize> From<$name<N>> for [$elem; N]
        {
            #[inline(always)]
            fn from(sequence: $name<N>) -> Self
            {
                sequence.values
            }
        }

        impl<'a, const N: usize> TryFrom<&'a [$elem]> for $name<N>
        {
            type Error = ShapeError;

            fn try_from(values: &'a [$elem]) -> Result<Self, ShapeError>
            {
                if values.len() != N {
                    return Err(ShapeError::IncompatibleLength(N, values.len()));
                }
                Self::try_from_iter(values.iter().copied())
            }
        }

        impl<const N: usize> PartialEq<[$elem; N]> for $name<N>
        {
            #[inline]
            fn eq(&self, rhs: &[$elem; N]) -> bool
            {
                self.values == *rhs
            }
        }

        impl<'a, const N: usize> IntoIterator for &'a $name<N>
        {
            type Item = &'a $elem;
            type IntoIter = core::slice::Iter<'a, $elem>;

            fn into_iter(self) -> Self::IntoIter
            {
                self.values.iter()
            }
        }

        impl<const N: usize> IntoIterator for $name<N>
        {
            type Item = $elem;
            type IntoIter = core::array::IntoIter<$elem, N>;

            fn into_iter(self) -> Self::IntoIter
            {
                self.values.into_iter()
            }
        }
    };
}
