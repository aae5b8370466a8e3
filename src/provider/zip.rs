// Copyright 2017 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::error::{incompatible_shapes, ShapeError};
use crate::{Index, Provider, Shape};

/// A tuple of providers of the same rank that can be queried together.
///
/// Implemented for tuples of one to six providers; the element type is the
/// tuple of their element types.
pub trait ProviderTuple<const N: usize>
{
    type Elem;

    /// Return the shape of the first provider.
    fn first_shape(&self) -> Shape<N>;

    /// Check that every provider has the shape of the first one.
    fn check_shapes(&self) -> Result<(), ShapeError>;

    /// Query every provider at `index`.
    fn provide_all(&self, index: &Index<N>) -> Self::Elem;
}

macro_rules! provider_tuple_impl {
    ($([$($p:ident $i:tt)+])+) => {
        $(
        impl<$($p,)+ const N: usize> ProviderTuple<N> for ($($p,)+)
        where $($p: Provider<N>,)+
        {
            type Elem = ($(<$p as Provider<N>>::Elem,)+);

            #[inline]
            fn first_shape(&self) -> Shape<N>
            {
                self.0.shape()
            }

            fn check_shapes(&self) -> Result<(), ShapeError>
            {
                let first = self.0.shape();
                $(
                    let shape = self.$i.shape();
                    if shape != first {
                        return Err(incompatible_shapes(first.as_slice(), shape.as_slice()));
                    }
                )+
                Ok(())
            }

            #[inline]
            fn provide_all(&self, index: &Index<N>) -> Self::Elem
            {
                ($(self.$i.provide(index),)+)
            }
        }
        )+
    };
}

provider_tuple_impl! {
    [P1 0]
    [P1 0 P2 1]
    [P1 0 P2 1 P3 2]
    [P1 0 P2 1 P3 2 P4 3]
    [P1 0 P2 1 P3 2 P4 3 P5 4]
    [P1 0 P2 1 P3 2 P4 3 P5 4 P6 5]
}

/// A provider that combines several arrays element by element.
///
/// The value at an index is the tuple of every part's value at that same
/// index; nothing is allocated. Parts may have different element types.
///
/// ```
/// use ndlazy::{zip_arrays, Array, IndexProvider, UniqueProvider};
///
/// let values = UniqueProvider::from_shape_vec((2, 2), vec![1., 2., 3., 4.]).unwrap();
/// let zipped = Array::new(zip_arrays((Array::new(&values), IndexProvider::new((2, 2)))));
/// let (x, ix) = zipped.get((1, 0));
/// assert_eq!(x, 3.);
/// assert_eq!(ix, [1, 0]);
/// ```
#[derive(Clone, Debug)]
pub struct ZippedProvider<T, const N: usize>
{
    shape: Shape<N>,
    parts: T,
}

impl<T, const N: usize> ZippedProvider<T, N>
where T: ProviderTuple<N>
{
    /// Zip `parts`, taking the shape of the first.
    pub fn new(parts: T) -> Self
    {
        ZippedProvider {
            shape: parts.first_shape(),
            parts,
        }
    }

    pub fn parts(&self) -> &T
    {
        &self.parts
    }

    pub fn into_parts(self) -> T
    {
        self.parts
    }
}

impl<T, const N: usize> Provider<N> for ZippedProvider<T, N>
where T: ProviderTuple<N>
{
    type Elem = T::Elem;

    #[inline]
    fn shape(&self) -> Shape<N>
    {
        self.shape
    }

    #[inline]
    fn provide(&self, index: &Index<N>) -> T::Elem
    {
        self.parts.provide_all(index)
    }
}

/// Zip a tuple of arrays (or providers) into one provider with the shape of
/// the first.
///
/// Shapes are not compared; see [`try_zip_arrays`].
pub fn zip_arrays<T, const N: usize>(parts: T) -> ZippedProvider<T, N>
where T: ProviderTuple<N>
{
    ZippedProvider::new(parts)
}

/// Zip a tuple of arrays (or providers) that all have the same shape.
///
/// **Errors** with `ShapeError::IncompatibleShapes` naming the first shape
/// and the first one that differs from it.
pub fn try_zip_arrays<T, const N: usize>(parts: T) -> Result<ZippedProvider<T, N>, ShapeError>
where T: ProviderTuple<N>
{
    parts.check_shapes()?;
    Ok(ZippedProvider::new(parts))
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::{IndexProvider, UniqueProvider};

    #[test]
    fn mismatched_shapes_are_reported()
    {
        let a = IndexProvider::new((2, 3));
        let b = UniqueProvider::<u8, 2>::from_shape((3, 2));
        let err = try_zip_arrays((a, &b)).err();
        assert_eq!(err, Some(incompatible_shapes(&[2, 3], &[3, 2])));
        assert!(try_zip_arrays((a, a, a)).is_ok());
    }

    #[test]
    fn unchecked_zip_takes_first_shape()
    {
        let a = IndexProvider::new((2, 3));
        let b = IndexProvider::new((4, 4));
        assert_eq!(zip_arrays((a, b)).shape(), [2, 3]);
    }
}
