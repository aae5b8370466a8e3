// Copyright 2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use ndlazy::Shape;
use ndlazy::SharedProvider;
use ndlazy::UniqueProvider;

use num_traits::Num;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ProviderBuilder<const N: usize>
{
    shape: Shape<N>,
    generator: ElementGenerator,
}

/// How to generate elements
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementGenerator
{
    /// 0, 1, 2, ... in row-major order
    Sequential,
    Zero,
}

impl<const N: usize> Default for ProviderBuilder<N>
{
    fn default() -> Self
    {
        Self::new(Shape::uniform(1))
    }
}

impl<const N: usize> ProviderBuilder<N>
{
    pub fn new(shape: impl Into<Shape<N>>) -> Self
    {
        ProviderBuilder {
            shape: shape.into(),
            generator: ElementGenerator::Sequential,
        }
    }

    pub fn generator(mut self, generator: ElementGenerator) -> Self
    {
        self.generator = generator;
        self
    }

    pub fn build<T>(self) -> UniqueProvider<T, N>
    where T: Num + Clone
    {
        let mut current = T::zero();
        let size = self.shape.size();
        let use_zeros = self.generator == ElementGenerator::Zero;
        let elements = (0..size)
            .map(|_| {
                let ret = current.clone();
                if !use_zeros {
                    current = ret.clone() + T::one();
                }
                ret
            })
            .collect();
        match UniqueProvider::from_shape_vec(self.shape, elements) {
            Ok(provider) => provider,
            Err(_) => unreachable!("element count follows the shape"),
        }
    }

    pub fn build_shared<T>(self) -> SharedProvider<T, N>
    where T: Num + Clone
    {
        self.build().into_shared()
    }
}

#[test]
fn test_sequential()
{
    let p = ProviderBuilder::new((3, 4)).build::<i32>();
    assert_eq!(p.shape(), [3, 4]);
    assert_eq!(p[(2, 1)], 9);
    assert_eq!(p.as_slice().len(), 12);

    let z = ProviderBuilder::new((2, 2))
        .generator(ElementGenerator::Zero)
        .build::<f64>();
    assert!(z.as_slice().iter().all(|&x| x == 0.));
}
