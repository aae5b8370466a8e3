use std::sync::Arc;

use defmac::defmac;
use itertools::iproduct;

use ndlazy::{
    try_zip_arrays, zip_arrays, AccessPattern, Array, Buffer, Index, IndexProvider, Provider, ShapeError, SharedProvider,
    UniqueProvider,
};

#[test]
fn test_unique_to_shared_round_trip()
{
    let p = UniqueProvider::<usize, 2>::from_shape_vec((3, 4), (0..12).collect()).unwrap();
    let copied = p.to_shared();
    for (i, j) in iproduct!(0..3, 0..4) {
        assert_eq!(copied[(i, j)], p[(i, j)]);
        assert_eq!(copied.provide(&Index::from((i, j))), i * 4 + j);
    }

    let expected = p.clone();
    let moved = p.into_shared();
    assert_eq!(moved.shape(), expected.shape());
    assert_eq!(moved.as_slice(), expected.as_slice());
}

#[test]
fn test_size_mismatch_is_rejected()
{
    defmac!(unique_of shape, len => UniqueProvider::<f32, 2>::from_buffer(shape, Buffer::from_elem(len, 0.)));
    assert_eq!(unique_of!((3, 3), 8).err(), Some(ShapeError::IncompatibleSize(9, 8)));
    assert_eq!(unique_of!((3, 3), 10).err(), Some(ShapeError::IncompatibleSize(9, 10)));
    assert!(unique_of!((0, 3), 0).is_ok());

    let err = UniqueProvider::<u8, 1>::from_shape_vec((4,), vec![1, 2]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "shape and buffer sizes do not match: shape has 4 elements, buffer has 2"
    );

    let shared = SharedProvider::<u8, 2>::from_buffer((2, 2), Arc::new(Buffer::from_elem(3, 0)));
    assert_eq!(shared.err(), Some(ShapeError::IncompatibleSize(4, 3)));
}

#[test]
fn test_overflowing_shape_is_rejected()
{
    let err = UniqueProvider::<u8, 2>::from_shape_vec((usize::MAX, 2), vec![]).err();
    assert_eq!(err, Some(ShapeError::Overflow));

    let err = SharedProvider::<u8, 3>::from_buffer((2, usize::MAX, 3), Arc::new(Buffer::new())).err();
    assert_eq!(err, Some(ShapeError::Overflow));

    // a zero-length axis keeps the product in range
    assert!(UniqueProvider::<u8, 2>::from_shape_vec((usize::MAX, 0), vec![]).is_ok());
}

#[test]
fn test_shared_clones_read_the_same_memory()
{
    let a = SharedProvider::from_buffer((2, 2), Arc::new(Buffer::from_vec(vec!['a', 'b', 'c', 'd']))).unwrap();
    let b = a.clone();
    assert!(a.ptr_eq(&b));
    assert_eq!(b[(1, 0)], 'c');
    assert_eq!(a, b);

    let c = UniqueProvider::from_shape_vec((2, 2), vec!['a', 'b', 'c', 'd'])
        .unwrap()
        .into_shared();
    assert_eq!(a, c);
    assert!(!a.ptr_eq(&c));
}

#[test]
fn test_shared_outlives_source()
{
    let shared = {
        let p = UniqueProvider::from_elem((2, 3), String::from("x"));
        p.to_shared()
    };
    let handle = shared.clone();
    drop(shared);
    assert_eq!(handle[(1, 2)], "x");
}

#[test]
fn test_index_provider()
{
    let ix = IndexProvider::new((3, 2, 2));
    assert_eq!(ix.size(), 12);
    for (i, j, k) in iproduct!(0..3, 0..2, 0..2) {
        let index = Index::from((i, j, k));
        assert_eq!(ix.provide(&index), index);
    }
}

#[test]
fn test_borrowed_provider()
{
    let p = UniqueProvider::from_shape_vec((2,), vec![1.5, 2.5]).unwrap();
    let a = Array::new(&p);
    assert_eq!(a.get((1,)), 2.5);

    fn first<P: Provider<1>>(p: P) -> P::Elem
    {
        p.provide(&Index::from((0,)))
    }
    assert_eq!(first(&p), 1.5);
    assert_eq!(first(&a), 1.5);
}

#[test]
fn test_zip_of_different_types()
{
    let weights = UniqueProvider::from_shape_vec((2, 3), vec![0.5, 1., 1.5, 2., 2.5, 3.]).unwrap();
    let labels = UniqueProvider::from_elem((2, 3), "w").into_shared();
    let zipped = Array::new(try_zip_arrays((&weights, &labels, IndexProvider::new((2, 3)))).unwrap());

    assert_eq!(zipped.shape(), [2, 3]);
    let (w, label, ix) = zipped.get((1, 1));
    assert_eq!(w, 2.5);
    assert_eq!(label, "w");
    assert_eq!(ix, [1, 1]);
}

#[test]
fn test_zip_shape_mismatch()
{
    let a = Array::new(IndexProvider::new((2, 3)));
    let b = Array::new(IndexProvider::new((2, 4)));
    let err = try_zip_arrays((a, b)).err().unwrap();
    assert_eq!(err, ShapeError::IncompatibleShapes(vec![2, 3].into(), vec![2, 4].into()));
    assert_eq!(err.to_string(), "incompatible shapes: [2, 3] and [2, 4]");

    // unchecked zip reports the first shape
    assert_eq!(zip_arrays((b, a)).shape(), [2, 4]);
}

#[test]
fn test_zip_of_strided_arrays()
{
    let evens = Array::from_parts(IndexProvider::new((8,)), AccessPattern::new((0,), (8,), (2,)));
    let odds = Array::from_parts(IndexProvider::new((8,)), AccessPattern::new((1,), (8,), (2,)));
    let pairs = Array::new(try_zip_arrays((evens, odds)).unwrap());
    assert_eq!(pairs.shape(), [4]);
    let (e, o) = pairs.get((3,));
    assert_eq!(e, [6]);
    assert_eq!(o, [7]);
}

#[test]
fn test_array_writes_through_pattern()
{
    let p = UniqueProvider::<i32, 2>::zeros((4, 4));
    let pattern = AccessPattern::from_shape((4, 4)).with_start((1, 1)).with_jumps((2, 2));
    let mut a = Array::from_parts(p, pattern);
    assert_eq!(a.shape(), [2, 2]);

    a[(0, 0)] = 1;
    *a.get_mut((1, 1)) = 2;
    assert_eq!(a[(1, 1)], 2);

    let (p, _) = a.into_parts();
    assert_eq!(p[(1, 1)], 1);
    assert_eq!(p[(3, 3)], 2);
    assert_eq!(p.as_slice().iter().sum::<i32>(), 3);
}

#[test]
fn test_arrays_are_providers()
{
    let inner = Array::new(IndexProvider::new((6, 6))).with_access_pattern(AccessPattern::new((0, 0), (6, 6), (2, 2)));
    let outer = Array::from_parts(inner, AccessPattern::new((1, 0), (3, 3), (1, 1)));
    assert_eq!(outer.shape(), [2, 3]);
    // (1, 2) -> (2, 2) in `inner` -> (4, 4) in the index provider
    assert_eq!(outer.get((1, 2)), [4, 4]);
}
