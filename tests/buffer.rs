use ndlazy::{Buffer, ShapeError};

#[test]
fn test_construction_forms()
{
    let empty = Buffer::<f32>::new();
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);

    let filled = Buffer::from_elem(4, 2.5);
    assert_eq!(filled.as_slice(), &[2.5; 4]);

    let defaulted = Buffer::<u16>::from_default(3);
    assert_eq!(defaulted.as_slice(), &[0, 0, 0]);

    let copied: Buffer<i64> = [3, 1, 4, 1, 5].iter().copied().collect();
    assert_eq!(copied.len(), 5);
    assert_eq!(copied[2], 4);
}

#[test]
fn test_move_empties_the_source()
{
    let mut a = Buffer::from_vec(vec![1, 2, 3]);
    let b = a.take();
    assert_eq!(a.len(), 0);
    assert!(a.is_empty());
    assert_eq!(b.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_clone_is_independent()
{
    let a = Buffer::from_vec(vec![String::from("a"), String::from("b")]);
    let mut b = a.clone();
    b[0].push('!');
    *b.at_mut(1).unwrap() = String::from("z");
    assert_eq!(a.as_slice(), ["a", "b"]);
    assert_eq!(b.as_slice(), ["a!", "z"]);
}

#[test]
fn test_equality()
{
    let a = Buffer::from_vec(vec![1, 2, 3]);
    assert_eq!(a, Buffer::from_vec(vec![1, 2, 3]));
    assert_ne!(a, Buffer::from_vec(vec![1, 2, 4]));
    assert_ne!(a, Buffer::from_vec(vec![1, 2]));
    assert_ne!(a, Buffer::<i32>::new());

    // elements of different types compare through PartialEq
    let names = Buffer::from_vec(vec![String::from("x")]);
    assert_eq!(names, Buffer::from_vec(vec!["x"]));
}

#[test]
fn test_checked_access()
{
    let mut a = Buffer::from_elem(8, 0u8);
    assert_eq!(a.at(7), Ok(&0));
    assert_eq!(a.at(8), Err(ShapeError::OutOfBounds(8, 8)));
    assert_eq!(a.at_mut(100).err(), Some(ShapeError::OutOfBounds(100, 8)));

    let err = a.at(8).unwrap_err();
    assert_eq!(err.to_string(), "buffer index out of range on index 8 / 8");
}

#[test]
fn test_unchecked_access()
{
    let mut a = Buffer::from_vec(vec![10, 20, 30]);
    unsafe {
        *a.uget_mut(1) += 1;
        assert_eq!(*a.uget(1), 21);
    }
}

#[test]
#[should_panic]
fn test_indexing_past_the_end_panics()
{
    let a = Buffer::from_elem(2, 0);
    let _ = a[2];
}

#[test]
fn test_into_vec_round_trip()
{
    let v = vec![1.0, 2.0];
    let ptr = v.as_ptr();
    let a = Buffer::from(v);
    assert_eq!(a.as_ptr(), ptr);
    let v = a.into_vec();
    assert_eq!(v.as_ptr(), ptr);
    assert_eq!(v, [1.0, 2.0]);
}
