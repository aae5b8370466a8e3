use itertools::iproduct;
use quickcheck::{quickcheck, TestResult};

use ndlazy::{AccessPattern, Index, Shape};

fn ix2(i: usize, j: usize) -> Index<2>
{
    Index::from((i, j))
}

#[test]
fn test_full_pattern_cardinality()
{
    let p = AccessPattern::new((0, 0), (4, 6), (1, 1));
    let visited: Vec<Index<2>> = p.indices().collect();
    assert_eq!(p.size(), 24);
    assert_eq!(visited.len(), 24);
    assert_eq!(visited.first(), Some(&ix2(0, 0)));
    assert_eq!(visited.last(), Some(&ix2(3, 5)));

    // row-major: last axis fastest
    let expected: Vec<Index<2>> = iproduct!(0..4, 0..6).map(|(i, j)| ix2(i, j)).collect();
    assert_eq!(visited, expected);
}

#[test]
fn test_strided_pattern_cardinality()
{
    let p = AccessPattern::new((0, 0), (4, 6), (2, 3));
    assert_eq!(p.shape(), Shape::from((2, 2)));
    let visited: Vec<Index<2>> = p.into_iter().collect();
    assert_eq!(visited, [ix2(0, 0), ix2(0, 3), ix2(2, 0), ix2(2, 3)]);
}

#[test]
fn test_default_pattern_is_empty()
{
    let p = AccessPattern::<3>::default();
    assert_eq!(p.start(), [0, 0, 0]);
    assert_eq!(p.final_index(), [0, 0, 0]);
    assert_eq!(p.jumps(), [1, 1, 1]);
    assert!(p.empty());
    assert_eq!(p.size(), 0);
    assert_eq!(p.indices().next(), None);
}

#[test]
fn test_zero_length_axis_is_empty()
{
    let p = AccessPattern::from_shape((3, 0, 2));
    assert!(p.empty());
    assert_eq!(p.size(), 0);
    assert_eq!(p.indices().len(), 0);
    assert_eq!((&p).into_iter().count(), 0);
}

#[test]
fn test_rank_zero_is_empty()
{
    let p = AccessPattern::from_shape(());
    assert!(p.empty());
    assert_eq!(p.size(), 0);
    assert_eq!(p.indices().count(), 0);
    let mut ix = Index::new([]);
    assert!(!p.advance(&mut ix));
}

#[test]
fn test_with_methods_leave_original_untouched()
{
    let p = AccessPattern::from_shape((4, 6));
    let before: Vec<Index<2>> = p.indices().collect();

    let q = p.with_start((1, 1));
    let r = p.with_final((2, 2));
    let s = p.with_jumps((2, 2));
    assert_ne!(q, p);
    assert_ne!(r, p);
    assert_ne!(s, p);

    assert_eq!(p, AccessPattern::from_shape((4, 6)));
    assert_eq!(p.indices().collect::<Vec<_>>(), before);
    assert_eq!(r.indices().count(), 4);
}

#[test]
fn test_with_methods_accept_sequences()
{
    let p = AccessPattern::from_shape(Shape::from((5, 5)))
        .with_start(Index::from((1, 0)))
        .with_final([5, 4])
        .with_jumps(ndlazy::Jumps::from((2, 2)));
    assert_eq!(p, AccessPattern::new((1, 0), (5, 4), (2, 2)));
}

#[test]
fn test_map_index()
{
    let p = AccessPattern::new((1, 2), (9, 9), (2, 3));
    assert_eq!(p.map_index(&ix2(0, 0)), ix2(1, 2));
    assert_eq!(p.map_index(&ix2(3, 2)), ix2(7, 8));
}

#[test]
fn test_contains_is_in_local_coordinates()
{
    let p = AccessPattern::new((0, 0), (4, 6), (2, 3));
    assert!(p.contains((1, 1)));
    assert!(!p.contains((2, 0)));
    assert!(!p.contains((0, 3)));
}

#[test]
fn test_advance_carries()
{
    let p = AccessPattern::new((0, 0, 0), (2, 2, 3), (1, 1, 1));
    let mut ix = Index::from((0, 1, 2));
    assert!(p.advance(&mut ix));
    assert_eq!(ix, [1, 0, 0]);

    let mut ix = Index::from((1, 1, 2));
    assert!(!p.advance(&mut ix));
    assert_eq!(ix, p.final_index());
}

#[test]
fn test_advance_resets_to_start()
{
    let p = AccessPattern::new((1, 2), (4, 8), (1, 3));
    let mut ix = Index::from((1, 5));
    assert!(p.advance(&mut ix));
    assert_eq!(ix, [2, 2]);
}

#[test]
#[should_panic]
fn test_negative_jumps_panic()
{
    let _ = AccessPattern::new((0,), (4,), (-1,));
}

quickcheck! {
    fn iteration_matches_map_index(d0: u8, d1: u8, s0: u8, s1: u8, j0: u8, j1: u8) -> TestResult {
        let final_ = Index::from(((d0 % 12) as usize, (d1 % 12) as usize));
        let start = Index::from(((s0 % 12) as usize, (s1 % 12) as usize));
        if start[0] > final_[0] || start[1] > final_[1] {
            return TestResult::discard();
        }
        let p = AccessPattern::new(start, final_, (1 + (j0 % 4) as isize, 1 + (j1 % 4) as isize));
        let shape = p.shape();
        let visited: Vec<Index<2>> = p.indices().collect();
        let expected: Vec<Index<2>> = iproduct!(0..shape[0], 0..shape[1])
            .map(|(i, j)| p.map_index(&ix2(i, j)))
            .collect();
        if visited.len() != p.size() || visited != expected {
            return TestResult::failed();
        }
        // every coordinate lies in [start, final)
        TestResult::from_bool(visited.iter().all(|ix| {
            (0..2).all(|n| start[n] <= ix[n] && ix[n] < final_[n])
        }))
    }
}
