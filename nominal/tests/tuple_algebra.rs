#![recursion_limit = "256"]

use nominal::predicate::{And, Bind1st, Bind2nd, IsSame, Not, Or};
use nominal::search::{contains, count_if, find, find_from, find_nth, first_or, NPOS};
use nominal::{concat, concat_into, ArrayFactory, Atom, Identified, Sequence, TupleFactory};

type IsInt = Bind1st<IsSame, i32>;
type IsFloat = Bind2nd<IsSame, f32>;
type IsPoint = Bind1st<IsSame, Point>;

#[derive(Debug, Clone, Copy, PartialEq, Identified)]
struct Point(i32, i32);

const T1: (i32, f32) = (1, 2.0);
const T2: (f32, i32) = (3.0, 4);
const A1: [i32; 3] = [5, 6, 7];

#[test]
fn search() {
    assert!(contains::<IsInt, _>(&T1));
    assert!(!contains::<IsInt, _>(&(1.0f32, 'x')));
    assert!(!contains::<IsInt, _>(&()));
    assert_eq!(count_if::<Or<(IsInt, IsFloat)>, _>(&('x', "y")), 0);
    assert_eq!(count_if::<Or<(IsInt, IsFloat)>, _>(&(1i32, 'x', 2.0f32)), 2);
    assert_eq!(count_if::<And<(IsInt, Not<IsFloat>)>, _>(&A1), 3);
    assert_eq!(find::<IsFloat, _>(&T2), 0);
    assert_eq!(find::<IsFloat, _>(&A1), NPOS);
    assert_eq!(find_from::<IsInt, 1, _>(&A1), 1);
    assert_eq!(find_from::<IsInt, 3, _>(&A1), NPOS);
    assert_eq!(find_nth::<IsInt, 1, _>(&(1i32, 2.0f32, 3i32, 4i32)), 2);
    assert_eq!(find_nth::<IsInt, 2, _>(&(1i32, 2.0f32, 3i32, 4i32)), 3);
}

#[test]
fn search_results_are_constants() {
    const FIRST: usize = find::<IsInt, _>(&T2);
    const COUNT: usize = count_if::<IsInt, _>(&A1);
    assert_eq!([FIRST, COUNT], [1, 3]);
}

#[test]
fn first_or_picks_the_match_or_the_default() {
    assert_eq!(first_or::<IsInt, _, _>('d', T2), 4);
    assert_eq!(first_or::<IsInt, _, _>('d', (1.0f32, "s")), 'd');
    assert_eq!(first_or::<IsFloat, _, _>(0.5f32, A1), 0.5);
}

#[test]
fn concat_flattens_tuple_likes() {
    let flat = concat_into::<TupleFactory, _>(("a", T1, "b", A1, "c"));
    assert_eq!(flat, ("a", 1, 2.0, "b", 5, 6, 7, "c"));
    assert_eq!(concat((T1, T2)), (1, 2.0, 3.0, 4));
    assert_eq!(concat(((), 3i32)), (3,));
    assert_eq!(concat((A1, [8i32, 9])), [5, 6, 7, 8, 9]);
    assert_eq!(concat((A1, 8i32)), [5, 6, 7, 8]);
}

#[test]
fn atoms_are_not_flattened() {
    assert_eq!(concat((T1, Atom(T2))), (1, 2.0, (3.0, 4)));
    assert_eq!(concat_into::<TupleFactory, _>((Atom(A1), 'z')), ([5, 6, 7], 'z'));
}

#[test]
fn user_types_are_opaque_scalars() {
    let p = Point(3, 4);
    assert_eq!(concat(((1i32, 2i32), p)), (1, 2, Point(3, 4)));
    assert_eq!(concat((&p, (8u8,))), (&p, 8));
    assert_eq!((1i32, 'x').insert::<1, _>(p), (1, Point(3, 4), 'x'));
    assert_eq!(find::<IsInt, _>(&(p, 7i32)), 1);
    assert_eq!(find::<IsPoint, _>(&('a', p)), 1);
    assert!(!contains::<IsPoint, _>(&T1));
    assert!(!contains::<IsPoint, _>(&(Box::new(p), &p)));
    assert_eq!((p, 1i32, Box::new(p)).filter::<Not<IsInt>>(), (p, Box::new(p)));
}

#[test]
fn concat_into_another_kind_of_sequence() {
    assert_eq!(concat_into::<ArrayFactory, _>((1u8, (2u8, 3u8), [4u8])), [1, 2, 3, 4]);
    assert_eq!(concat_into::<TupleFactory, _>((A1,)), (5, 6, 7));
}

#[test]
fn slice() {
    let t = concat_into::<TupleFactory, _>(("a", T1, "b", A1, "c"));
    assert_eq!(t.slice::<1, 5>(), (1, 2.0, "b", 5));
    assert_eq!(t.slice_from::<1>(), (1, 2.0, "b", 5, 6, 7, "c"));
    assert_eq!(t.slice::<6, 12>(), (7, "c"));
    let () = t.slice::<8, 9>();
    let () = t.slice::<4, 2>();
    assert_eq!(A1.slice::<0, 2>(), [5, 6]);
}

#[test]
fn filter() {
    let t = (1i32, 'x', 2.0f32, 3i32, "y");
    assert_eq!(t.filter::<IsInt>(), (1, 3));
    assert_eq!(t.filter::<Not<Or<(IsInt, IsFloat)>>>(), ('x', "y"));
    let () = t.filter::<Bind1st<IsSame, u64>>();
    assert_eq!(A1.filter_into::<TupleFactory, IsInt>(), (5, 6, 7));
}

#[test]
fn reverse() {
    let () = ().reverse();
    assert_eq!((1u8,).reverse(), (1,));
    assert_eq!(T1.reverse(), (2.0, 1));
    assert_eq!(("a", 'b', 3u8).reverse(), (3, 'b', "a"));
    let t = concat_into::<TupleFactory, _>(("a", T1, "b", A1, "c"));
    assert_eq!(t.reverse(), ("c", 7, 6, 5, "b", 2.0, 1, "a"));
    assert_eq!(A1.reverse(), [7, 6, 5]);
}

#[test]
fn insert() {
    assert_eq!(T2.insert::<1, _>(8i32), (3.0, 8, 4));
    assert_eq!(T2.insert::<0, _>(T1), (1, 2.0, 3.0, 4));
    assert_eq!(T2.insert::<2, _>(Atom(T1)), (3.0, 4, (1, 2.0)));
    assert_eq!(T2.insert::<9, _>('z'), (3.0, 4, 'z'));
    assert_eq!(T1.insert_into::<TupleFactory, 2, _>(A1), (1, 2.0, 5, 6, 7));
    assert_eq!(A1.insert::<1, _>([0i32, 0]), [5, 0, 0, 6, 7]);
}

#[test]
fn erase() {
    assert_eq!(A1.erase::<1>(), [5, 7]);
    let t = (1i32, 'x', 2.0f32, 3i32, "y");
    assert_eq!(t.erase::<0>(), ('x', 2.0, 3, "y"));
    assert_eq!(t.erase::<4>(), (1, 'x', 2.0, 3));
    assert_eq!(t.erase_range::<2, 4>(), (1, 'x', "y"));
    assert_eq!(t.erase_range::<3, 9>(), (1, 'x', 2.0));
    assert_eq!(t.erase_range::<3, 1>(), t);
    assert_eq!(A1.erase_into::<TupleFactory, 0>(), (6, 7));
}

#[test]
fn operations_compose() {
    let t = (1i32, 'x', 2.0f32, 3i32, "y");
    let without_ints = t.filter::<Not<IsInt>>();
    let rebuilt = without_ints.insert::<0, _>(1i32).insert::<3, _>(3i32);
    assert_eq!(rebuilt, t);
    assert_eq!(t.reverse().slice::<1, 4>().reverse(), t.slice::<1, 4>());
}
