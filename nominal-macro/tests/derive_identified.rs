use std::marker::PhantomData;

use nominal::boolean::{False, True};
use nominal::{label, Identified, SameLabel};
use static_assertions::assert_type_eq_all;

#[allow(dead_code)]
#[derive(Identified)]
struct Meters(f64);

#[allow(dead_code)]
#[derive(Identified)]
#[identified(label = "units::Feet")]
struct Feet(f64);

#[allow(dead_code)]
#[derive(Identified)]
enum Either<L, R> {
    Left(L),
    Right(R),
}

#[allow(dead_code)]
#[derive(Identified)]
struct Borrowed<'a, T> {
    inner: &'a T,
    marker: PhantomData<T>,
}

type Same<A, B> = <<A as Identified>::Identity as SameLabel<<B as Identified>::Identity>>::Output;

assert_type_eq_all!(<Meters as Identified>::Identity, label!(Meters));
assert_type_eq_all!(<Feet as Identified>::Identity, label!("units::Feet"));
assert_type_eq_all!(
    <Either<u8, Meters> as Identified>::Identity,
    (label!(Either), (label!(u8), (label!(Meters), ()))),
);
assert_type_eq_all!(Same<Either<u8, char>, Either<u8, char>>, True);
assert_type_eq_all!(Same<Either<u8, char>, Either<char, u8>>, False);
assert_type_eq_all!(Same<Borrowed<'static, u8>, Borrowed<'static, u16>>, False);
assert_type_eq_all!(Same<Meters, Feet>, False);
