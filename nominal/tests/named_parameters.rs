#![recursion_limit = "256"]

use std::any::Any;

use nominal::prelude::*;
use nominal::NamedArgs;

tags! {
    pub first;
    pub second;
    pub third;
    pub fourth;
    pub shape;
    pub payload;
    pub note;
}

#[derive(Debug, Clone, Copy, PartialEq, Identified)]
struct Point(i32, i32);

impl FromElements<(i32, i32)> for Point {
    fn from_elements((x, y): (i32, i32)) -> Self {
        Point(x, y)
    }
}

#[derive(Debug, PartialEq, Identified)]
enum Shape {
    Circle(u32),
    Square(u32),
}

impl From<u32> for Shape {
    fn from(radius: u32) -> Self {
        Shape::Circle(radius)
    }
}

#[test]
fn unspecified_parameters_keep_their_defaults() {
    let bound = bind_parameters((), (first.equals(0), second.equals("Hopp")));
    assert_eq!(bound.0.value, 0);
    assert_eq!(bound.1.value, "Hopp");
}

#[test]
fn result_follows_declaration_order() {
    let bound = bind_parameters(
        args![first = 1, third(3, 4)],
        (second.equals("Hopp"), third.equals(Point(0, 0)), first.equals(0)),
    );
    assert_eq!(bound.0.value, "Hopp");
    assert_eq!(bound.1.value, Point(3, 4));
    assert_eq!(bound.2.value, 1);
}

#[test]
fn tuple_values_are_unpacked_into_the_declared_type() {
    let declared = || (third.equals(Point(0, 0)), first.equals((0u64, 'a')));
    let bound = bind_parameters((third.equals((3, 4)), first.equals((1u8, 'b'))), declared());
    assert_eq!(bound.0.value, Point(3, 4));
    assert_eq!(bound.1.value, (1, 'b'));

    let from_array = bind_parameters(args![third = [7, 8]], declared());
    assert_eq!(from_array.0.value, Point(7, 8));

    let whole = bind_parameters(args![third = Point(1, 1)], declared());
    assert_eq!(whole.0.value, Point(1, 1));
}

#[test]
fn binding_is_order_independent() {
    let declared = || {
        (
            first.equals(0u8),
            second.equals(String::from("default")),
            third.equals(Point(0, 0)),
            fourth.equals(false),
        )
    };
    let forwards = bind_parameters(
        (first.equals(9u8), second.equals("given"), third.call((1, 2)), fourth),
        declared(),
    );
    let backwards = bind_parameters(
        (fourth, third.call((1, 2)), second.equals("given"), first.equals(9u8)),
        declared(),
    );
    let shuffled = bind_parameters(
        (third.call((1, 2)), fourth, first.equals(9u8), second.equals("given")),
        declared(),
    );
    assert_eq!(forwards, backwards);
    assert_eq!(forwards, shuffled);
    assert_eq!(forwards.1.value, "given");
    assert!(forwards.3.value);
}

#[test]
fn flags() {
    let bound = bind_parameters(args![!first, second], (first.equals(true), second.equals(false)));
    assert!(!bound.0.value);
    assert!(bound.1.value);
}

#[test]
fn optional_variant_and_any_parameters() {
    let declared = || {
        (
            first.optional::<Point>(),
            shape.variant::<Shape, _>(1u32),
            payload.any_unset(),
            note.default_for_unset::<String>(),
        )
    };

    let defaults = bind_parameters((), declared());
    assert_eq!(defaults.0.value, None);
    assert_eq!(defaults.1.value, Shape::Circle(1));
    assert!(defaults.2.value.is_none());
    assert_eq!(defaults.3.value, "");

    let given = bind_parameters(
        args![payload = 'p', first(5, 6), shape = 4u32, note = "hi"],
        declared(),
    );
    assert_eq!(given.0.value, Some(Point(5, 6)));
    assert_eq!(given.1.value, Shape::Circle(4));
    let payload_value = given.2.value.as_deref().and_then(|v| v.downcast_ref::<char>());
    assert_eq!(payload_value, Some(&'p'));
    assert_eq!(given.3.value, "hi");

    let payload_value: Option<Box<dyn Any>> = get_or(payload.equals(None), given);
    assert_eq!(payload_value.and_then(|v| v.downcast_ref::<char>().copied()), Some('p'));
    let nothing: Option<Box<dyn Any>> = get_or(payload.equals(None), defaults);
    assert!(nothing.is_none());

    let unset_variant = bind_parameters(
        (shape.equals(Shape::Square(2)),),
        (shape.variant_unset::<Shape>(),),
    );
    assert_eq!(unset_variant.0.value, Some(Shape::Square(2)));
}

#[test]
fn get_after_binding() {
    let text = String::from("by reference");
    let empty = String::new();
    let bound = bind_parameters((second.equals(&text),), (first.equals(1u8), second.equals(&empty)));
    assert_eq!(*get(first, &bound), 1);
    assert!(std::ptr::eq(*get(second, &bound), &text));
    assert_eq!(get_or(third.equals(7u8), bound), 7);
    assert_eq!(get_or(first.equals(0u64), bound), 1);
}

#[test]
fn get_or_builds_from_elements() {
    let entries = (third.call((3, 4)),);
    assert_eq!(get_or(third.equals(Point(0, 0)), entries), Point(3, 4));
    assert_eq!(get_or(third.equals(Point(0, 0)), (third.equals([5, 6]),)), Point(5, 6));
    let named: NamedArgs<third, (i32, i32)> = third.call((3, 4));
    assert_eq!(format!("{:?}", named), "third(3, 4)");
}

fn describe<A>(args: A) -> String
where
    A: Binds<(NamedValue<first, Point>, NamedValue<second, &'static str>, NamedValue<fourth, bool>)>,
{
    let mut bound = args.bind((
        first.equals(Point(0, 0)),
        second.equals("point"),
        fourth.equals(false),
    ));
    if *get(fourth, &bound) {
        *get_mut(second, &mut bound) = "POINT";
    }
    let Point(x, y) = *get(first, &bound);
    format!("{} at ({}, {})", take(second, bound), x, y)
}

#[test]
fn generic_callee() {
    assert_eq!(describe(()), "point at (0, 0)");
    assert_eq!(describe(args![first(1, 2)]), "point at (1, 2)");
    assert_eq!(describe(args![fourth, second = "spot"]), "POINT at (0, 0)");
}
