use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{env, error::Error};

/// One literal of a distinct type per position, so that a law mixing up positions fails to
/// typecheck rather than merely failing at runtime.
const ELEMENTS: [&str; 7] = ["1u8", "2u16", "3u32", "4u64", "'e'", "\"f\"", "true"];

/// The longest sequence checked.
const MAX_LEN: usize = 6;

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate unit tests checking the laws relating slicing, concatenation, insertion,
    // erasure, and reversal, for every position in every sequence up to a fixed length.

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("tuple_laws.rs");
    let mut f = File::create(&dest_path)?;

    writeln!(f, "#[allow(unused_imports)]")?;
    writeln!(f, "use crate::{{concat_into, ArrayFactory, Sequence, TupleFactory}};")?;
    writeln!(f)?;

    writeln!(f, "#[test]")?;
    writeln!(f, "fn empty_tuple_laws() {{")?;
    writeln!(f, "    let () = ().reverse().reverse();")?;
    writeln!(f, "    let () = concat_into::<TupleFactory, _>(((), ()));")?;
    writeln!(f, "    let () = ().insert::<0, _>(0i8).erase::<0>();")?;
    writeln!(f, "}}")?;

    for len in 1..=MAX_LEN {
        writeln!(f)?;
        write_tuple_laws(&mut f, len)?;
        writeln!(f)?;
        write_array_laws(&mut f, len)?;
    }

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}

fn write_tuple_laws(f: &mut impl Write, len: usize) -> Result<(), Box<dyn Error>> {
    writeln!(f, "#[test]")?;
    writeln!(f, "fn tuple_laws_{}() {{", len)?;
    writeln!(f, "    let t = ({},);", ELEMENTS[..len].join(", "))?;
    writeln!(f, "    assert_eq!(t.reverse().reverse(), t);")?;
    writeln!(f, "    assert_eq!(t.slice::<0, {}>(), t);", len + 2)?;
    writeln!(f, "    assert_eq!(t.erase::<{}>(), t);", len)?;
    for pos in 0..=len {
        writeln!(
            f,
            "    assert_eq!(concat_into::<TupleFactory, _>((t.slice::<0, {pos}>(), t.slice_from::<{pos}>())), t);",
            pos = pos,
        )?;
        writeln!(
            f,
            "    assert_eq!(t.insert::<{pos}, _>(0i8).erase::<{pos}>(), t);",
            pos = pos,
        )?;
        writeln!(
            f,
            "    assert_eq!(t.erase_range::<{pos}, {pos}>(), t);",
            pos = pos,
        )?;
    }
    writeln!(f, "}}")?;
    Ok(())
}

fn write_array_laws(f: &mut impl Write, len: usize) -> Result<(), Box<dyn Error>> {
    let elements: Vec<String> = (1..=len).map(|i| format!("{}u8", i)).collect();
    writeln!(f, "#[test]")?;
    writeln!(f, "fn array_laws_{}() {{", len)?;
    writeln!(f, "    let a = [{}];", elements.join(", "))?;
    writeln!(f, "    assert_eq!(a.reverse().reverse(), a);")?;
    writeln!(f, "    assert_eq!(a.slice::<0, {}>(), a);", len + 2)?;
    for pos in 0..=len {
        writeln!(
            f,
            "    assert_eq!(concat_into::<ArrayFactory, _>((a.slice_into::<TupleFactory, 0, {pos}>(), a.slice_from_into::<TupleFactory, {pos}>())), a);",
            pos = pos,
        )?;
        writeln!(
            f,
            "    assert_eq!(a.insert::<{pos}, _>(0u8).erase::<{pos}>(), a);",
            pos = pos,
        )?;
    }
    writeln!(f, "}}")?;
    Ok(())
}
