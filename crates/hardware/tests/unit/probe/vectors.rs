//! JSON vector files.

use std::io::Write;

use tempfile::NamedTempFile;
use xprobe_core::common::{Value, Vector3};
use xprobe_core::isa::xcustom::Opcode;
use xprobe_core::probe::Inputs;
use xprobe_core::probe::vectors::{VectorError, load_vectors, parse_vectors};

#[test]
fn parses_every_op_with_default_labels() {
    let cases = parse_vectors(
        r#"[
            { "op": "mod", "a": 11, "b": 10, "expected": 1 },
            { "op": "ninst", "a": -2147483648, "b": 1 },
            { "op": "fdist", "u": [3.0, 4.0, 0.0], "v": [0.0, 0.0, 0.0], "expected": 5.0 }
        ]"#,
        "edge",
    )
    .unwrap();

    assert_eq!(cases.len(), 3);
    assert_eq!(cases[0].label(), "edge[0]");
    assert_eq!(cases[0].op(), Opcode::Mod);
    assert_eq!(cases[0].expected(), Some(Value::Int(1)));
    assert_eq!(*cases[1].inputs(), Inputs::IntPair(i32::MIN, 1));
    assert_eq!(cases[1].expected(), None);
    assert_eq!(cases[2].label(), "edge[2]");
    assert_eq!(
        *cases[2].inputs(),
        Inputs::Vec3Pair(Vector3::new(3.0, 4.0, 0.0), Vector3::default())
    );
    assert_eq!(cases[2].expected(), Some(Value::Float(5.0)));
}

#[test]
fn explicit_label_wins() {
    let cases = parse_vectors(r#"[{ "op": "ninst", "a": 1, "b": 1, "label": "same" }]"#, "x").unwrap();
    assert_eq!(cases[0].label(), "same");
}

#[test]
fn empty_array_is_valid() {
    assert!(parse_vectors("[]", "x").unwrap().is_empty());
}

#[test]
fn malformed_documents_are_parse_errors() {
    for text in [
        r#"[{ "op": "rem", "a": 1, "b": 2 }]"#,
        r#"[{ "op": "mod", "a": 1 }]"#,
        r#"[{ "op": "mod", "a": 4294967295, "b": 2 }]"#,
        r#"[{ "op": "fdist", "u": [1.0, 2.0], "v": [0.0, 0.0, 0.0] }]"#,
        r#"{ "op": "mod", "a": 1, "b": 2 }"#,
        "not json",
    ] {
        assert!(
            matches!(parse_vectors(text, "x"), Err(VectorError::Parse(_))),
            "accepted {text}"
        );
    }
}

#[test]
fn load_uses_file_stem_as_prefix() {
    let mut file = tempfile::Builder::new()
        .prefix("regress")
        .suffix(".json")
        .tempfile()
        .unwrap();
    write!(file, r#"[{{ "op": "mod", "a": 7, "b": 3 }}]"#).unwrap();

    let cases = load_vectors(file.path()).unwrap();
    let stem = file.path().file_stem().unwrap().to_string_lossy().into_owned();
    assert_eq!(cases[0].label(), format!("{stem}[0]"));
    assert!(stem.starts_with("regress"));
}

#[test]
fn missing_file_is_io_error() {
    let file = NamedTempFile::new().unwrap();
    let path = file.path().to_path_buf();
    drop(file);
    let err = load_vectors(&path).unwrap_err();
    assert!(matches!(err, VectorError::Io { .. }));
    assert!(err.to_string().contains("cannot read vectors"));
}
