use fvv::{fvv, FvvTree, FvvValue, PrintMode, ValueKind};

#[test]
fn test_fvv_macro_empty() {
    let tree = fvv!({});
    assert!(tree.is_empty());
    assert_eq!(tree.print(PrintMode::Min), "{}");
}

#[test]
fn test_fvv_macro_scalars() {
    let tree = fvv!({
        "on": true,
        "count": 42,
        "ratio": 0.5,
        "name": "demo"
    });

    assert_eq!(tree.get("on").unwrap().kind(), ValueKind::Bool);
    assert_eq!(tree.get("count").unwrap().as_int(), 42);
    assert_eq!(tree.get("ratio").unwrap().as_double(), 0.5);
    assert_eq!(tree.get("name").unwrap().as_str(), "demo");
}

#[test]
fn test_fvv_macro_negative_numbers() {
    let tree = fvv!({ "n": -123, "d": -1.5 });
    assert_eq!(tree.get("n").unwrap().as_int(), -123);
    assert_eq!(tree.get("d").unwrap().as_double(), -1.5);
}

#[test]
fn test_fvv_macro_lists() {
    let tree = fvv!({
        "bools": [true, false],
        "ints": [1, 2, 3],
        "doubles": [0.5, 1.0],
        "strs": ["a", "b"],
    });

    assert_eq!(tree.get("bools").unwrap().as_bools(), &[true, false]);
    assert_eq!(tree.get("ints").unwrap().as_ints(), &[1, 2, 3]);
    assert_eq!(tree.get("doubles").unwrap().as_doubles(), &[0.5, 1.0]);
    assert_eq!(tree.get("strs").unwrap().as_strs(), &["a", "b"]);
}

#[test]
fn test_fvv_macro_nested_groups() {
    let tree = fvv!({
        "db": {
            "host": "localhost",
            "pool": { "min": 1, "max": 8 }
        },
        "empty": {}
    });

    assert!(tree.get("db").unwrap().is_group());
    assert_eq!(tree.get("db.pool.max").unwrap().as_int(), 8);
    assert!(tree.get("empty").unwrap().is_empty());
    assert_eq!(
        tree.print(PrintMode::Min),
        "{db={host=\"localhost\";pool={max=8;min=1;};};}"
    );
}

#[test]
fn test_fvv_macro_with_expressions() {
    let host = String::from("example.org");
    let ports = vec![80i64, 443];
    let tree = fvv!({
        "host": host,
        "ports": FvvValue::from(ports),
        "sum": 2 + 3
    });

    assert_eq!(tree.get("host").unwrap().as_str(), "example.org");
    assert_eq!(tree.get("ports").unwrap().as_ints(), &[80, 443]);
    assert_eq!(tree.get("sum").unwrap().as_int(), 5);
}

#[test]
fn test_fvv_macro_matches_parsed_text() {
    let built = fvv!({
        "a": 1,
        "g": { "s": "x", "l": [1.5, 2.5] }
    });
    let parsed = fvv::from_str(r#"{ a = 1; g = { s = "x"; l = [1.5, 2.5]; }; }"#);

    assert_eq!(built.print(PrintMode::Min), parsed.print(PrintMode::Min));
}

#[test]
fn test_fvv_macro_output_can_be_extended() {
    let mut tree: FvvTree = fvv!({ "a": 1 });
    fvv::parse("{ b = a; }", &mut tree);
    assert_eq!(tree.get("b").unwrap().as_int(), 1);
}
