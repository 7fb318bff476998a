use fvv::{
    from_str, parse, parse_with_options, Error, FvvTree, FvvValue, LinkResolution, ParseOptions,
    PrintMode, PrintOptions, ValueKind,
};

const CONFIG: &str = r#"
{
  app = {
    name = "inventory" <service name>;
    version = 3;
    debug = false;
  } <application settings>;

  db = {
    host = "db.internal";
    port = 5432;
    pool.min = 2;
    pool.max = 16;
    timeout = 2.5;
  };

  replica = {
    host = "replica.internal";
    port = db.port;
    timeout = db.timeout;
  };

  weights = [0.25, 0.75];
  owners = ["ops", "dev"];
  flags = [true, true, false];
}
"#;

#[test]
fn test_minimal_round_trip() {
    let tree = from_str("{a=1;}");
    assert_eq!(tree.print(PrintMode::Min), "{a=1;}");
}

#[test]
fn test_type_inference() {
    let tree = from_str("{ x = true; }");
    let x = tree.get("x").unwrap();

    assert_eq!(x.kind(), ValueKind::Bool);
    assert!(x.as_bool());
    assert_eq!(x.as_int(), 0);
}

#[test]
fn test_dotted_paths_build_groups() {
    let tree = from_str("{ a.b = 1; a.c = 2; }");
    let a = tree.get("a").unwrap();

    assert!(a.is_group());
    assert_eq!(a.len(), 2);
    assert_eq!(a.as_int(), 0);
    assert_eq!(a.get("b").unwrap().as_int(), 1);
    assert_eq!(a.get("c").unwrap().as_int(), 2);
}

#[test]
fn test_link_resolution() {
    let tree = from_str("{ a = 5; b = a; }");
    let b = tree.get("b").unwrap();

    assert!(b.is_link());
    assert_eq!(b.as_int(), 5);
    assert_eq!(b.link_name(), "a");
    assert_eq!(b.value(), &FvvValue::Empty);
    assert_eq!(b.resolved_value(), &FvvValue::Int(5));
}

#[test]
fn test_list_typed_by_first_element() {
    let tree = from_str("{ l = [1, 2.5, 3]; }");
    assert_eq!(tree.get("l").unwrap().as_ints(), &[1, 3]);
}

#[test]
fn test_description_round_trip() {
    let tree = from_str("{ a = 1 <note>; }");
    let printed = tree.print(PrintMode::Min);
    assert_eq!(printed, "{a=1<note>;}");

    let again = from_str(&printed);
    assert_eq!(again.get("a").unwrap().description(), "note");
}

#[test]
fn test_forward_reference_stays_pending_by_default() {
    let tree = from_str("{ b = a; a = 5; }");
    let b = tree.get("b").unwrap();

    assert!(b.is_link_pending());
    assert!(b.is_empty());
    assert_eq!(b.as_int(), 0);
    assert_eq!(b.link_name(), "a");
    assert_eq!(tree.print(PrintMode::Min), "{a=5;b=a;}");
}

#[test]
fn test_forward_reference_resolves_when_deferred() {
    let mut tree = FvvTree::new();
    let options = ParseOptions::new().with_links(LinkResolution::Deferred);
    parse_with_options("{ b = a; a = 5; }", &mut tree, &options).unwrap();

    let b = tree.get("b").unwrap();
    assert!(b.is_link());
    assert_eq!(b.as_int(), 5);
    assert_eq!(tree.print(PrintMode::Min), "{a=5;b=a;}");
}

#[test]
fn test_strict_deferred_accepts_forward_reference() {
    let mut tree = FvvTree::new();
    let options = ParseOptions::strict().with_links(LinkResolution::Deferred);
    assert!(parse_with_options("{ b = a; a = 5; }", &mut tree, &options).is_ok());

    let options = ParseOptions::strict();
    let err = parse_with_options("{ b = a; a = 5; }", &mut FvvTree::new(), &options).unwrap_err();
    assert_eq!(err, Error::unresolved_link(1, 5, "a"));
}

#[test]
fn test_full_config() {
    let tree = from_str(CONFIG);

    assert_eq!(tree.get("app.name").unwrap().as_str(), "inventory");
    assert_eq!(tree.get("app.name").unwrap().description(), "service name");
    assert_eq!(tree.get("app").unwrap().description(), "application settings");
    assert!(!tree.get("app.debug").unwrap().as_bool());
    assert_eq!(tree.get("db.pool.max").unwrap().as_int(), 16);
    assert_eq!(tree.get("replica.port").unwrap().as_int(), 5432);
    assert_eq!(tree.get("replica.timeout").unwrap().as_double(), 2.5);
    assert_eq!(tree.get("weights").unwrap().as_doubles(), &[0.25, 0.75]);
    assert_eq!(tree.get("owners").unwrap().as_strs(), &["ops", "dev"]);
    assert_eq!(tree.get("flags").unwrap().as_bools(), &[true, true, false]);
}

#[test]
fn test_full_config_common_output() {
    let tree = from_str(CONFIG);
    let expected = r#"{
  app = {
    debug = false;
    name = "inventory" <service name>;
    version = 3;
  } <application settings>;
  db = {
    host = "db.internal";
    pool = {
      max = 16;
      min = 2;
    };
    port = 5432;
    timeout = 2.5;
  };
  flags = [true, true, false];
  owners = ["ops", "dev"];
  replica = {
    host = "replica.internal";
    port = db.port;
    timeout = db.timeout;
  };
  weights = [0.25, 0.75];
}"#;
    assert_eq!(tree.print(PrintMode::Common), expected);
}

#[test]
fn test_full_config_is_idempotent_in_every_mode() {
    for mode in [PrintMode::Common, PrintMode::Min, PrintMode::NoDesc] {
        let first = from_str(CONFIG).print(mode);
        let second = from_str(&first).print(mode);
        assert_eq!(first, second);
    }
}

#[test]
fn test_links_survive_round_trip() {
    let first = from_str(CONFIG).print(PrintMode::Min);
    let tree = from_str(&first);

    let port = tree.get("replica.port").unwrap();
    assert!(port.is_link());
    assert_eq!(port.as_int(), 5432);
}

#[test]
fn test_sorted_print_turns_backward_link_forward() {
    let tree = from_str("{ z = 1; a = z; }");
    assert_eq!(tree.get("a").unwrap().as_int(), 1);

    let printed = tree.print(PrintMode::Min);
    assert_eq!(printed, "{a=z;z=1;}");

    let reread = from_str(&printed);
    let a = reread.get("a").unwrap();
    assert!(a.is_link_pending());
    assert_eq!(a.as_int(), 0);
    assert_eq!(reread.print(PrintMode::Min), printed);

    let options = ParseOptions::new().with_links(LinkResolution::Deferred);
    let reread = fvv::from_str_with_options(&printed, &options).unwrap();
    let a = reread.get("a").unwrap();
    assert!(a.is_link());
    assert_eq!(a.as_int(), 1);
}

#[test]
fn test_link_resolved_from_enclosing_group_first() {
    let tree = from_str("{ x = 1; g = { x = 2; y = x; }; z = x; }");

    assert_eq!(tree.get("g.y").unwrap().as_int(), 2);
    assert_eq!(tree.get("z").unwrap().as_int(), 1);
}

#[test]
fn test_link_falls_back_to_root() {
    let tree = from_str("{ base = 10; g = { h = { v = base; }; }; }");
    assert_eq!(tree.get("g.h.v").unwrap().as_int(), 10);
}

#[test]
fn test_link_chain_collapses_to_value() {
    let tree = from_str("{ a = \"x\"; b = a; c = b; }");
    let c = tree.get("c").unwrap();

    assert_eq!(c.as_str(), "x");
    assert_eq!(c.link_name(), "b");
    assert_eq!(c.link().unwrap().id(), tree.get("a").unwrap().id());
}

#[test]
fn test_links_to_groups_and_self_are_not_made() {
    let tree = from_str("{ g = { x = 1; }; a = g; b = b; }");

    assert!(tree.get("a").unwrap().is_link_pending());
    assert!(tree.get("b").unwrap().is_link_pending());
}

#[test]
fn test_links_are_not_retargeted() {
    let tree = from_str("{ a = 1; b = a; a = 2; }");
    assert_eq!(tree.get("b").unwrap().as_int(), 2);

    let tree = from_str("{ a = 1; b = a; a = { x = 1; }; }");
    let b = tree.get("b").unwrap();
    assert!(b.is_link());
    assert_eq!(b.as_int(), 0);
}

#[test]
fn test_materialize_link() {
    let mut tree = from_str("{ a = [1, 2]; b = a; }");
    let b = tree.get("b").unwrap().id();

    assert!(tree.node_mut(b).unwrap().materialize_link());
    tree.entry("a").set(vec![9]);

    let b = tree.get("b").unwrap();
    assert!(!b.is_link());
    assert_eq!(b.link_name(), "");
    assert_eq!(b.as_ints(), &[1, 2]);
    assert_eq!(tree.print(PrintMode::Min), "{a=[9];b=[1,2];}");
}

#[test]
fn test_later_statement_overwrites() {
    let tree = from_str("{ a = 1 <one>; a = \"s\"; }");
    let a = tree.get("a").unwrap();
    assert_eq!(a.as_str(), "s");
    assert_eq!(a.description(), "");
}

#[test]
fn test_value_replaces_group_and_group_replaces_value() {
    let tree = from_str("{ g = { x = 1; }; g = 2; }");
    assert!(tree.get("g").unwrap().is_leaf());
    assert_eq!(tree.get("g").unwrap().as_int(), 2);

    let tree = from_str("{ g = 2; g = { x = 1; }; }");
    assert!(tree.get("g").unwrap().is_group());
    assert_eq!(tree.get("g").unwrap().as_int(), 0);
    assert_eq!(tree.get("g.x").unwrap().as_int(), 1);
}

#[test]
fn test_parse_into_existing_tree_merges_groups() {
    let mut tree = from_str("{ g = { a = 1; }; }");
    parse("{ g = { b = 2; }; }", &mut tree);

    assert_eq!(tree.get("g.a").unwrap().as_int(), 1);
    assert_eq!(tree.get("g.b").unwrap().as_int(), 2);
}

#[test]
fn test_malformed_input_leaves_tree_unchanged() {
    let mut tree = from_str("{ a = 1; }");
    let before = tree.clone();

    parse("no braces here", &mut tree);
    parse("} backwards {", &mut tree);
    parse("{   }", &mut tree);
    parse("", &mut tree);

    assert_eq!(tree, before);
}

#[test]
fn test_truncated_group_keeps_partial_tree() {
    let tree = from_str("{ a = 1; g = { b = 2; c = 3 }");
    assert_eq!(tree.get("a").unwrap().as_int(), 1);
    assert_eq!(tree.get("g.b").unwrap().as_int(), 2);
    assert!(tree.get("g.c").is_none());
}

#[test]
fn test_strict_errors_have_positions() {
    let options = ParseOptions::strict();

    let err = fvv::from_str_with_options("{\n  a = [1,\n    x];\n}", &options).unwrap_err();
    assert!(matches!(err, Error::DroppedListElement { .. }));
    assert_eq!(err.position(), Some((3, 5)));

    let err = fvv::from_str_with_options("{ g = { a = 1; }", &options).unwrap_err();
    assert_eq!(err, Error::unterminated_group(1, 5, "g"));
}

#[test]
fn test_builder_api() {
    let mut tree = FvvTree::new();
    tree.entry("net.port").set(80).set_description("http");
    tree.entry("net.ports").set(vec![80, 443]);
    tree.entry("net.name").set("edge");
    tree.entry("ratio").set(1.0);

    let port = tree.get("net.port").unwrap().id();
    assert!(tree.entry("alias").set_link(port, "net.port"));

    assert_eq!(
        tree.print(PrintMode::Min),
        "{alias=net.port;net={name=\"edge\";port=80<http>;ports=[80,443];};ratio=1.0;}"
    );
    assert_eq!(tree.get("alias").unwrap().as_int(), 80);
}

#[test]
fn test_print_options_indent() {
    let tree = from_str("{ g = { a = 1; }; }");
    let options = PrintOptions::new().with_indent(4);
    assert_eq!(
        fvv::to_string_with_options(&tree, &options),
        "{\n    g = {\n        a = 1;\n    };\n}"
    );
}

#[test]
fn test_display_matches_common_print() {
    let tree = from_str("{ a = 1; }");
    assert_eq!(tree.to_string(), tree.print(PrintMode::Common));
}

#[test]
fn test_serde_json_bridge() {
    let tree = from_str(CONFIG);
    let json = serde_json::to_value(&tree).unwrap();

    assert_eq!(json["app"]["name"], "inventory");
    assert_eq!(json["db"]["pool"]["max"], 16);
    assert_eq!(json["replica"]["port"], 5432);
    assert_eq!(json["weights"], serde_json::json!([0.25, 0.75]));
}

#[test]
fn test_tree_from_json() {
    let json = r#"{"a": {"b": 1, "c": [1.5, 2]}, "s": "x", "big": 18446744073709551615}"#;
    let tree: FvvTree = serde_json::from_str(json).unwrap();

    assert_eq!(tree.get("a.b").unwrap().as_int(), 1);
    assert_eq!(tree.get("a.c").unwrap().as_doubles(), &[1.5, 2.0]);
    assert_eq!(tree.get("s").unwrap().as_str(), "x");
    assert_eq!(tree.get("big").unwrap().kind(), ValueKind::Double);
}

#[test]
fn test_value_json_round_trip() {
    let value = FvvValue::Strings(vec!["a".to_string(), "b".to_string()]);
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"["a","b"]"#);

    let back: FvvValue = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}
