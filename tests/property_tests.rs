//! Property-based tests - idempotent printing and panic-free parsing
//!
//! These tests complement the integration tests by checking the print → parse → print
//! guarantee over generated trees and documents, and by feeding arbitrary text to the
//! lenient parser.

use fvv::{from_str, FvvTree, FvvValue, LinkResolution, ParseOptions, PrintMode};
use proptest::prelude::*;

const MODES: [PrintMode; 3] = [PrintMode::Common, PrintMode::Min, PrintMode::NoDesc];

fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,5}"
}

/// Printable text without backslashes, plus a few multi-byte characters.
fn text() -> impl Strategy<Value = String> {
    "[ -\\[\\]-~äö✓]{0,10}"
}

fn value() -> impl Strategy<Value = FvvValue> {
    prop_oneof![
        any::<bool>().prop_map(FvvValue::Bool),
        any::<i64>().prop_map(FvvValue::Int),
        (-1.0e15f64..1.0e15).prop_map(FvvValue::Double),
        text().prop_map(FvvValue::String),
        prop::collection::vec(any::<bool>(), 1..4).prop_map(FvvValue::Bools),
        prop::collection::vec(any::<i64>(), 1..4).prop_map(FvvValue::Ints),
        prop::collection::vec(-1.0e6f64..1.0e6, 1..4).prop_map(FvvValue::Doubles),
        prop::collection::vec(text(), 1..4).prop_map(FvvValue::Strings),
    ]
}

fn tree() -> impl Strategy<Value = FvvTree> {
    let statement = (prop::collection::vec(name(), 1..4), value(), text());
    prop::collection::vec(statement, 0..12).prop_map(|statements| {
        let mut tree = FvvTree::new();
        for (path, value, desc) in statements {
            tree.entry(&path.join(".")).set(value).set_description(desc);
        }
        tree
    })
}

/// A document mixing literals, strings and bare names that may or may not resolve.
fn document() -> impl Strategy<Value = String> {
    let literal = prop_oneof![
        any::<i64>().prop_map(|i| i.to_string()),
        any::<bool>().prop_map(|b| b.to_string()),
        name(),
        text().prop_map(|s| format!("\"{}\"", s.replace('"', "\\\""))),
        prop::collection::vec(any::<i32>(), 0..4).prop_map(|v| format!("{v:?}")),
    ];
    let statement = (name(), literal, text())
        .prop_map(|(n, v, d)| format!("{n} = {v} <{}>;", d.replace('>', "\\>")));
    prop::collection::vec(statement, 0..10).prop_map(|s| format!("{{ {} }}", s.join("\n")))
}

proptest! {
    #[test]
    fn prop_built_tree_print_is_stable(tree in tree()) {
        for mode in MODES {
            let first = tree.print(mode);
            let second = from_str(&first).print(mode);
            prop_assert_eq!(&first, &second);
        }
    }

    #[test]
    fn prop_parsed_document_print_is_idempotent(doc in document()) {
        for mode in MODES {
            let first = from_str(&doc).print(mode);
            let second = from_str(&first).print(mode);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn prop_deferred_links_resolve_every_defined_name(doc in document()) {
        let options = ParseOptions::new().with_links(LinkResolution::Deferred);
        let tree = fvv::from_str_with_options(&doc, &options).unwrap();
        for (_, node) in tree.root().children() {
            if node.is_link_pending() {
                // A pending link may only name a missing node, an empty one, or itself.
                let unresolvable = match tree.get(node.link_name()) {
                    None => true,
                    Some(target) => {
                        target.is_empty()
                            || target.id() == node.id()
                            || target.link().map(|l| l.id()) == Some(node.id())
                    }
                };
                prop_assert!(unresolvable);
            }
        }
    }

    #[test]
    fn prop_int_reads_back(i in any::<i64>()) {
        let tree = from_str(&format!("{{ v = {i}; }}"));
        let v = tree.get("v").unwrap();
        prop_assert_eq!(v.as_int(), i);
        prop_assert_eq!(v.as_double(), 0.0);
        prop_assert_eq!(v.as_str(), "");
    }

    #[test]
    fn prop_double_reads_back(d in prop::num::f64::NORMAL | prop::num::f64::ZERO) {
        let tree = from_str(&format!("{{ v = {}; }}", FvvValue::Double(d)));
        prop_assert_eq!(tree.get("v").unwrap().as_double(), d);
    }

    #[test]
    fn prop_string_reads_back(s in text()) {
        let tree = from_str(&format!("{{ v = {}; }}", FvvValue::String(s.clone())));
        prop_assert_eq!(tree.get("v").unwrap().as_str(), s.as_str());
    }

    #[test]
    fn prop_parse_never_panics(input in any::<String>()) {
        let tree = from_str(&input);
        for mode in MODES {
            let _ = tree.print(mode);
        }
        let options = ParseOptions::strict().with_links(LinkResolution::Deferred);
        let _ = fvv::from_str_with_options(&input, &options);
    }

    #[test]
    fn prop_braced_noise_never_panics(body in "[a-z0-9 .=;,\\[\\]{}<>\"\\\\]{0,40}") {
        let tree = from_str(&format!("{{{body}}}"));
        let printed = tree.print(PrintMode::Min);
        prop_assert!(
            printed.starts_with('{') && printed.ends_with('}'),
            "printed output is not braced: {}",
            printed
        );
    }
}
