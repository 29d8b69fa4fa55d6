//! Property-based tests for the splitting and classification pipeline
//!
//! These complement the example-based tests by checking invariants across
//! generated inputs: unquoting strips at most once, arguments always rebuild
//! their value, and plain words survive a split untouched.

use proptest::prelude::*;
use tagspec::{parse, parse_subtag, split_items, unquote_param_value, Error, Param, SplitOptions};

fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,12}"
}

proptest! {
    #[test]
    fn prop_unquote_leaves_bare_values(value in "[a-zA-Z0-9 ,:;]{0,20}") {
        prop_assert_eq!(unquote_param_value(&value), value.as_str());
    }

    #[test]
    fn prop_unquote_strips_one_pair(value in "[a-zA-Z0-9 ,]{0,20}", quote in prop::sample::select(vec!['\'', '"'])) {
        let quoted = format!("{quote}{value}{quote}");
        prop_assert_eq!(unquote_param_value(&quoted), value.as_str());
    }

    #[test]
    fn prop_args_rebuild_value(value in "[a-z,]{0,20}") {
        let param = Param::new("p", value.clone());
        prop_assert!(!param.args().is_empty());
        prop_assert_eq!(param.args().join(","), value);
    }

    #[test]
    fn prop_plain_words_split_on_delimiter(words in prop::collection::vec(word(), 0..10)) {
        let joined = words.join(";");
        let items = split_items(&joined, &SplitOptions::subtag()).unwrap();
        prop_assert_eq!(items, words);
    }

    #[test]
    fn prop_split_is_total(content in "[a-z '\";\\\\]{0,30}") {
        match split_items(&content, &SplitOptions::subtag()) {
            Ok(items) => prop_assert!(
                items.iter().all(|item| item.trim() == item),
                "untrimmed item in {:?}",
                items
            ),
            Err(err) => prop_assert!(
                matches!(err, Error::UnclosedQuote { .. }),
                "unexpected error {:?}",
                err
            ),
        }
    }

    #[test]
    fn prop_subtag_value_is_first_option(options in prop::collection::vec(word(), 1..6), key in word(), value in word()) {
        let content = format!("{key}:{value};{}", options.join(";"));
        let tag = parse_subtag(&content, true).unwrap();
        prop_assert_eq!(tag.value(), options[0].as_str());
        prop_assert_eq!(tag.options(), options.as_slice());
        prop_assert_eq!(tag.get_param_or(&key, ""), value.as_str());
    }

    #[test]
    fn prop_parse_keeps_every_tag(names in prop::collection::btree_set(word(), 1..6)) {
        let input = names
            .iter()
            .map(|name| format!("{name}:\"{name}\""))
            .collect::<Vec<_>>()
            .join(" ");
        let store = parse(&input).unwrap();
        prop_assert_eq!(store.len(), names.len());
        for name in &names {
            let tag = store.get_tag(name).unwrap();
            prop_assert_eq!(tag.name(), name.as_str());
            prop_assert_eq!(tag.value(), name.as_str());
        }
    }
}
