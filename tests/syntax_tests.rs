use tagspec::{classify_items, split_items, Error, SplitOptions};

fn single_quotes() -> SplitOptions {
    SplitOptions::new()
        .with_quotes(['\''])
        .with_delimiters([';'])
}

#[test]
fn test_quoted_regions_are_not_split() {
    let items = split_items(
        "not null;default:'one';check:', n > 1'",
        &single_quotes().with_delete_escapes(true),
    )
    .unwrap();
    assert_eq!(items, vec!["not null", "default:'one'", "check:', n > 1'"]);
}

#[test]
fn test_odd_quote_count_is_an_error() {
    let err = split_items(
        "not null;default:'one;check:', n > 1'",
        &single_quotes().with_delete_escapes(true),
    )
    .unwrap_err();
    assert!(matches!(err, Error::UnclosedQuote { .. }));
}

#[test]
fn test_escapes_kept_verbatim() {
    let items = split_items(
        r"references:badId\\;polymorphic:my\'BadValue;",
        &single_quotes(),
    )
    .unwrap();
    assert_eq!(items, vec![r"references:badId\\", r"polymorphic:my\'BadValue"]);
}

#[test]
fn test_escapes_deleted() {
    let items = split_items(
        r"references:badId\\;polymorphic:my\'BadValue;",
        &single_quotes().with_delete_escapes(true),
    )
    .unwrap();
    assert_eq!(items, vec![r"references:badId\", "polymorphic:my'BadValue"]);
}

#[test]
fn test_top_level_keeps_inner_escapes() {
    let items = split_items(
        r#"a:"x\"y z" b:"w""#,
        &SplitOptions::top_level(),
    )
    .unwrap();
    assert_eq!(items, vec![r#"a:"x\"y z""#, r#"b:"w""#]);
}

#[test]
fn test_escaped_space_at_top_level() {
    let items = split_items(r"a\ b c", &SplitOptions::top_level()).unwrap();
    assert_eq!(items, vec!["a b", "c"]);
}

#[test]
fn test_whitespace_preserved_without_trimming() {
    let options = single_quotes().with_trim_spaces(false);
    let items = split_items(" a ; k : v ", &options).unwrap();
    assert_eq!(items, vec![" a ", " k : v "]);

    let tag = classify_items("", &items, ',', false).unwrap();
    assert_eq!(tag.options(), [" a "]);
    assert_eq!(tag.get_param_or(" k ", ""), " v ");
}

#[test]
fn test_duplicate_parameter_rejected() {
    let err = classify_items("", &["param1:value1", "param1:value2"], ',', true).unwrap_err();
    assert_eq!(err.to_string(), r#"duplicated param "param1" in tag"#);
}
