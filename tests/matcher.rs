use docfill::FieldMatcher;

fn compiled(name: &str, value: &str) -> FieldMatcher {
    FieldMatcher::compile(name, value).expect("matcher should compile")
}

#[test]
fn labeled_blank_with_underscores() {
    let m = compiled("Name", "Alice");
    assert_eq!(m.apply("Name: ____").as_deref(), Some("Name: Alice"));
}

#[test]
fn labeled_blank_trailing_end_of_span() {
    let m = compiled("Name", "Alice");
    assert_eq!(m.apply("Name: ").as_deref(), Some("Name: Alice"));
    assert_eq!(m.apply("Name:").as_deref(), Some("Name:Alice"));
}

#[test]
fn labeled_underscores_without_colon() {
    let m = compiled("Claim No", "C-17");
    assert_eq!(m.apply("Claim No ______").as_deref(), Some("Claim No C-17"));
}

#[test]
fn bracket_brace_and_angle_tokens_consume_the_label() {
    let m = compiled("Date of Loss", "2024-06-01");
    assert_eq!(m.apply("[Date of Loss]").as_deref(), Some("2024-06-01"));
    assert_eq!(m.apply("{{Date of Loss}}").as_deref(), Some("2024-06-01"));
    assert_eq!(m.apply("<Date of Loss>").as_deref(), Some("2024-06-01"));
}

#[test]
fn no_placeholder_returns_none() {
    let m = compiled("Name", "Alice");
    assert_eq!(m.apply("Nothing to see"), None);
    assert_eq!(m.apply("Name was mentioned, mid-sentence"), None);
}

#[test]
fn absent_values_do_not_compile() {
    assert!(FieldMatcher::compile("Name", "").is_none());
    assert!(FieldMatcher::compile("Name", "N/A").is_none());
}

#[test]
fn first_matching_syntax_wins() {
    // Both a labeled blank and a bracket token for the same field: only the
    // earlier syntax in the fixed order is applied.
    let m = compiled("Name", "Alice");
    assert_eq!(
        m.apply("Name: ____ or [Name]").as_deref(),
        Some("Name: Alice or [Name]"),
    );
}

#[test]
fn matching_syntax_replaces_every_occurrence() {
    let m = compiled("Policy Number", "PL-0042");
    assert_eq!(
        m.apply("{{Policy Number}} / {{Policy Number}}").as_deref(),
        Some("PL-0042 / PL-0042"),
    );
}

#[test]
fn field_name_is_case_insensitive_value_is_not() {
    let m = compiled("name", "John Doe");
    assert_eq!(m.apply("NAME: ____").as_deref(), Some("NAME: John Doe"));
    assert_eq!(m.apply("<NaMe>").as_deref(), Some("John Doe"));
}

#[test]
fn regex_metacharacters_in_names_are_literal() {
    let m = compiled("Total (USD)", "500");
    assert_eq!(m.apply("[Total (USD)]").as_deref(), Some("500"));
    assert_eq!(m.apply("Total (USD): ____").as_deref(), Some("Total (USD): 500"));

    let m = compiled("C++ Skill *", "expert");
    assert_eq!(m.apply("<C++ Skill *>").as_deref(), Some("expert"));
}

#[test]
fn dollar_signs_in_values_stay_literal() {
    let m = compiled("Amount", "$1,000");
    assert_eq!(m.apply("Amount: ____").as_deref(), Some("Amount: $1,000"));
    assert_eq!(m.apply("[Amount]").as_deref(), Some("$1,000"));
}

#[test]
fn label_occurs_in_is_case_insensitive_substring() {
    let m = compiled("Claimant Name", "Jane");
    assert!(m.label_occurs_in("CLAIMANT NAME"));
    assert!(m.label_occurs_in("Full claimant name (print)"));
    assert!(!m.label_occurs_in("Claimant"));
}
