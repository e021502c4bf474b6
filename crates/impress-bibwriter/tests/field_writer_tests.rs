//! Field writer integration tests

use impress_bibwriter::{is_balanced, Field, FieldPreferences, FieldWriter, InvalidFieldValue, Segment};
use proptest::prelude::*;
use rstest::{fixture, rstest};

#[fixture]
fn writer() -> FieldWriter {
    FieldWriter::new(FieldPreferences::empty().with_resolvable_field(Field::Month))
}

// === Values written verbatim ===

#[rstest]
#[case::changelog(
    "# Changelog\n\nAll notable changes to this project will be documented in this file.\n\
     We refer to issues by using `#NUM`.\n\n## [Unreleased]"
)]
#[case::markdown_headings(
    "#### Goal\nLorem ipsum dolor sit amet,\n#### Achievement \nLorem ipsum,\n#### Method\nLorem ipsum,"
)]
#[case::html_entity("Particularly, we equip SOVA &#x2013; a Semantic and Ontological Variability Analysis method")]
fn test_keep_hash_sign_in_comment(writer: FieldWriter, #[case] text: &str) {
    assert_eq!(
        writer.write(&Field::Comment, text).unwrap(),
        format!("{{{}}}", text)
    );
}

#[rstest]
#[case::mixed_line_breaks("lorem\n ipsum lorem ipsum\nlorem ipsum \rlorem ipsum\r\ntest")]
#[case::single_newline("lorem ipsum lorem ipsum\nlorem ipsum lorem ipsum")]
#[case::double_newline("lorem ipsum lorem ipsum\r\n\r\nlorem ipsum lorem ipsum")]
fn test_line_breaks_not_normalized(
    writer: FieldWriter,
    #[case] text: &str,
    #[values(Field::Abstract, Field::Review)] field: Field,
) {
    assert_eq!(writer.write(&field, text).unwrap(), format!("{{{}}}", text));
}

#[rstest]
fn test_whitespace_kept_on_any_field(
    writer: FieldWriter,
    #[values(Field::Title, Field::from_str("anyotherfield"))] field: Field,
) {
    let original = "I\nshould\nnot\ninclude\nadditional\nwhitespaces  \nor\n\ttabs.";
    assert_eq!(
        writer.write(&field, original).unwrap(),
        format!("{{{}}}", original)
    );
}

#[rstest]
#[case(Field::Month, "t  w  o", "{t  w  o}")]
#[case(Field::Month, "  text      ", "{  text      }")]
#[case(Field::Comment, "  text      ", "{  text      }")]
#[case(Field::Comment, "t  w  o", "{t  w  o}")]
#[case(Field::Comment, "  text      \n", "{  text      \n}")]
#[case(Field::Comment, "  text      \r\n", "{  text      \r\n}")]
#[case(Field::Title, "mytitle", "{mytitle}")]
fn test_spaces_are_kept(
    writer: FieldWriter,
    #[case] field: Field,
    #[case] text: &str,
    #[case] expected: &str,
) {
    assert_eq!(writer.write(&field, text).unwrap(), expected);
}

// === Brace balance ===

#[rstest]
#[case::open_only("{")]
#[case::escaped_close("{\\}")]
#[case::close_only("}")]
#[case::close_before_open("}{")]
fn test_report_unbalanced_bracing(writer: FieldWriter, #[case] text: &str) {
    let field = Field::from_str("anyfield");
    let err: InvalidFieldValue = writer.write(&field, text).unwrap_err();
    assert_eq!(err.field, field);
    assert_eq!(err.value, text);
}

#[rstest]
fn test_unbalanced_rejected_for_every_field(
    writer: FieldWriter,
    #[values(Field::Month, Field::Comment, Field::Title, Field::from_str("anyfield"))] field: Field,
) {
    assert!(writer.write(&field, "{").is_err());
}

#[rstest]
#[case("Incorporating evolutionary {Measures into Conservation Prioritization}")]
#[case("Incorporating {\\O}evolutionary {Measures into Conservation Prioritization}")]
fn test_tolerate_balanced_braces(writer: FieldWriter, #[case] text: &str) {
    assert_eq!(
        writer.write(&Field::from_str("anyfield"), text).unwrap(),
        format!("{{{}}}", text)
    );
}

// === String references ===

#[rstest]
#[case::enclosed_words("#jan# - #feb#", "jan # { - } # feb")]
#[case::single_hash("#text", "{#text}")]
#[case::escaped_hash("\\#text", "{\\#text}")]
#[case::double_hash_removed("te##xt", "{text}")]
#[case::bare_reference("#jan#", "jan")]
#[case::three_hashes("#a# #b", "{#a# #b}")]
fn test_month_string_references(
    writer: FieldWriter,
    #[case] text: &str,
    #[case] expected: &str,
) {
    assert_eq!(writer.write(&Field::Month, text).unwrap(), expected);
}

#[rstest]
#[case::group_around_reference("{#jan#}", "{{#jan#}}")]
#[case::group_inside_pair("#a{#}", "{#a{#}}")]
#[case::pair_inside_group("x {#a# b}", "{x {#a# b}}")]
#[case::groups_beside_reference("{A} #jan# {B}", "{{A} } # jan # { {B}}")]
fn test_references_never_split_brace_groups(
    writer: FieldWriter,
    #[case] text: &str,
    #[case] expected: &str,
) {
    let written = writer.write(&Field::Month, text).unwrap();
    assert_eq!(written, expected);
    for segment in writer.segments(&Field::Month, text).unwrap() {
        let (Segment::Literal(part) | Segment::MacroReference(part)) = segment;
        assert!(is_balanced(&part), "unbalanced segment {:?}", part);
    }
}

#[test]
fn test_resolve_strings_switched_off() {
    let writer = FieldWriter::new(
        FieldPreferences::empty()
            .with_resolve_strings(false)
            .with_resolvable_field(Field::Month),
    );
    assert_eq!(writer.write(&Field::Month, "#jan#").unwrap(), "{#jan#}");
    assert_eq!(
        writer.write(&Field::Month, "#jan# - #feb#").unwrap(),
        "{#jan# - #feb#}"
    );
}

#[test]
fn test_configured_field_gets_references() {
    let writer = FieldWriter::new(FieldPreferences::default().with_resolvable_field("journal"));
    assert_eq!(
        writer.write(&Field::Journal, "#apj# Letters").unwrap(),
        "apj # { Letters}"
    );
    assert_eq!(
        writer.write(&Field::from_str("JOURNAL"), "#apj#").unwrap(),
        "apj"
    );
}

#[test]
fn test_no_resolvable_fields() {
    let writer = FieldWriter::new(FieldPreferences::empty());
    assert_eq!(
        writer.write(&Field::Month, "#jan#").unwrap(),
        "{#jan#}"
    );
}

#[test]
fn test_writer_shared_across_threads() {
    let writer = FieldWriter::new(FieldPreferences::default());
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let writer = &writer;
                scope.spawn(move || writer.write(&Field::Month, &format!("#m{}# x", i)))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(
                handle.join().unwrap().unwrap(),
                format!("m{} # {{ x}}", i)
            );
        }
    });
}

// === Properties ===

/// Strings with no braces or backslashes always balance
fn brace_free_text() -> impl Strategy<Value = String> {
    "[^{}\\\\]*"
}

proptest! {
    #[test]
    fn prop_plain_fields_pass_through(text in brace_free_text()) {
        let writer = FieldWriter::new(FieldPreferences::default());
        let written = writer.write(&Field::Title, &text).unwrap();
        prop_assert_eq!(&written, &format!("{{{}}}", text));

        // Stripping the outer braces and writing again gives the same output
        let inner = &written[1..written.len() - 1];
        prop_assert_eq!(writer.write(&Field::Title, inner).unwrap(), written.clone());
    }

    #[test]
    fn prop_unclosed_group_always_rejected(text in brace_free_text(), field in "[a-z]{1,12}") {
        let writer = FieldWriter::new(FieldPreferences::default());
        let value = format!("{{{}", text);
        prop_assert!(writer.write(&Field::from_str(&field), &value).is_err());
    }

    #[test]
    fn prop_macro_names_never_empty(text in "[a-z# -]*") {
        let writer = FieldWriter::new(FieldPreferences::default());
        let segments = writer.segments(&Field::Month, &text).unwrap();
        for segment in segments {
            if let Segment::MacroReference(name) = segment {
                prop_assert!(!name.is_empty());
            }
        }
    }

    #[test]
    fn prop_balanced_values_give_balanced_segments(text in "[a-z# {}]*") {
        prop_assume!(is_balanced(&text));
        let writer = FieldWriter::new(FieldPreferences::default());
        for segment in writer.segments(&Field::Month, &text).unwrap() {
            let (Segment::Literal(part) | Segment::MacroReference(part)) = segment;
            prop_assert!(is_balanced(&part));
        }
    }
}
