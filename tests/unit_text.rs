// Unit tests for text normalization and tokenizing.
//
// Tests isolated pure functions: normalize idempotence across awkward
// inputs, the documented sofa-bed scenario, and tokenizer term boundaries.

use catmatch::text::normalize::{normalize, CANONICAL_TERM, COMPOUND_TERM, STRIPPED_CHARS};
use catmatch::text::tokenize::tokenize;

// ============================================================
// normalize — documented behavior
// ============================================================

#[test]
fn sofa_bed_description_normalizes_to_base_word() {
    assert_eq!(normalize("Диван-кровать <b>new</b>!!"), "Диван new");
}

#[test]
fn compound_term_collapses_everywhere() {
    let text = format!("{COMPOUND_TERM} и ещё {COMPOUND_TERM}");
    assert_eq!(normalize(&text), format!("{CANONICAL_TERM} и ещё {CANONICAL_TERM}"));
}

#[test]
fn every_stripped_char_is_removed() {
    let text: String = STRIPPED_CHARS.iter().collect();
    assert_eq!(normalize(&format!("x{text}y")), "xy");
}

#[test]
fn other_punctuation_survives() {
    assert_eq!(normalize("Стол, 120x80 см. - дуб; [новинка]"), "Стол, 120x80 см. - дуб; [новинка]");
}

#[test]
fn html_attributes_are_stripped_with_tag() {
    assert_eq!(
        normalize(r#"<p class="x">Кресло</p><br/>"#),
        "Кресло"
    );
}

#[test]
fn lowercase_compound_is_not_collapsed() {
    // The synonym match is case-sensitive
    assert_eq!(normalize("диван-кровать"), "диван-кровать");
}

// ============================================================
// normalize — idempotence
// ============================================================

#[test]
fn normalize_is_idempotent_on_adversarial_inputs() {
    let inputs = [
        "Диван-кровать <b>new</b>!!",
        "Диван-<b>кровать</b>",
        "Диван-(кровать)!",
        "Диван-кровать-кровать-кровать",
        "<<<>>>",
        "<a<b>c>d",
        "<!-- комментарий -->текст",
        "(<)>",
        "<\n>",
        "   ",
        "",
    ];
    for input in inputs {
        let once = normalize(input);
        let twice = normalize(&once);
        assert_eq!(once, twice, "normalize not idempotent for {input:?}");
    }
}

#[test]
fn normalized_text_contains_no_tags_or_stripped_chars() {
    let once = normalize("<i>Диван</i>-(кровать) <b>!!</b>");
    assert!(!once.contains(COMPOUND_TERM));
    assert!(!once.chars().any(|c| STRIPPED_CHARS.contains(&c)));
    assert!(!(once.contains('<') && once.contains('>')));
}

// ============================================================
// tokenize
// ============================================================

#[test]
fn tokenize_keeps_multi_char_word_runs() {
    assert_eq!(
        tokenize("Диван new, 2 места; 160x200"),
        vec!["диван", "new", "места", "160x200"]
    );
}

#[test]
fn tokenize_normalized_scenario() {
    assert_eq!(tokenize(&normalize("Диван-кровать <b>new</b>!!")), vec!["диван", "new"]);
}

#[test]
fn tokenize_empty_and_symbol_only() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("- / ; ,").is_empty());
}
