use anuvadakah::domain::{CharacterFilter, NormalizationRule, TextNormalizer};

#[test]
fn given_page_joined_text_when_normalizing_then_lines_become_single_spaces() {
    let normalizer = TextNormalizer::default();
    assert_eq!(normalizer.normalize("Hello\nWorld\nFoo\n"), "Hello World Foo");
}

#[test]
fn given_ocr_text_with_tabs_and_padding_when_normalizing_then_trims_and_collapses() {
    let normalizer = TextNormalizer::default();
    assert_eq!(
        normalizer.normalize("  \t first\t\tline \r\n second  "),
        "first line second"
    );
}

#[test]
fn given_control_characters_when_normalizing_then_they_are_removed() {
    let normalizer = TextNormalizer::default();
    assert_eq!(normalizer.normalize("a\u{0000}b\u{001B}c\u{007F}d\u{0085}e"), "abcde");
}

#[test]
fn given_pdf_artifacts_when_normalizing_then_they_are_removed() {
    let normalizer = TextNormalizer::default();
    assert_eq!(
        normalizer.normalize("\u{FEFF}Title\u{2002}text\u{E000} end\u{FFFE}"),
        "Titletext end"
    );
}

#[test]
fn given_devanagari_when_preserving_scripts_then_text_survives() {
    let normalizer = TextNormalizer::new(CharacterFilter::PreserveScripts);
    assert_eq!(normalizer.normalize(" नमस्ते\tदुनिया \n"), "नमस्ते दुनिया");
}

#[test]
fn given_devanagari_when_ascii_only_then_non_latin_text_is_dropped() {
    let normalizer = TextNormalizer::new(CharacterFilter::AsciiOnly);
    assert_eq!(normalizer.normalize("Page 1 नमस्ते end"), "Page 1 end");
}

#[test]
fn given_only_whitespace_when_normalizing_then_returns_empty() {
    let normalizer = TextNormalizer::default();
    assert_eq!(normalizer.normalize(" \t\r\n\u{000B}\u{000C} "), "");
}

#[test]
fn given_normalized_text_when_normalizing_again_then_unchanged() {
    let normalizer = TextNormalizer::new(CharacterFilter::AsciiOnly);
    let once = normalizer.normalize("x \u{0301} \u{0915} y\t\tz");
    assert_eq!(normalizer.normalize(&once), once);
}

#[test]
fn given_whitespace_rule_alone_when_applied_then_tab_runs_become_one_space() {
    assert_eq!(NormalizationRule::CollapseWhitespace.apply("a\t\t\nb"), "a b");
}

#[test]
fn given_configured_filter_when_reading_back_then_matches() {
    assert_eq!(
        TextNormalizer::new(CharacterFilter::AsciiOnly).filter(),
        CharacterFilter::AsciiOnly
    );
    assert_eq!(TextNormalizer::default().filter(), CharacterFilter::PreserveScripts);
}
