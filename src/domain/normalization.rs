use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

static ASCII_CONTROLS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F]").unwrap());

static LATIN1_CONTROLS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{80}-\x{9F}]").unwrap());

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t\r\n]+").unwrap());

// General Punctuation, BOM, private use and Specials: the blocks PDF text
// layers leak when a font has no usable ToUnicode map.
static PDF_ARTIFACTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{2000}-\x{206F}\x{FEFF}\x{E000}-\x{F8FF}\x{FFF0}-\x{FFFF}]").unwrap()
});

static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());

/// Final allow-list applied after artifact removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterFilter {
    /// Printable ASCII only. Destroys non-Latin scripts.
    AsciiOnly,
    /// Any non-control character.
    #[default]
    PreserveScripts,
}

/// One pure text-to-text step of the normalization pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationRule {
    StripAsciiControls,
    StripLatin1Controls,
    CollapseWhitespace,
    StripPdfArtifacts,
    FilterCharacters(CharacterFilter),
    Finalize,
}

impl NormalizationRule {
    pub fn apply(&self, input: &str) -> String {
        match self {
            NormalizationRule::StripAsciiControls => {
                ASCII_CONTROLS.replace_all(input, "").into_owned()
            }
            NormalizationRule::StripLatin1Controls => {
                LATIN1_CONTROLS.replace_all(input, "").into_owned()
            }
            NormalizationRule::CollapseWhitespace => {
                WHITESPACE_RUN.replace_all(input, " ").into_owned()
            }
            NormalizationRule::StripPdfArtifacts => {
                PDF_ARTIFACTS.replace_all(input, "").into_owned()
            }
            NormalizationRule::FilterCharacters(CharacterFilter::AsciiOnly) => input
                .chars()
                .filter(|c| (' '..='~').contains(c))
                .collect(),
            NormalizationRule::FilterCharacters(CharacterFilter::PreserveScripts) => {
                input.chars().filter(|c| !c.is_control()).collect()
            }
            // Steps 4 and 5 can leave two spaces side by side.
            NormalizationRule::Finalize => SPACE_RUN.replace_all(input, " ").trim().to_string(),
        }
    }
}

/// Deterministic, side-effect-free cleanup of extracted text.
///
/// The rule order is fixed; only the final character filter varies between
/// normalizers. Output is idempotent and never longer than the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNormalizer {
    rules: [NormalizationRule; 6],
}

impl TextNormalizer {
    pub fn new(filter: CharacterFilter) -> Self {
        Self {
            rules: [
                NormalizationRule::StripAsciiControls,
                NormalizationRule::StripLatin1Controls,
                NormalizationRule::CollapseWhitespace,
                NormalizationRule::StripPdfArtifacts,
                NormalizationRule::FilterCharacters(filter),
                NormalizationRule::Finalize,
            ],
        }
    }

    pub fn rules(&self) -> &[NormalizationRule] {
        &self.rules
    }

    pub fn filter(&self) -> CharacterFilter {
        match self.rules[4] {
            NormalizationRule::FilterCharacters(filter) => filter,
            _ => CharacterFilter::default(),
        }
    }

    pub fn normalize(&self, raw: &str) -> String {
        self.rules
            .iter()
            .fold(raw.to_string(), |text, rule| rule.apply(&text))
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(CharacterFilter::default())
    }
}
