use serde::Serialize;

/// A language the translator works with, and how OCR recognizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub script: &'static str,
    /// Tesseract traineddata name, when one ships upstream.
    pub ocr_code: Option<&'static str>,
}

const fn lang(
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    script: &'static str,
    ocr_code: Option<&'static str>,
) -> Language {
    Language {
        code,
        name,
        native_name,
        script,
        ocr_code,
    }
}

/// English plus the 22 scheduled languages of India.
pub const LANGUAGES: &[Language] = &[
    lang("en", "English", "English", "Latin", Some("eng")),
    lang("hi", "Hindi", "हिन्दी", "Devanagari", Some("hin")),
    lang("bn", "Bengali", "বাংলা", "Bengali", Some("ben")),
    lang("pa", "Punjabi", "ਪੰਜਾਬੀ", "Gurmukhi", Some("pan")),
    lang("mr", "Marathi", "मराठी", "Devanagari", Some("mar")),
    lang("gu", "Gujarati", "ગુજરાતી", "Gujarati", Some("guj")),
    lang("ur", "Urdu", "اردو", "Perso-Arabic", Some("urd")),
    lang("as", "Assamese", "অসমীয়া", "Assamese", Some("asm")),
    lang("or", "Odia", "ଓଡ଼ିଆ", "Odia", Some("ori")),
    lang("mai", "Maithili", "मैथिली", "Devanagari", None),
    lang("ne", "Nepali", "नेपाली", "Devanagari", Some("nep")),
    lang("sd", "Sindhi", "سنڌي", "Perso-Arabic", Some("snd")),
    lang("ks", "Kashmiri", "کٲشُر", "Perso-Arabic", None),
    lang("doi", "Dogri", "डोगरी", "Devanagari", None),
    lang("sa", "Sanskrit", "संस्कृतम्", "Devanagari", Some("san")),
    lang("kok", "Konkani", "कोंकणी", "Devanagari", None),
    lang("ta", "Tamil", "தமிழ்", "Tamil", Some("tam")),
    lang("te", "Telugu", "తెలుగు", "Telugu", Some("tel")),
    lang("kn", "Kannada", "ಕನ್ನಡ", "Kannada", Some("kan")),
    lang("ml", "Malayalam", "മലയാളം", "Malayalam", Some("mal")),
    lang("sat", "Santali", "ᱥᱟᱱᱛᱟᱲᱤ", "Ol Chiki", None),
    lang("mni", "Manipuri", "ꯃꯤꯇꯩꯂꯣꯟ", "Meitei Mayek", None),
    lang("brx", "Bodo", "बड़ो", "Devanagari", None),
];

/// Languages recognized when no explicit list is configured.
pub const DEFAULT_OCR_LANGUAGES: &[&str] = &[
    "en", "hi", "bn", "ta", "te", "mr", "gu", "kn", "ml", "pa", "or", "as", "ur",
];

pub fn find_language(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.code.eq_ignore_ascii_case(code))
}

/// The `+`-joined recognition profile handed to the OCR engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrLanguageProfile {
    ocr_codes: Vec<&'static str>,
}

impl OcrLanguageProfile {
    /// Builds a profile from ISO codes. Unknown codes and languages without
    /// traineddata are skipped; duplicates keep their first position.
    pub fn from_codes<S: AsRef<str>>(codes: &[S]) -> Self {
        let mut ocr_codes: Vec<&'static str> = Vec::with_capacity(codes.len());

        for code in codes {
            let Some(ocr) = find_language(code.as_ref()).and_then(|l| l.ocr_code) else {
                tracing::debug!(code = code.as_ref(), "Skipping language without OCR support");
                continue;
            };
            if !ocr_codes.contains(&ocr) {
                ocr_codes.push(ocr);
            }
        }

        if ocr_codes.is_empty() {
            ocr_codes.push("eng");
        }

        Self { ocr_codes }
    }

    pub fn ocr_codes(&self) -> &[&'static str] {
        &self.ocr_codes
    }

    pub fn as_arg(&self) -> String {
        self.ocr_codes.join("+")
    }
}

impl Default for OcrLanguageProfile {
    fn default() -> Self {
        Self::from_codes(DEFAULT_OCR_LANGUAGES)
    }
}
