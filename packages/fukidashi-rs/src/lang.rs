//! Fixed language-tag normalization for the two collaborators. There is no
//! language detection here; unrecognized tags get a fixed fallback.

/// OCR language used when a tag is unrecognized.
pub const DEFAULT_OCR_LANGUAGE: &str = "jpn";

/// Maps human-readable labels, ISO-ish tags and legacy model IDs to the
/// tesseract language codes the OCR engine understands.
pub fn ocr_language(tag: &str) -> &'static str {
    match tag {
        "Japanese" | "ja" | "jpn" | "JPN" | "japan" => "jpn",
        "Chinese" | "zh" | "ch" | "chi_sim" | "CHI" | "zh-CN" => "chi_sim",
        "Korean" | "ko" | "kor" | "KOR" | "korean" => "kor",
        "English" | "en" | "eng" | "ENG" => "eng",
        _ => DEFAULT_OCR_LANGUAGE,
    }
}

/// Maps internal and OCR-side codes to the translation collaborator's
/// ISO-style codes. Tags already in that vocabulary pass through, so
/// "auto" and plain ISO codes survive unchanged.
pub fn translation_language(tag: &str) -> String {
    match tag {
        "japan" | "jpn" => "ja".to_string(),
        "ch" | "chi_sim" => "zh-CN".to_string(),
        "korean" | "kor" => "ko".to_string(),
        "eng" => "en".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ocr_language_accepts_all_tag_styles() {
        assert_eq!(ocr_language("Japanese"), "jpn");
        assert_eq!(ocr_language("ja"), "jpn");
        assert_eq!(ocr_language("JPN"), "jpn");
        assert_eq!(ocr_language("japan"), "jpn");
        assert_eq!(ocr_language("Chinese"), "chi_sim");
        assert_eq!(ocr_language("Korean"), "kor");
        assert_eq!(ocr_language("en"), "eng");
    }

    #[test]
    fn test_unknown_ocr_tag_falls_back_to_japanese() {
        assert_eq!(ocr_language("klingon"), "jpn");
        assert_eq!(ocr_language(""), "jpn");
    }

    #[test]
    fn test_translation_language_mapping() {
        assert_eq!(translation_language("japan"), "ja");
        assert_eq!(translation_language("jpn"), "ja");
        assert_eq!(translation_language("chi_sim"), "zh-CN");
        assert_eq!(translation_language("kor"), "ko");
    }

    #[test]
    fn test_iso_and_auto_pass_through() {
        assert_eq!(translation_language("auto"), "auto");
        assert_eq!(translation_language("en"), "en");
        assert_eq!(translation_language("zh-TW"), "zh-TW");
    }
}
