//! Script-ratio text heuristic.
//!
//! Detects whether text is *primarily* written in the script(s) of a target
//! language by counting letters per Unicode script block. This is script
//! detection, not full language detection; it exists as an auxiliary utility
//! for callers that want to sanity-check OCR output against an expected
//! language, and is not part of the pipeline's correctness contract.

/// Portion of letters that must belong to the target script by default.
pub const DEFAULT_SCRIPT_THRESHOLD: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptKey {
    Japanese,
    Chinese,
    Thai,
    Devanagari,
    Arabic,
    Korean,
}

impl ScriptKey {
    /// Normalizes a language code (aliases included) to a canonical key.
    fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "ja" | "jp" => Some(Self::Japanese),
            "zh" | "cn" => Some(Self::Chinese),
            "th" => Some(Self::Thai),
            "hi" => Some(Self::Devanagari),
            "ar" => Some(Self::Arabic),
            "ko" => Some(Self::Korean),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct ScriptCounts {
    total_letters: usize,
    han: usize,
    hiragana: usize,
    katakana: usize,
    thai: usize,
    devanagari: usize,
    arabic: usize,
    hangul: usize,
}

fn is_han(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'        // CJK Unified Ideographs
        | '\u{3400}'..='\u{4DBF}'      // Extension A
        | '\u{F900}'..='\u{FAFF}'      // Compatibility Ideographs
        | '\u{20000}'..='\u{2A6DF}'    // Extension B
    )
}

fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{309F}')
}

fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30A0}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' | '\u{FF66}'..='\u{FF9D}')
}

fn is_thai(c: char) -> bool {
    matches!(c, '\u{0E01}'..='\u{0E5B}')
}

fn is_devanagari(c: char) -> bool {
    matches!(c, '\u{0900}'..='\u{097F}' | '\u{A8E0}'..='\u{A8FF}')
}

fn is_arabic(c: char) -> bool {
    matches!(c,
        '\u{0600}'..='\u{06FF}'
        | '\u{0750}'..='\u{077F}'
        | '\u{08A0}'..='\u{08FF}'
        | '\u{FB50}'..='\u{FDFF}'
        | '\u{FE70}'..='\u{FEFF}'
    )
}

fn is_hangul(c: char) -> bool {
    matches!(c,
        '\u{AC00}'..='\u{D7AF}'        // Syllables
        | '\u{1100}'..='\u{11FF}'      // Jamo
        | '\u{3130}'..='\u{318F}'      // Compatibility Jamo
    )
}

fn count_scripts(text: &str) -> ScriptCounts {
    let mut counts = ScriptCounts::default();
    for c in text.chars() {
        if !c.is_alphabetic() {
            continue;
        }
        counts.total_letters += 1;
        if is_han(c) {
            counts.han += 1;
        } else if is_hiragana(c) {
            counts.hiragana += 1;
        } else if is_katakana(c) {
            counts.katakana += 1;
        } else if is_thai(c) {
            counts.thai += 1;
        } else if is_devanagari(c) {
            counts.devanagari += 1;
        } else if is_arabic(c) {
            counts.arabic += 1;
        } else if is_hangul(c) {
            counts.hangul += 1;
        }
    }
    counts
}

/// Checks whether `text` is primarily written in the script of `lang`.
///
/// Supported codes (aliases included): `ja`/`jp`, `zh`/`cn`, `th`, `hi`,
/// `ar`, `ko`. Returns `None` for unsupported codes, `Some(false)` for text
/// without letters.
///
/// Japanese prefers Kana so Han-only text stays ambiguous with Chinese;
/// Chinese requires a Han majority with no Kana or Hangul mixed in.
#[must_use]
pub fn matches_script(lang: &str, text: &str, threshold: Option<f64>) -> Option<bool> {
    let key = ScriptKey::from_code(lang)?;
    let threshold = threshold.unwrap_or(DEFAULT_SCRIPT_THRESHOLD);

    let counts = count_scripts(text);
    if counts.total_letters == 0 {
        return Some(false);
    }
    let ratio = |n: usize| n as f64 / counts.total_letters as f64;

    let matched = match key {
        ScriptKey::Japanese => {
            let kana = counts.hiragana + counts.katakana;
            ratio(kana) >= threshold || (kana > 0 && ratio(kana + counts.han) >= threshold)
        }
        ScriptKey::Chinese => {
            let has_kana_or_hangul = counts.hiragana + counts.katakana + counts.hangul > 0;
            ratio(counts.han) >= threshold && !has_kana_or_hangul
        }
        ScriptKey::Thai => ratio(counts.thai) >= threshold,
        ScriptKey::Devanagari => ratio(counts.devanagari) >= threshold,
        ScriptKey::Arabic => ratio(counts.arabic) >= threshold,
        ScriptKey::Korean => ratio(counts.hangul) >= threshold,
    };
    Some(matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_japanese_kana() {
        assert_eq!(matches_script("ja", "これはテストです", None), Some(true));
    }

    #[test]
    fn test_japanese_han_only_is_ambiguous() {
        assert_eq!(matches_script("ja", "漢字", None), Some(false));
    }

    #[test]
    fn test_chinese_han_without_kana() {
        assert_eq!(matches_script("zh", "这是一个测试", None), Some(true));
        // Kana mixed in rules Chinese out.
        assert_eq!(matches_script("zh", "漢字です", None), Some(false));
    }

    #[test]
    fn test_other_scripts() {
        assert_eq!(matches_script("ar", "مرحبا بالعالم", None), Some(true));
        assert_eq!(matches_script("th", "สวัสดีชาวโลก", None), Some(true));
        assert_eq!(matches_script("hi", "यह एक परीक्षण है", None), Some(true));
        assert_eq!(matches_script("ko", "안녕하세요", None), Some(true));
    }

    #[test]
    fn test_unsupported_code_and_empty_text() {
        assert_eq!(matches_script("xx", "whatever", None), None);
        assert_eq!(matches_script("ja", "12345 !!", None), Some(false));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(matches_script("jp", "ひらがな", None), Some(true));
        assert_eq!(matches_script("cn", "中文测试", None), Some(true));
    }
}
