//! Text-width estimator.
//!
//! Approximates the rendered width of a name without font metrics. Every char
//! falls into one script class, each class has a fixed width factor, and the
//! factors are summed. One unit is roughly one full-width (CJK) character.

/// Script category of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    FullWidthSpace, // U+3000
    Whitespace,
    HalfWidthKana, // U+FF61..=U+FF9F
    Digit,
    AsciiUpper,
    AsciiLower,
    Latin1, // rest of U+0000..=U+00FF
    Wide,   // everything else, CJK included
}

impl CharClass {
    /// Width in units of one full-width character
    pub const fn width_factor(self) -> f64 {
        match self {
            CharClass::FullWidthSpace => 1.0,
            CharClass::Whitespace => 0.35,
            CharClass::HalfWidthKana => 0.7,
            CharClass::Digit => 0.6,
            CharClass::AsciiUpper => 0.7,
            CharClass::AsciiLower => 0.55,
            CharClass::Latin1 => 0.55,
            CharClass::Wide => 1.0,
        }
    }
}

/// Whitespace as browser form input sees it (the `\s` class of web regexes).
///
/// Differs from [`char::is_whitespace`]: U+FEFF counts, U+0085 does not.
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn is_full_width_space(c: char) -> bool {
    c == '\u{3000}'
}

fn is_half_width_kana(c: char) -> bool {
    ('\u{FF61}'..='\u{FF9F}').contains(&c)
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_upper(c: char) -> bool {
    c.is_ascii_uppercase()
}

fn is_lower(c: char) -> bool {
    c.is_ascii_lowercase()
}

fn is_latin1(c: char) -> bool {
    (c as u32) <= 0xFF
}

/// Classification rules in priority order; first match wins.
const RULES: [(fn(char) -> bool, CharClass); 7] = [
    (is_full_width_space, CharClass::FullWidthSpace),
    (is_whitespace, CharClass::Whitespace),
    (is_half_width_kana, CharClass::HalfWidthKana),
    (is_digit, CharClass::Digit),
    (is_upper, CharClass::AsciiUpper),
    (is_lower, CharClass::AsciiLower),
    (is_latin1, CharClass::Latin1),
];

/// Classify one character.
pub fn classify_char(c: char) -> CharClass {
    RULES
        .iter()
        .find(|(matches, _)| matches(c))
        .map(|&(_, class)| class)
        .unwrap_or(CharClass::Wide)
}

/// Estimated width of `text` in full-width units. Empty text is 0.0.
pub fn estimate_width_units(text: &str) -> f64 {
    text.chars().map(|c| classify_char(c).width_factor()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_classify_each_rule() {
        assert_eq!(classify_char('\u{3000}'), CharClass::FullWidthSpace);
        assert_eq!(classify_char(' '), CharClass::Whitespace);
        assert_eq!(classify_char('\t'), CharClass::Whitespace);
        assert_eq!(classify_char('ｱ'), CharClass::HalfWidthKana);
        assert_eq!(classify_char('\u{FF61}'), CharClass::HalfWidthKana);
        assert_eq!(classify_char('\u{FF9F}'), CharClass::HalfWidthKana);
        assert_eq!(classify_char('7'), CharClass::Digit);
        assert_eq!(classify_char('Q'), CharClass::AsciiUpper);
        assert_eq!(classify_char('q'), CharClass::AsciiLower);
        assert_eq!(classify_char('é'), CharClass::Latin1);
        assert_eq!(classify_char('-'), CharClass::Latin1);
        assert_eq!(classify_char('佐'), CharClass::Wide);
        assert_eq!(classify_char('カ'), CharClass::Wide);
        assert_eq!(classify_char('\u{FFA0}'), CharClass::Wide);
    }

    #[test]
    fn test_non_breaking_space_is_whitespace() {
        // U+00A0 is whitespace, so it never reaches the Latin-1 rule
        assert_eq!(classify_char('\u{00A0}'), CharClass::Whitespace);
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        assert_eq!(classify_char('\u{FEFF}'), CharClass::Whitespace);
        assert!(approx(estimate_width_units("\u{FEFF}"), 0.35));
    }

    #[test]
    fn test_next_line_is_latin1() {
        assert!(!is_whitespace('\u{0085}'));
        assert_eq!(classify_char('\u{0085}'), CharClass::Latin1);
        assert!(approx(estimate_width_units("\u{0085}"), 0.55));
    }

    #[test]
    fn test_full_width_digits_are_wide() {
        assert_eq!(classify_char('１'), CharClass::Wide);
    }

    #[test]
    fn test_estimate_samples() {
        assert!(approx(estimate_width_units("佐藤花子"), 4.0));
        assert!(approx(estimate_width_units("ABC"), 2.1));
        assert!(approx(estimate_width_units("abc"), 1.65));
        assert!(approx(estimate_width_units("Ken 2"), 0.7 + 0.55 * 2.0 + 0.35 + 0.6));
        assert!(approx(estimate_width_units("山田\u{3000}太郎"), 5.0));
        assert_eq!(estimate_width_units(""), 0.0);
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let name = "ﾀﾛｳ Taro 3";
        assert_eq!(
            estimate_width_units(name).to_bits(),
            estimate_width_units(name).to_bits()
        );
    }
}
