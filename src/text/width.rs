//! Per-character cell widths so every layout agrees on how wide a glyph draws.
//!
//! This is a deliberately small table: zero-width marks, the emoji/CJK blocks
//! that terminals render double-wide, and width 1 for everything else. It is not
//! a full East Asian Width implementation.

/// Display cells occupied by `ch` on a truecolor terminal: 0, 1, or 2.
#[must_use]
pub const fn char_width(ch: char) -> usize {
    match ch as u32 {
        // Variation selectors, ZWSP/ZWNJ/ZWJ, BOM, combining diacriticals.
        0xFE00..=0xFE0F | 0x200B..=0x200D | 0xFEFF | 0x0300..=0x036F => 0,
        // Emoji and pictographs, misc technical, misc symbols, dingbats,
        // star glyphs, CJK ideographs, CJK punctuation, fullwidth forms.
        0x1F300..=0x1FAFF
        | 0x2300..=0x23FF
        | 0x2600..=0x26FF
        | 0x2700..=0x27BF
        | 0x2B50..=0x2B55
        | 0x4E00..=0x9FFF
        | 0x3000..=0x303F
        | 0xFF00..=0xFFEF => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use unicode_width::UnicodeWidthChar;

    #[rstest]
    #[case::ascii('a', 1)]
    #[case::digit('0', 1)]
    #[case::space(' ', 1)]
    #[case::cjk('中', 2)]
    #[case::emoji('😀', 2)]
    #[case::heart('💛', 2)]
    #[case::hourglass('⌛', 2)]
    #[case::gear('⚙', 2)]
    #[case::dingbat('✂', 2)]
    #[case::star('⭐', 2)]
    #[case::ideographic_space('\u{3000}', 2)]
    #[case::fullwidth_a('Ａ', 2)]
    #[case::variation_selector('\u{FE0F}', 0)]
    #[case::zero_width_space('\u{200B}', 0)]
    #[case::zero_width_joiner('\u{200D}', 0)]
    #[case::bom('\u{FEFF}', 0)]
    #[case::combining_acute('\u{0301}', 0)]
    #[case::box_drawing('│', 1)]
    #[case::block('█', 1)]
    #[case::powerline_arrow('\u{E0B0}', 1)]
    #[case::hangul('한', 1)]
    fn classifies_known_glyphs(#[case] ch: char, #[case] expected: usize) {
        assert_eq!(char_width(ch), expected, "width of {ch:?}");
    }

    #[test]
    fn range_edges_are_inclusive() {
        assert_eq!(char_width('\u{1F2FF}'), 1);
        assert_eq!(char_width('\u{1F300}'), 2);
        assert_eq!(char_width('\u{1FAFF}'), 2);
        assert_eq!(char_width('\u{1FB00}'), 1);
        assert_eq!(char_width('\u{2B4F}'), 1);
        assert_eq!(char_width('\u{2B55}'), 2);
        assert_eq!(char_width('\u{2B56}'), 1);
        assert_eq!(char_width('\u{FFEF}'), 2);
        assert_eq!(char_width('\u{FFF0}'), 1);
    }

    #[test]
    fn zero_width_rules_win_over_defaults() {
        for cp in 0x0300u32..=0x036F {
            let ch = char::from_u32(cp).expect("combining mark is a scalar");
            assert_eq!(char_width(ch), 0);
        }
    }

    #[test]
    fn agrees_with_unicode_width_for_ascii_and_cjk() {
        for ch in (' '..='~').chain('\u{4E00}'..='\u{4E80}') {
            assert_eq!(Some(char_width(ch)), UnicodeWidthChar::width(ch), "{ch:?}");
        }
    }

    proptest! {
        #[test]
        fn width_is_always_zero_one_or_two(ch in any::<char>()) {
            prop_assert!(char_width(ch) <= 2);
        }
    }
}
