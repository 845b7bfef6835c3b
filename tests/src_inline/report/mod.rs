use super::*;

#[test]
fn test_or_dash() {
    assert_eq!(or_dash(None), EMPTY_CELL);
    assert_eq!(or_dash(Some("")), EMPTY_CELL);
    assert_eq!(or_dash(Some("02:10:00")), "02:10:00");
}

#[test]
fn test_pad_right_counts_flags() {
    assert_eq!(pad_right("ab", 4), "ab  ");
    assert_eq!(display_width("🇭🇳 A"), 4);
    assert_eq!(display_width("🏳 A"), 3);
    assert_eq!(pad_right("🏳", 3), "🏳  ");
    assert_eq!(pad_right("abcdef", 3), "abcdef");
}
