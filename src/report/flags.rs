pub const UNKNOWN_FLAG: &str = "🏳";

/// Flag glyph for a three-letter country code. Unknown codes get
/// [`UNKNOWN_FLAG`].
pub fn flag_for(country_code: &str) -> &'static str {
    match country_code.trim().to_ascii_uppercase().as_str() {
        "COL" => "🇨🇴",
        "HON" => "🇭🇳",
        "CRC" => "🇨🇷",
        "GUA" => "🇬🇹",
        "USA" => "🇺🇸",
        "ESA" => "🇸🇻",
        "CAN" => "🇨🇦",
        _ => UNKNOWN_FLAG,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/flags.rs"]
mod tests;
