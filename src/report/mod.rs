pub mod flags;
pub mod json;
pub mod profile;
pub mod text;

pub const EMPTY_CELL: &str = "--";

pub fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => EMPTY_CELL,
    }
}

/// Terminal columns taken by `s`. A flag pair draws two columns, one per
/// regional indicator; the placeholder flag draws one.
pub fn display_width(s: &str) -> usize {
    s.chars().count()
}

pub fn pad_right(s: &str, width: usize) -> String {
    let w = display_width(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(w));
    out.push_str(s);
    for _ in w..width {
        out.push(' ');
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
