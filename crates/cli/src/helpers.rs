use std::borrow::Cow;

pub const ELLIPSIS: &str = "...";

/// Cut a value down to `max` characters, marking the cut with an ellipsis.
/// Values that already fit are returned as-is.
pub fn truncate_value(value: &str, max: usize) -> Cow<'_, str> {
    match value.char_indices().nth(max) {
        Some((index, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &value[..index])),
        None => Cow::Borrowed(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_short_values() {
        assert_eq!(truncate_value("", 80), "");
        assert_eq!(truncate_value("abc", 3), "abc");
    }

    #[test]
    fn cuts_long_values() {
        assert_eq!(truncate_value("abcdef", 3), "abc...");
        assert_eq!(truncate_value(&"x".repeat(81), 80), format!("{}...", "x".repeat(80)));
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(truncate_value("ééé", 3), "ééé");
        assert_eq!(truncate_value("éééé", 2), "éé...");
    }

    #[test]
    fn zero_width_keeps_only_marker() {
        assert_eq!(truncate_value("abc", 0), "...");
    }
}
