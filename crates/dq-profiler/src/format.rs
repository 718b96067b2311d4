//! Structural format signatures.

/// Replaces each character of `value` with its class marker: ASCII digits
/// become `9`, ASCII letters `X`, and any character that is neither
/// alphanumeric nor `_` becomes `S`. Other alphanumerics are kept as-is.
pub fn format_signature(value: &str) -> String {
    value
        .chars()
        .map(|ch| {
            if ch.is_ascii_digit() {
                '9'
            } else if ch.is_ascii_alphabetic() {
                'X'
            } else if ch.is_alphanumeric() || ch == '_' {
                ch
            } else {
                'S'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_digits_and_letters() {
        assert_eq!(format_signature("AB-1234"), "XXS9999");
        assert_eq!(format_signature("2024-01-15"), "9999S99S99");
    }

    #[test]
    fn whitespace_and_punctuation_are_separators() {
        assert_eq!(format_signature("a b.c@d"), "XSXSXSX");
    }

    #[test]
    fn keeps_underscore_and_non_ascii_letters() {
        assert_eq!(format_signature("id_é"), "XX_é");
    }

    #[test]
    fn empty_value_has_empty_signature() {
        assert_eq!(format_signature(""), "");
    }
}
