use percent_encoding::percent_decode_str;

/// Percent-decodes and lower-cases search-link text. Invalid escapes are kept
/// verbatim and invalid UTF-8 is replaced, so this never fails.
pub(crate) fn decode_search_text(value: &str) -> String {
    percent_decode_str(value)
        .decode_utf8_lossy()
        .to_lowercase()
}

pub(crate) fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_escapes_and_lowercases() {
        assert_eq!(
            decode_search_text("keywords%3ASenior%20Engineer"),
            "keywords:senior engineer"
        );
    }

    #[test]
    fn tolerates_malformed_escapes() {
        assert_eq!(decode_search_text("100%zz%"), "100%zz%");
        assert_eq!(decode_search_text("%FF%FE"), "\u{fffd}\u{fffd}");
    }

    #[test]
    fn capitalizes_only_the_first_letter() {
        assert_eq!(capitalize_first("deep research"), "Deep research");
        assert_eq!(capitalize_first("x-ray"), "X-ray");
        assert_eq!(capitalize_first(""), "");
    }
}
