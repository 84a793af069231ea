//! Parsing for multi-valued form text fields.
//!
//! Contract: split on the delimiter, trim every token, drop tokens that are
//! empty after trimming. Order is preserved; nothing is deduplicated.

/// Split `text` on `delimiter` into trimmed, non-empty tokens.
#[must_use]
pub fn parse_list(text: &str, delimiter: char) -> Vec<String> {
    text.split(delimiter)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a newline-delimited URL block into trimmed, non-empty lines.
#[must_use]
pub fn parse_url_block(text: &str) -> Vec<String> {
    parse_list(text, '\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_list_drops_empty_tokens() {
        assert_eq!(parse_list("a, , b", ','), vec!["a", "b"]);
    }

    #[test]
    fn comma_list_trims_whitespace() {
        assert_eq!(
            parse_list("  Twitter/X ,YouTube  ", ','),
            vec!["Twitter/X", "YouTube"]
        );
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(parse_list("", ',').is_empty());
        assert!(parse_list("  ,  , ", ',').is_empty());
    }

    #[test]
    fn url_block_skips_blank_lines() {
        let urls = parse_url_block("url1\n\n  \nurl2\n");
        assert_eq!(urls, vec!["url1", "url2"]);
    }

    #[test]
    fn order_and_duplicates_are_preserved() {
        assert_eq!(parse_list("b,a,b", ','), vec!["b", "a", "b"]);
    }
}
