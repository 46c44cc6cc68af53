/// Replaces every run of whitespace with a single space and trims both ends
pub(crate) fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());

    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }

    out
}

/// Byte offset of the first `:` that is not escaped with a backslash
pub(crate) fn unescaped_colon(s: &str) -> Option<usize> {
    let mut prev = None;

    for (idx, c) in s.char_indices() {
        if c == ':' && prev != Some('\\') {
            return Some(idx);
        }
        prev = Some(c);
    }

    None
}

#[cfg(test)]
mod test {
    use super::{collapse_whitespace, unescaped_colon};

    #[test]
    fn collapses_mixed_whitespace() {
        assert_eq!(collapse_whitespace("  a,\n\t b  >  c "), "a, b > c");
        assert_eq!(collapse_whitespace(" \n "), "");
    }

    #[test]
    fn skips_escaped_colons() {
        assert_eq!(unescaped_colon(r".sm\:p-4:hover"), Some(8));
        assert_eq!(unescaped_colon(r".sm\:p-4"), None);
        assert_eq!(unescaped_colon("::before"), Some(0));
    }
}
