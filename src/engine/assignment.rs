//! The `KEY = VALUE` line grammar.

/// Split a patch line into its key and value.
///
/// The key is the text before the first `=`, the value everything after
/// it; both are trimmed of surrounding whitespace, and the value is
/// otherwise taken verbatim (it may contain further `=` signs, format
/// specifiers, and so on). Returns `None` when the line has no `=` or
/// when the key would be empty.
pub(crate) fn parse_assignment(line: &str) -> Option<(&str, &str)> {
    let caps = regex!(r"^\s*([^\s=][^=]*?)\s*=\s*(.*?)\s*$").captures(line)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_the_first_equals_sign() {
        assert_eq!(parse_assignment("GOTCLIP = first"), Some(("GOTCLIP", "first")));
        assert_eq!(parse_assignment("A = b = c"), Some(("A", "b = c")));
    }

    #[test]
    fn trims_surrounding_whitespace_only() {
        assert_eq!(parse_assignment("   QUITMSG   =   see you soon   "), Some(("QUITMSG", "see you soon")));
        // Interior whitespace survives on both sides.
        assert_eq!(parse_assignment("ODD KEY = two  words"), Some(("ODD KEY", "two  words")));
    }

    #[test]
    fn value_may_be_empty() {
        assert_eq!(parse_assignment("GOTARMOR ="), Some(("GOTARMOR", "")));
        assert_eq!(parse_assignment("GOTARMOR =   "), Some(("GOTARMOR", "")));
    }

    #[test]
    fn rejects_lines_without_an_assignment() {
        assert_eq!(parse_assignment("garbage"), None);
        assert_eq!(parse_assignment(""), None);
        assert_eq!(parse_assignment("   "), None);
    }

    #[test]
    fn rejects_an_empty_key() {
        assert_eq!(parse_assignment("= value"), None);
        assert_eq!(parse_assignment("   = value"), None);
    }

    #[test]
    fn value_keeps_formatting_characters() {
        assert_eq!(parse_assignment("QSPROMPT = overwrite '%s'?"), Some(("QSPROMPT", "overwrite '%s'?")));
    }
}
