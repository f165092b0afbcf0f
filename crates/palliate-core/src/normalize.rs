//! Text normalization applied before every comparison.

/// Fold ASCII letters to lower case.
///
/// Every other code point is left as is: Thai script has no case, and
/// folding non-ASCII letters would change what a literal trigger means.
/// Whitespace is neither trimmed nor collapsed.
pub fn normalize(text: &str) -> String {
    text.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_folded() {
        assert_eq!(normalize("What is DNR?"), "what is dnr?");
        assert_eq!(normalize("PAIN"), normalize("pain"));
    }

    #[test]
    fn test_thai_unchanged() {
        let thai = "ฉันปวดมาก หายใจลำบาก";
        assert_eq!(normalize(thai), thai);
    }

    #[test]
    fn test_mixed_script() {
        assert_eq!(normalize("ปวด PAIN ๗/10"), "ปวด pain ๗/10");
    }

    #[test]
    fn test_non_ascii_letters_untouched() {
        assert_eq!(normalize("ÉLÈVE Straße"), "ÉlÈve straße");
    }

    #[test]
    fn test_whitespace_preserved() {
        assert_eq!(normalize("  A\tB \n"), "  a\tb \n");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("Advance Care Plan");
        assert_eq!(normalize(&once), once);
    }
}
