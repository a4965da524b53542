/// Classification of a single line containing only local facts.
///
/// This is phase 1 of reflowing: each line is classified independently,
/// without reference to the machine state that consumes it.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Whether the line is blank (empty after trimming).
    pub is_blank: bool,
    /// Leading whitespace count of a content line; 0 for blank lines.
    pub indent: usize,
    /// Trimmed line text. Interior tabs are replaced with spaces so the
    /// tab-separated output surface stays well-formed.
    pub text: String,
}

/// Classifies individual lines for the reflow phase.
pub struct CatalogLineClassifier;

impl CatalogLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    ///
    /// Blank means empty after trimming. Anything else is content at the
    /// indent given by its leading whitespace; malformed input therefore
    /// degrades to content at indent 0 rather than failing.
    pub fn classify(&self, line: &str) -> LineClass {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineClass {
                is_blank: true,
                indent: 0,
                text: String::new(),
            };
        }

        let indent = line.chars().take_while(|c| c.is_whitespace()).count();

        LineClass {
            is_blank: false,
            indent,
            text: trimmed.replace('\t', " "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_line_is_blank() {
        let lc = CatalogLineClassifier.classify("");
        assert!(lc.is_blank);
        assert_eq!(lc.indent, 0);
        assert_eq!(lc.text, "");
    }

    #[test]
    fn whitespace_only_line_is_blank() {
        assert!(CatalogLineClassifier.classify("   ").is_blank);
        assert!(CatalogLineClassifier.classify("\t").is_blank);
        assert!(CatalogLineClassifier.classify(" \t ").is_blank);
    }

    #[test]
    fn unindented_content_is_indent_zero() {
        let lc = CatalogLineClassifier.classify("ABANDONED ORCHARD, by Agnes Miller.");
        assert!(!lc.is_blank);
        assert_eq!(lc.indent, 0);
        assert_eq!(lc.text, "ABANDONED ORCHARD, by Agnes Miller.");
    }

    #[test]
    fn indent_counts_leading_whitespace() {
        let lc = CatalogLineClassifier.classify("  © 1Aug22, A681161. R60449,");
        assert_eq!(lc.indent, 2);
        assert_eq!(lc.text, "© 1Aug22, A681161. R60449,");

        let lc = CatalogLineClassifier.classify("    deeper still");
        assert_eq!(lc.indent, 4);
    }

    #[test]
    fn tab_indent_counts_per_character() {
        let lc = CatalogLineClassifier.classify("\t© 5Apr50, renewal");
        assert_eq!(lc.indent, 1);
        assert!(!lc.is_blank);
    }

    #[test]
    fn interior_tabs_are_normalized_to_spaces() {
        let lc = CatalogLineClassifier.classify("  R60449,\t5Apr50");
        assert_eq!(lc.text, "R60449, 5Apr50");
    }

    #[test]
    fn trailing_whitespace_is_stripped() {
        let lc = CatalogLineClassifier.classify("ACTUAL BUSINESS ENGLISH,   ");
        assert_eq!(lc.text, "ACTUAL BUSINESS ENGLISH,");
    }
}
