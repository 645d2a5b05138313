//! Equivalence transcript: every line, numbered, with a pass/fail verdict.
//!
//! ```text
//!    1    1   class A
//!    2      (-)   int x;
//!         2 (+)   long x;
//!         3       // added comment
//!    3    4   }
//! ```

use super::{CONTEXT_MARKER, DELETE_MARKER, INSERT_MARKER, REPLACE_NEW_MARKER, REPLACE_OLD_MARKER};
use crate::algo::{Alignment, DiffOp};
use crate::ignore::IgnorePolicy;

/// Blank stand-in for the line-number column of the side an op does not touch.
const EMPTY_COLUMN: &str = "    ";

/// Gutter between the number columns and the text of a matched line.
const MATCH_GUTTER: &str = "  ";

/// Rendered equivalence check.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Transcript {
    /// Line-numbered transcript of the whole comparison
    pub text: String,
    /// True iff there was no Replace and every Insert/Delete was ignorable
    pub equivalent: bool,
}

/// Render the full transcript and decide the verdict.
///
/// Inserted/deleted lines the policy accepts are shown with a blank marker
/// and do not fail the check. Replacements always fail.
pub fn render_transcript(alignment: &Alignment<'_>, ignore: &dyn IgnorePolicy) -> Transcript {
    let mut text = String::new();
    let mut equivalent = true;

    for op in alignment {
        match *op {
            DiffOp::Match { left, right } => {
                push_row(&mut text, Some(left.number), Some(right.number), MATCH_GUTTER, left.text);
            }
            DiffOp::Insert { right } => {
                let ignorable = ignore.is_ignorable(right.text);
                equivalent &= ignorable;
                let marker = if ignorable { CONTEXT_MARKER } else { INSERT_MARKER };
                push_row(&mut text, None, Some(right.number), marker, right.text);
            }
            DiffOp::Delete { left } => {
                let ignorable = ignore.is_ignorable(left.text);
                equivalent &= ignorable;
                let marker = if ignorable { CONTEXT_MARKER } else { DELETE_MARKER };
                push_row(&mut text, Some(left.number), None, marker, left.text);
            }
            DiffOp::Replace { left, right } => {
                equivalent = false;
                push_row(&mut text, Some(left.number), None, REPLACE_OLD_MARKER, left.text);
                push_row(&mut text, None, Some(right.number), REPLACE_NEW_MARKER, right.text);
            }
        }
    }

    Transcript { text, equivalent }
}

/// `{left:>4} {right:>4} {marker}{text}`, blank columns for absent sides.
fn push_row(out: &mut String, left: Option<usize>, right: Option<usize>, marker: &str, text: &str) {
    push_column(out, left);
    out.push(' ');
    push_column(out, right);
    out.push(' ');
    out.push_str(marker);
    out.push_str(text);
    out.push('\n');
}

fn push_column(out: &mut String, number: Option<usize>) {
    match number {
        Some(n) => out.push_str(&format!("{n:>4}")),
        None => out.push_str(EMPTY_COLUMN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::{align, AlignConfig};
    use crate::ignore::{BlankAfterNormalize, NeverIgnore};

    fn transcript(left: &[&str], right: &[&str]) -> Transcript {
        let alignment = align(left, right, &AlignConfig::code());
        render_transcript(&alignment, &BlankAfterNormalize::default())
    }

    #[test]
    fn test_identity_passes() {
        let t = transcript(&["a", "b"], &["a", "b"]);
        assert!(t.equivalent);
        assert_eq!(t.text, "   1    1   a\n   2    2   b\n");
    }

    #[test]
    fn test_ignorable_insert_passes() {
        let t = transcript(&["x"], &["x", "  "]);
        assert!(t.equivalent);
        assert_eq!(t.text, "   1    1   x\n        2       \n");
    }

    #[test]
    fn test_significant_insert_fails() {
        let t = transcript(&["x"], &["x", "y"]);
        assert!(!t.equivalent);
        assert_eq!(t.text, "   1    1   x\n        2  +  y\n");
    }

    #[test]
    fn test_delete_markers() {
        let t = transcript(&["a", "// gone", "b", "c"], &["a", "b"]);
        assert!(!t.equivalent);
        assert_eq!(
            t.text,
            "   1    1   a\n   2          // gone\n   3    2   b\n   4       -  c\n"
        );
    }

    #[test]
    fn test_replace_always_fails() {
        let t = transcript(&["foo()"], &["bar()"]);
        assert!(!t.equivalent);
        assert_eq!(t.text, "   1      (-) foo()\n        1 (+) bar()\n");
    }

    #[test]
    fn test_replace_fails_even_if_policy_ignores_everything() {
        let alignment = align(&["foo()"], &["bar()"], &AlignConfig::code());
        let t = render_transcript(&alignment, &|_: &str| true);
        assert!(!t.equivalent);
    }

    #[test]
    fn test_never_ignore_policy() {
        let alignment = align(&["x"], &["x", ""], &AlignConfig::code());
        let t = render_transcript(&alignment, &NeverIgnore);
        assert!(!t.equivalent);
        assert!(t.text.ends_with("        2  +  \n"));
    }

    #[test]
    fn test_wide_line_numbers() {
        let left: Vec<String> = (0..12_000).map(|i| format!("line {i}")).collect();
        let mut right = left.clone();
        right[10_499] = "changed".to_string();
        let alignment = align(&left, &right, &AlignConfig::code());
        let t = render_transcript(&alignment, &BlankAfterNormalize::default());
        assert!(t.text.contains("10500      (-) line 10499\n"));
        assert!(t.text.contains("     10500 (+) changed\n"));
    }

    #[test]
    fn test_empty_inputs() {
        let t = transcript(&[], &[]);
        assert!(t.equivalent);
        assert!(t.text.is_empty());
    }
}
