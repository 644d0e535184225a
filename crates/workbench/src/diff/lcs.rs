//! Line diff — longest-common-subsequence edit script between two drafts.
//!
//! O(|old| * |new|) time and space. Adequate for resume-length documents
//! (tens to low hundreds of lines); not built for large files, which are
//! outside this tool's domain.

use serde::{Deserialize, Serialize};

/// Classification of one line in an edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffTag {
    Common,
    Added,
    Removed,
}

/// One line of an edit script. Produced transiently for display; never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEntry {
    pub tag: DiffTag,
    pub line: String,
}

impl DiffEntry {
    pub fn common(line: impl Into<String>) -> Self {
        DiffEntry {
            tag: DiffTag::Common,
            line: line.into(),
        }
    }

    pub fn added(line: impl Into<String>) -> Self {
        DiffEntry {
            tag: DiffTag::Added,
            line: line.into(),
        }
    }

    pub fn removed(line: impl Into<String>) -> Self {
        DiffEntry {
            tag: DiffTag::Removed,
            line: line.into(),
        }
    }
}

/// Splits a document into lines on `'\n'`.
///
/// Empty lines are preserved as empty-string entries. The empty document
/// splits to zero lines (not one empty line), so a draft seeded with `""`
/// diffs clean against its first edit. A trailing `'\n'` produces a final
/// empty line, which diffs like any other line.
fn split_lines(doc: &str) -> Vec<&str> {
    if doc.is_empty() {
        Vec::new()
    } else {
        doc.split('\n').collect()
    }
}

/// Computes the line-level edit script between two drafts.
///
/// Classic LCS dynamic programming over the two line sequences, followed by
/// a backtrack that classifies every line of the union as Common, Added, or
/// Removed. Line equality is exact: case- and whitespace-sensitive.
///
/// Tie-break: when the table scores tie during backtracking, the new-side
/// line is emitted as Added first. Swapping the rule would flip which lines
/// are reported Added vs Removed in ambiguous regions, so it is fixed here.
///
/// Pure and total — identical, empty, and pathological inputs are all valid
/// edge cases, not failures.
pub fn compute_diff(old: &str, new: &str) -> Vec<DiffEntry> {
    let old_lines = split_lines(old);
    let new_lines = split_lines(new);
    let n = old_lines.len();
    let m = new_lines.len();

    // table[i][j] = LCS length of old[0..i) and new[0..j).
    let mut table = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            table[i][j] = if old_lines[i - 1] == new_lines[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }

    // Backtrack from (n, m). Entries come out newest-first and are reversed
    // at the end to restore document order.
    let mut script: Vec<DiffEntry> = Vec::with_capacity(n.max(m));
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old_lines[i - 1] == new_lines[j - 1] {
            script.push(DiffEntry::common(old_lines[i - 1]));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table[i][j - 1] >= table[i - 1][j]) {
            script.push(DiffEntry::added(new_lines[j - 1]));
            j -= 1;
        } else {
            // i > 0 here: j == 0, or the new-side branch lost the tie-break.
            script.push(DiffEntry::removed(old_lines[i - 1]));
            i -= 1;
        }
    }
    script.reverse();
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Exponential reference LCS length. Cross-check for small inputs only.
    fn lcs_len_brute(a: &[&str], b: &[&str]) -> usize {
        if a.is_empty() || b.is_empty() {
            0
        } else if a[0] == b[0] {
            1 + lcs_len_brute(&a[1..], &b[1..])
        } else {
            lcs_len_brute(a, &b[1..]).max(lcs_len_brute(&a[1..], b))
        }
    }

    fn common_count(script: &[DiffEntry]) -> usize {
        script.iter().filter(|e| e.tag == DiffTag::Common).count()
    }

    /// Reconstructs the new document: keep Common and Added, skip Removed.
    fn reconstruct_new(script: &[DiffEntry]) -> String {
        script
            .iter()
            .filter(|e| e.tag != DiffTag::Removed)
            .map(|e| e.line.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Reconstructs the old document: keep Common and Removed, skip Added.
    fn reconstruct_old(script: &[DiffEntry]) -> String {
        script
            .iter()
            .filter(|e| e.tag != DiffTag::Added)
            .map(|e| e.line.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    // ── edge cases ──────────────────────────────────────────────────────────

    #[test]
    fn test_identical_documents_all_common() {
        let doc = "Experience\nBuilt a parser\nShipped it";
        let script = compute_diff(doc, doc);
        assert_eq!(script.len(), 3);
        assert!(script.iter().all(|e| e.tag == DiffTag::Common));
    }

    #[test]
    fn test_empty_old_all_added() {
        let script = compute_diff("", "hello");
        assert_eq!(script, vec![DiffEntry::added("hello")]);
    }

    #[test]
    fn test_empty_new_all_removed() {
        let script = compute_diff("line one\nline two", "");
        assert_eq!(
            script,
            vec![DiffEntry::removed("line one"), DiffEntry::removed("line two")]
        );
    }

    #[test]
    fn test_both_empty_yields_empty_script() {
        assert!(compute_diff("", "").is_empty());
    }

    #[test]
    fn test_empty_string_line_is_a_real_line() {
        // The blank separator line is removed; everything else is common.
        let script = compute_diff("a\n\nb", "a\nb");
        assert_eq!(
            script,
            vec![
                DiffEntry::common("a"),
                DiffEntry::removed(""),
                DiffEntry::common("b"),
            ]
        );
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        let script = compute_diff("a", "a\n");
        assert_eq!(script, vec![DiffEntry::common("a"), DiffEntry::added("")]);
    }

    // ── equality semantics ──────────────────────────────────────────────────

    #[test]
    fn test_line_equality_is_whitespace_sensitive() {
        let script = compute_diff("skills ", "skills");
        assert_eq!(common_count(&script), 0, "trailing space must not match");
    }

    #[test]
    fn test_line_equality_is_case_sensitive() {
        let script = compute_diff("Skills", "skills");
        assert_eq!(common_count(&script), 0);
    }

    // ── ordering and tie-break ──────────────────────────────────────────────

    #[test]
    fn test_single_line_replacement_order() {
        // Removed comes before Added for a replaced middle line.
        let script = compute_diff("A\nB\nC", "A\nX\nC");
        assert_eq!(
            script,
            vec![
                DiffEntry::common("A"),
                DiffEntry::removed("B"),
                DiffEntry::added("X"),
                DiffEntry::common("C"),
            ]
        );
    }

    #[test]
    fn test_script_preserves_new_document_line_order() {
        let script = compute_diff("one\ntwo", "two\nthree\nfour");
        let new_side: Vec<&str> = script
            .iter()
            .filter(|e| e.tag != DiffTag::Removed)
            .map(|e| e.line.as_str())
            .collect();
        assert_eq!(new_side, vec!["two", "three", "four"]);
    }

    // ── LCS optimality and round-trip ───────────────────────────────────────

    const PAIRS: &[(&str, &str)] = &[
        ("A\nB\nC", "A\nX\nC"),
        ("", "hello"),
        ("a\nb\nc\nd", "b\nd\ne"),
        ("x\ny\nz", "x\ny\nz"),
        ("summary\n\nskills\nrust", "summary\nskills\nrust\ngo"),
        ("a\na\nb", "b\na\na"),
        ("one\ntwo\nthree\n", "one\nthree"),
    ];

    #[test]
    fn test_common_count_matches_brute_force() {
        for (old, new) in PAIRS {
            let script = compute_diff(old, new);
            let old_lines: Vec<&str> = if old.is_empty() {
                vec![]
            } else {
                old.split('\n').collect()
            };
            let new_lines: Vec<&str> = if new.is_empty() {
                vec![]
            } else {
                new.split('\n').collect()
            };
            assert_eq!(
                common_count(&script),
                lcs_len_brute(&old_lines, &new_lines),
                "suboptimal edit script for {old:?} vs {new:?}"
            );
        }
    }

    #[test]
    fn test_round_trip_reconstructs_both_documents() {
        for (old, new) in PAIRS {
            let script = compute_diff(old, new);
            assert_eq!(
                reconstruct_new(&script),
                *new,
                "new-side round trip failed for {old:?} vs {new:?}"
            );
            assert_eq!(
                reconstruct_old(&script),
                *old,
                "old-side round trip failed for {old:?} vs {new:?}"
            );
        }
    }
}
