//! Clause keyword location and clause slicing.

use tracing::trace;

use super::ast::ClauseKind;
use crate::config::ClauseScan;

/// Where a clause keyword first occurs, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatedClause {
    /// The keyword searched for.
    pub kind: ClauseKind,
    /// Byte offset of the first accepted occurrence.
    pub offset: Option<usize>,
}

/// A clause sliced out of an update expression, keyword included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clause<'a> {
    /// Which clause this is.
    pub kind: ClauseKind,
    /// Byte offset of the keyword.
    pub offset: usize,
    /// Text from the keyword up to the next present keyword or the end.
    pub text: &'a str,
}

/// Find the first occurrence of every clause keyword.
///
/// With [`ClauseScan::Substring`] a keyword embedded in a longer token
/// (`ADDENDUM`) still counts. Keywords are matched case-sensitively.
#[must_use]
pub fn locate_clauses(expression: &str, scan: ClauseScan) -> [LocatedClause; 4] {
    ClauseKind::ALL.map(|kind| LocatedClause {
        kind,
        offset: find_keyword(expression, kind.keyword(), scan),
    })
}

/// Slice `expression` into clauses using the located offsets.
///
/// Absent keywords are dropped before neighbours are computed, so each clause
/// runs up to the next keyword that is actually present.
#[must_use]
pub fn extract_clauses<'a>(expression: &'a str, located: &[LocatedClause]) -> Vec<Clause<'a>> {
    let mut present: Vec<(usize, ClauseKind)> = located
        .iter()
        .filter_map(|l| l.offset.map(|offset| (offset, l.kind)))
        .collect();
    present.sort_unstable();

    let mut clauses = Vec::with_capacity(present.len());
    for (i, &(offset, kind)) in present.iter().enumerate() {
        let end = present.get(i + 1).map_or(expression.len(), |&(next, _)| next);
        let text = &expression[offset..end];
        trace!(%kind, offset, text, "located update expression clause");
        clauses.push(Clause { kind, offset, text });
    }
    clauses
}

fn find_keyword(haystack: &str, keyword: &str, scan: ClauseScan) -> Option<usize> {
    match scan {
        ClauseScan::Substring => haystack.find(keyword),
        ClauseScan::WordBoundary => {
            let bytes = haystack.as_bytes();
            haystack
                .match_indices(keyword)
                .map(|(start, _)| start)
                .find(|&start| {
                    let before = start.checked_sub(1).map(|i| bytes[i]);
                    let after = bytes.get(start + keyword.len()).copied();
                    !before.is_some_and(is_ident_byte) && !after.is_some_and(is_ident_byte)
                })
        }
    }
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
