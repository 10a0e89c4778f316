//! Per-clause parsers and the assembler that runs the whole pipeline.
//!
//! Parsing never fails: text that does not fit a clause's shape simply
//! produces nothing for that clause.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::ast::{AddExpression, ClauseKind, ParsedUpdateExpression};
use super::locator::{extract_clauses, locate_clauses};
use crate::config::ClauseScan;

/// Whole ADD clause: one or more `path value` pairs, commas optional.
///
/// Whitespace is the ASCII set `[\t\n\f\r ]`; a no-break space is part of
/// a token.
static ADD_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"ADD[\t\n\f\r ]+(([^\t\n\f\r ]+[\t\n\f\r ]+[0-9A-Za-z_:]+[\t\n\f\r ]*,?[\t\n\f\r ]*)+)")
        .expect("ADD clause pattern is valid")
});

/// A single `path value` pair inside the ADD clause body.
static ADD_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^\t\n\f\r ]+)[\t\n\f\r ]+([0-9A-Za-z_:]+)[\t\n\f\r ]*,?[\t\n\f\r ]*")
        .expect("ADD pair pattern is valid")
});

/// Parse an update expression with the default substring keyword scan.
#[must_use]
pub fn parse_update_expression(expression: &str) -> ParsedUpdateExpression {
    parse_update_expression_with(expression, ClauseScan::Substring)
}

/// Parse an update expression with the given keyword scan.
#[must_use]
pub fn parse_update_expression_with(expression: &str, scan: ClauseScan) -> ParsedUpdateExpression {
    let located = locate_clauses(expression, scan);
    let mut result = ParsedUpdateExpression::default();

    for clause in extract_clauses(expression, &located) {
        match clause.kind {
            ClauseKind::Add => result.add_expressions = extract_add_pairs(clause.text),
            ClauseKind::Set => {
                result.set_expressions = split_fragments(clause.text, ClauseKind::Set)
                    .into_iter()
                    .map(|f| normalize_set_action(&f))
                    .collect();
            }
            ClauseKind::Remove => {
                result.remove_expressions = split_fragments(clause.text, ClauseKind::Remove);
            }
            ClauseKind::Delete => {
                result.delete_expressions = split_fragments(clause.text, ClauseKind::Delete);
            }
        }
    }

    trace!(expression, parsed = %result, "parsed update expression");
    result
}

/// Extract the ordered `path value` pairs of an ADD clause.
///
/// Returns an empty list when the clause has no well-formed pair.
#[must_use]
pub fn extract_add_pairs(clause: &str) -> Vec<AddExpression> {
    let Some(body) = ADD_CLAUSE.captures(clause).and_then(|c| c.get(1)) else {
        return Vec::new();
    };

    ADD_PAIR
        .captures_iter(body.as_str())
        .map(|pair| AddExpression::new(&pair[1], &pair[2]))
        .collect()
}

/// Whether parsing `expression` accounts for all of its text.
///
/// False when there is text before the first clause, when a clause keyword
/// has no body, when the ADD pairs do not cover the whole ADD clause, or when
/// a SET action is not of the form `path = value`. The default substring
/// scan makes `SET ADDENDUM = :v` incomplete: `SET` is left without a body
/// and `ADDENDUM = :v` is not an ADD clause.
#[must_use]
pub fn parses_completely(expression: &str, scan: ClauseScan) -> bool {
    let clauses = extract_clauses(expression, &locate_clauses(expression, scan));
    let Some(first) = clauses.first() else {
        return expression.trim_matches(is_clause_space).is_empty();
    };
    if !expression[..first.offset].trim_matches(is_clause_space).is_empty() {
        return false;
    }

    clauses.iter().all(|clause| {
        let body = &clause.text[clause.kind.keyword().len()..];
        if !body.starts_with(is_clause_space) || body.trim_matches(is_clause_space).is_empty() {
            return false;
        }
        match clause.kind {
            ClauseKind::Add => add_pairs_cover(body.trim_start_matches(is_clause_space)),
            ClauseKind::Set => split_fragments(clause.text, ClauseKind::Set)
                .iter()
                .all(|f| f.split_once('=').is_some_and(|(path, value)| {
                    !path.trim().is_empty() && !value.trim().is_empty()
                })),
            ClauseKind::Remove | ClauseKind::Delete => true,
        }
    })
}

/// Whether consecutive ADD pairs tile `body` from start to end.
fn add_pairs_cover(body: &str) -> bool {
    let mut cursor = 0;
    for pair in ADD_PAIR.find_iter(body) {
        if pair.start() != cursor {
            return false;
        }
        cursor = pair.end();
    }
    cursor > 0 && cursor == body.len()
}

fn is_clause_space(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\x0C' | '\r' | ' ')
}

/// Strip the keyword and split the clause body on top-level commas.
///
/// Commas inside parentheses (`list_append(a, :b)`) do not split. Fragments
/// have their whitespace collapsed and empty ones are dropped.
fn split_fragments(clause: &str, kind: ClauseKind) -> Vec<String> {
    let body = clause.strip_prefix(kind.keyword()).unwrap_or(clause);

    let mut fragments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in body.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                fragments.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    fragments.push(&body[start..]);

    fragments
        .into_iter()
        .map(collapse_whitespace)
        .filter(|f| !f.is_empty())
        .collect()
}

/// Rewrite `path=value` with any spacing as `path = value`.
fn normalize_set_action(fragment: &str) -> String {
    match fragment.split_once('=') {
        Some((path, value)) => format!(
            "{} = {}",
            collapse_whitespace(path),
            collapse_whitespace(value)
        ),
        None => collapse_whitespace(fragment),
    }
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalise a single SET action the way the parser stores it, accepting an
/// optional leading `SET` keyword.
pub(crate) fn normalize_set_fragment(fragment: &str) -> String {
    let trimmed = fragment.trim_start();
    let body = trimmed
        .strip_prefix(ClauseKind::Set.keyword())
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .unwrap_or(trimmed);
    normalize_set_action(body)
}
