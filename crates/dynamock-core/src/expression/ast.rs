//! Structured form of an update expression.

use std::fmt;

/// One of the four update-expression clause keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClauseKind {
    /// `ADD path value, ...`
    Add,
    /// `DELETE path value, ...`
    Delete,
    /// `REMOVE path, ...`
    Remove,
    /// `SET path = value, ...`
    Set,
}

impl ClauseKind {
    /// All clause kinds, in locator order.
    pub const ALL: [ClauseKind; 4] = [Self::Add, Self::Delete, Self::Remove, Self::Set];

    /// The keyword introducing this clause.
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Delete => "DELETE",
            Self::Remove => "REMOVE",
            Self::Set => "SET",
        }
    }
}

impl fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A single ADD action: `path value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddExpression {
    /// Target attribute path, as written.
    pub path: String,
    /// Value token (`:placeholder` or a bare word).
    pub value: String,
}

impl AddExpression {
    /// Create an ADD pair.
    #[must_use]
    pub fn new(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
        }
    }
}

/// Update expression broken into its four clause lists.
///
/// Lists keep source order. SET fragments are normalised to `path = value`
/// and all fragments have their whitespace collapsed, so two expressions
/// that differ only in spacing or clause order compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUpdateExpression {
    /// ADD pairs.
    pub add_expressions: Vec<AddExpression>,
    /// DELETE fragments (`path value`).
    pub delete_expressions: Vec<String>,
    /// REMOVE paths.
    pub remove_expressions: Vec<String>,
    /// SET fragments (`path = value`).
    pub set_expressions: Vec<String>,
}

impl ParsedUpdateExpression {
    /// Returns `true` when no clause produced anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.add_expressions.is_empty()
            && self.delete_expressions.is_empty()
            && self.remove_expressions.is_empty()
            && self.set_expressions.is_empty()
    }
}

/// Canonical rendering: clauses in SET, REMOVE, ADD, DELETE order.
impl fmt::Display for ParsedUpdateExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let adds: Vec<String> = self
            .add_expressions
            .iter()
            .map(|a| format!("{} {}", a.path, a.value))
            .collect();
        let clauses = [
            (ClauseKind::Set, &self.set_expressions),
            (ClauseKind::Remove, &self.remove_expressions),
            (ClauseKind::Add, &adds),
            (ClauseKind::Delete, &self.delete_expressions),
        ];

        let mut first = true;
        for (kind, items) in clauses {
            if items.is_empty() {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{kind} {}", items.join(", "))?;
        }
        Ok(())
    }
}
