//! Errors returned by the mock to the code under test.

use std::fmt;

/// Entry point a call arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockOperation {
    /// `update_item`.
    UpdateItem,
    /// `update_item_with_context`.
    UpdateItemWithContext,
}

impl fmt::Display for MockOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpdateItem => f.write_str("Update Item"),
            Self::UpdateItemWithContext => f.write_str("Update Item With Context"),
        }
    }
}

/// A constraint field of an `UpdateItem` expectation, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchField {
    /// `TableName`.
    Table,
    /// `Key`.
    Key,
    /// `AttributeUpdates`.
    AttributeUpdates,
    /// `ConditionExpression`.
    ConditionExpression,
    /// `ExpressionAttributeNames`.
    ExpressionAttributeNames,
    /// `ExpressionAttributeValues`.
    ExpressionAttributeValues,
    /// `UpdateExpression`.
    UpdateExpression,
    /// A single SET fragment of `UpdateExpression`.
    SetAttributeValueExpression,
}

impl MatchField {
    /// Human-readable field name used in mismatch messages.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Key => "key",
            Self::AttributeUpdates => "attribute updates",
            Self::ConditionExpression => "condition expression",
            Self::ExpressionAttributeNames => "expression attribute names",
            Self::ExpressionAttributeValues => "expression attribute values",
            Self::UpdateExpression => "update expression",
            Self::SetAttributeValueExpression => "set attribute value expression",
        }
    }
}

impl fmt::Display for MatchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced while matching a call against the expectation queue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MockError {
    /// The expected table name differs from the actual one.
    #[error("Expect table {expected} but found table {found}")]
    TableMismatch {
        /// Expected table name.
        expected: String,
        /// Actual table name.
        found: String,
    },

    /// A set constraint differs from the actual call.
    #[error("Expect {field} {expected} but found {field} {found}")]
    FieldMismatch {
        /// The field that failed.
        field: MatchField,
        /// Rendered expected value.
        expected: String,
        /// Rendered actual value.
        found: String,
    },

    /// The queue was empty when the call arrived.
    #[error("{operation} Expectation Not Found")]
    ExpectationNotFound {
        /// Entry point of the call.
        operation: MockOperation,
    },

    /// Registered expectations were never consumed.
    #[error("{count} update item expectation(s) were not met")]
    UnconsumedExpectations {
        /// Number still queued.
        count: usize,
    },
}

impl MockError {
    /// The constraint field this error reports, if it is a mismatch.
    #[must_use]
    pub fn field(&self) -> Option<MatchField> {
        match self {
            Self::TableMismatch { .. } => Some(MatchField::Table),
            Self::FieldMismatch { field, .. } => Some(*field),
            Self::ExpectationNotFound { .. } | Self::UnconsumedExpectations { .. } => None,
        }
    }

    /// Returns `true` for the empty-queue error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ExpectationNotFound { .. })
    }
}

/// Convenience result type for mock operations.
pub type MockResult<T> = Result<T, MockError>;
