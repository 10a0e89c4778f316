//! Expectation records and the builder that queues them.

use std::collections::HashMap;

use dynamock_model::{AttributeValue, AttributeValueUpdate, UpdateItemOutput};

use crate::mock::DynaMock;

/// A queued `UpdateItem` expectation.
///
/// Every constraint is either unset (`None`, anything passes) or set, in
/// which case the actual call must be equal. `Some` of an empty map is a
/// real constraint: the call must carry an empty map too.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpectedUpdateItem {
    pub(crate) table: Option<String>,
    pub(crate) key: Option<HashMap<String, AttributeValue>>,
    pub(crate) attribute_updates: Option<HashMap<String, AttributeValueUpdate>>,
    pub(crate) condition_expression: Option<String>,
    pub(crate) expression_attribute_names: Option<HashMap<String, String>>,
    pub(crate) expression_attribute_values: Option<HashMap<String, AttributeValue>>,
    pub(crate) update_expression: Option<String>,
    pub(crate) set_attribute_value_expression: Option<String>,
    pub(crate) output: UpdateItemOutput,
}

impl ExpectedUpdateItem {
    /// Expected table name, if constrained.
    #[must_use]
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Expected update expression, if constrained.
    #[must_use]
    pub fn update_expression(&self) -> Option<&str> {
        self.update_expression.as_deref()
    }

    /// The output returned when this expectation matches.
    #[must_use]
    pub fn output(&self) -> &UpdateItemOutput {
        &self.output
    }

    /// Number of set constraints.
    #[must_use]
    pub fn constraint_count(&self) -> usize {
        [
            self.table.is_some(),
            self.key.is_some(),
            self.attribute_updates.is_some(),
            self.condition_expression.is_some(),
            self.expression_attribute_names.is_some(),
            self.expression_attribute_values.is_some(),
            self.update_expression.is_some(),
            self.set_attribute_value_expression.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

/// Builder returned by [`DynaMock::expect_update_item`].
///
/// Each method sets one constraint. Nothing is queued until
/// [`will_return`](Self::will_return) or [`register`](Self::register).
#[derive(Debug)]
#[must_use = "the expectation is only queued by `will_return` or `register`"]
pub struct UpdateItemExpectation<'m> {
    mock: &'m DynaMock,
    record: ExpectedUpdateItem,
}

impl<'m> UpdateItemExpectation<'m> {
    pub(crate) fn new(mock: &'m DynaMock) -> Self {
        Self {
            mock,
            record: ExpectedUpdateItem::default(),
        }
    }

    /// Expect this table name.
    pub fn to_table(mut self, table: impl Into<String>) -> Self {
        self.record.table = Some(table.into());
        self
    }

    /// Expect exactly this primary key.
    pub fn with_keys(mut self, keys: HashMap<String, AttributeValue>) -> Self {
        self.record.key = Some(keys);
        self
    }

    /// Expect exactly these legacy attribute updates.
    pub fn updates(mut self, updates: HashMap<String, AttributeValueUpdate>) -> Self {
        self.record.attribute_updates = Some(updates);
        self
    }

    /// Expect this condition expression.
    pub fn with_condition_expression(mut self, expression: impl Into<String>) -> Self {
        self.record.condition_expression = Some(expression.into());
        self
    }

    /// Expect exactly these expression attribute names.
    pub fn with_expression_attribute_names(mut self, names: HashMap<String, String>) -> Self {
        self.record.expression_attribute_names = Some(names);
        self
    }

    /// Expect exactly these expression attribute values.
    pub fn with_expression_attribute_values(
        mut self,
        values: HashMap<String, AttributeValue>,
    ) -> Self {
        self.record.expression_attribute_values = Some(values);
        self
    }

    /// Expect this update expression.
    pub fn with_update_expression(mut self, expression: impl Into<String>) -> Self {
        self.record.update_expression = Some(expression.into());
        self
    }

    /// Expect a SET action among the update expression's SET clause.
    ///
    /// Only checked when the mock compares update expressions structurally.
    pub fn with_set_attribute_value_expression(mut self, expression: impl Into<String>) -> Self {
        self.record.set_attribute_value_expression = Some(expression.into());
        self
    }

    /// Set the output and queue the expectation.
    pub fn will_return(mut self, output: UpdateItemOutput) {
        self.record.output = output;
        self.register();
    }

    /// Queue the expectation with an empty output.
    pub fn register(self) {
        self.mock.push_update_item(self.record);
    }
}
