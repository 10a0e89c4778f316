//! Constraint checks for `UpdateItem` calls.
//!
//! Fields are checked in a fixed order and the first violated constraint is
//! reported, even if later ones would fail too.

use std::collections::HashMap;
use std::fmt::Display;

use dynamock_model::UpdateItemInput;

use crate::config::{MockConfig, UpdateExpressionMatch};
use crate::error::{MatchField, MockError, MockResult};
use crate::expectation::ExpectedUpdateItem;
use crate::expression::{parse_update_expression_with, parses_completely};
use crate::expression::parser::normalize_set_fragment;

const ABSENT: &str = "<none>";

/// Check `actual` against every set constraint of `expected`.
pub fn check(
    expected: &ExpectedUpdateItem,
    actual: &UpdateItemInput,
    config: &MockConfig,
) -> MockResult<()> {
    if let Some(table) = &expected.table {
        if *table != actual.table_name {
            return Err(MockError::TableMismatch {
                expected: table.clone(),
                found: actual.table_name.clone(),
            });
        }
    }
    if let Some(key) = &expected.key {
        ensure_map(MatchField::Key, key, &actual.key)?;
    }
    if let Some(updates) = &expected.attribute_updates {
        ensure_map(MatchField::AttributeUpdates, updates, &actual.attribute_updates)?;
    }
    if let Some(condition) = &expected.condition_expression {
        ensure_string(
            MatchField::ConditionExpression,
            condition,
            actual.condition_expression.as_deref(),
        )?;
    }
    if let Some(names) = &expected.expression_attribute_names {
        ensure_map(
            MatchField::ExpressionAttributeNames,
            names,
            &actual.expression_attribute_names,
        )?;
    }
    if let Some(values) = &expected.expression_attribute_values {
        ensure_map(
            MatchField::ExpressionAttributeValues,
            values,
            &actual.expression_attribute_values,
        )?;
    }

    let actual_update = actual.update_expression.as_deref();
    match config.update_expression_match {
        UpdateExpressionMatch::Exact => {
            if let Some(update) = &expected.update_expression {
                ensure_string(MatchField::UpdateExpression, update, actual_update)?;
            }
        }
        UpdateExpressionMatch::Structural => {
            if let Some(update) = &expected.update_expression {
                ensure_same_structure(update, actual_update, config)?;
            }
            if let Some(fragment) = &expected.set_attribute_value_expression {
                ensure_set_action(fragment, actual_update, config)?;
            }
        }
    }

    Ok(())
}

/// String equality where an absent actual value never matches.
#[must_use]
pub fn strings_equal(expected: &str, actual: Option<&str>) -> bool {
    actual == Some(expected)
}

/// Unordered map equality: same key set, equal value per key.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn maps_equal<V: PartialEq>(
    expected: &HashMap<String, V>,
    actual: &HashMap<String, V>,
) -> bool {
    expected.len() == actual.len()
        && expected
            .iter()
            .all(|(name, value)| actual.get(name) == Some(value))
}

/// Render a map with its keys sorted.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn render_map<V: Display>(map: &HashMap<String, V>) -> String {
    let mut entries: Vec<(&String, &V)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    let body: Vec<String> = entries
        .into_iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect();
    format!("map[{}]", body.join(", "))
}

fn ensure_string(field: MatchField, expected: &str, actual: Option<&str>) -> MockResult<()> {
    if strings_equal(expected, actual) {
        return Ok(());
    }
    Err(MockError::FieldMismatch {
        field,
        expected: expected.to_owned(),
        found: actual.unwrap_or(ABSENT).to_owned(),
    })
}

fn ensure_map<V: PartialEq + Display>(
    field: MatchField,
    expected: &HashMap<String, V>,
    actual: &HashMap<String, V>,
) -> MockResult<()> {
    if maps_equal(expected, actual) {
        return Ok(());
    }
    Err(MockError::FieldMismatch {
        field,
        expected: render_map(expected),
        found: render_map(actual),
    })
}

/// Compare parsed clause lists. When either side has text the parser does
/// not account for, the raw strings must be equal instead.
fn ensure_same_structure(
    expected: &str,
    actual: Option<&str>,
    config: &MockConfig,
) -> MockResult<()> {
    let scan = config.clause_scan;
    let matches = actual.is_some_and(|actual| {
        if parses_completely(expected, scan) && parses_completely(actual, scan) {
            parse_update_expression_with(expected, scan)
                == parse_update_expression_with(actual, scan)
        } else {
            strings_equal(expected, Some(actual))
        }
    });
    if matches {
        return Ok(());
    }
    Err(MockError::FieldMismatch {
        field: MatchField::UpdateExpression,
        expected: expected.to_owned(),
        found: actual.unwrap_or(ABSENT).to_owned(),
    })
}

fn ensure_set_action(fragment: &str, actual: Option<&str>, config: &MockConfig) -> MockResult<()> {
    let wanted = normalize_set_fragment(fragment);
    let set_actions = actual
        .map(|actual| parse_update_expression_with(actual, config.clause_scan).set_expressions)
        .unwrap_or_default();
    if set_actions.contains(&wanted) {
        return Ok(());
    }
    Err(MockError::FieldMismatch {
        field: MatchField::SetAttributeValueExpression,
        expected: wanted,
        found: format!("[{}]", set_actions.join(", ")),
    })
}
