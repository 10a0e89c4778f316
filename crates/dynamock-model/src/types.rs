//! Supporting DynamoDB types referenced by `UpdateItem` requests and responses.
//!
//! Structs use `#[serde(rename_all = "PascalCase")]`; enum variants map to the
//! `SCREAMING_SNAKE_CASE` wire names through `#[serde(rename)]`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::attribute_value::AttributeValue;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Action for one entry of the legacy `AttributeUpdates` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AttributeAction {
    /// Replace the attribute value.
    #[default]
    #[serde(rename = "PUT")]
    Put,
    /// Delete the attribute, or remove elements from a set.
    #[serde(rename = "DELETE")]
    Delete,
    /// Add to a number, or add elements to a set.
    #[serde(rename = "ADD")]
    Add,
}

impl AttributeAction {
    /// Returns the DynamoDB wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Add => "ADD",
        }
    }
}

impl std::fmt::Display for AttributeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which item image an `UpdateItem` call asks to get back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReturnValue {
    /// Nothing is returned.
    #[default]
    #[serde(rename = "NONE")]
    None,
    /// All attributes as they were before the update.
    #[serde(rename = "ALL_OLD")]
    AllOld,
    /// Only updated attributes, as they were before the update.
    #[serde(rename = "UPDATED_OLD")]
    UpdatedOld,
    /// All attributes as they are after the update.
    #[serde(rename = "ALL_NEW")]
    AllNew,
    /// Only updated attributes, as they are after the update.
    #[serde(rename = "UPDATED_NEW")]
    UpdatedNew,
}

/// Whether consumed capacity is reported back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReturnConsumedCapacity {
    /// Table and index breakdown.
    #[serde(rename = "INDEXES")]
    Indexes,
    /// Total only.
    #[serde(rename = "TOTAL")]
    Total,
    /// Not reported.
    #[default]
    #[serde(rename = "NONE")]
    None,
}

/// Whether item collection metrics are reported back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReturnItemCollectionMetrics {
    /// Report size estimates.
    #[serde(rename = "SIZE")]
    Size,
    /// Not reported.
    #[default]
    #[serde(rename = "NONE")]
    None,
}

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// One entry of the legacy `AttributeUpdates` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeValueUpdate {
    /// The value the action applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<AttributeValue>,
    /// The action to perform. DynamoDB treats a missing action as `PUT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<AttributeAction>,
}

impl AttributeValueUpdate {
    /// An update with both action and value present.
    #[must_use]
    pub fn new(action: AttributeAction, value: AttributeValue) -> Self {
        Self {
            value: Some(value),
            action: Some(action),
        }
    }
}

impl std::fmt::Display for AttributeValueUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.action, &self.value) {
            (Some(action), Some(value)) => write!(f, "{action} {value}"),
            (Some(action), None) => write!(f, "{action}"),
            (None, Some(value)) => write!(f, "{value}"),
            (None, None) => f.write_str("<empty>"),
        }
    }
}

/// Capacity units consumed on one table or index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Capacity {
    /// Read capacity units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_capacity_units: Option<f64>,
    /// Write capacity units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_capacity_units: Option<f64>,
    /// Read plus write.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_units: Option<f64>,
}

/// Capacity consumed by an operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConsumedCapacity {
    /// The table the capacity was consumed on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    /// Total capacity units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_units: Option<f64>,
    /// Total read capacity units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_capacity_units: Option<f64>,
    /// Total write capacity units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_capacity_units: Option<f64>,
    /// Capacity consumed by the base table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<Capacity>,
    /// Capacity consumed per local secondary index.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub local_secondary_indexes: HashMap<String, Capacity>,
    /// Capacity consumed per global secondary index.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub global_secondary_indexes: HashMap<String, Capacity>,
}

/// Size estimate for the item collection touched by a write.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemCollectionMetrics {
    /// Partition key of the collection.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub item_collection_key: HashMap<String, AttributeValue>,
    /// Lower and upper size bound in gigabytes.
    #[serde(
        rename = "SizeEstimateRangeGB",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub size_estimate_range_gb: Vec<f64>,
}
