//! Dynamock: a test double for DynamoDB `UpdateItem`.
//!
//! A test registers expected calls on a [`DynaMock`] and hands the paired
//! [`MockDynamoDB`] to the code under test. Each intercepted call is checked
//! against the oldest pending expectation and answered with its canned
//! output, or with a [`MockError`] naming the first constraint that failed.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use dynamock_core::{UpdateItemApi, new};
//! use dynamock_model::{AttributeValue, UpdateItemInput, UpdateItemOutput};
//!
//! let (client, mock) = new();
//! mock.expect_update_item()
//!     .to_table("orders")
//!     .with_update_expression("ADD #c :one")
//!     .will_return(UpdateItemOutput::default());
//!
//! let input = UpdateItemInput {
//!     table_name: "orders".to_owned(),
//!     key: HashMap::from([("pk".to_owned(), AttributeValue::s("o-1"))]),
//!     update_expression: Some("ADD #c :one".to_owned()),
//!     ..Default::default()
//! };
//! assert!(client.update_item(&input).is_ok());
//! assert!(mock.expectations_were_met().is_ok());
//! ```
#![allow(clippy::doc_markdown, clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod expectation;
pub mod expression;
pub mod matcher;
pub mod mock;

pub use client::{CallContext, CallOption, UpdateItemApi};
pub use config::{ClauseScan, MismatchPolicy, MockConfig, UpdateExpressionMatch};
pub use error::{MatchField, MockError, MockOperation, MockResult};
pub use expectation::{ExpectedUpdateItem, UpdateItemExpectation};
pub use expression::{AddExpression, ClauseKind, ParsedUpdateExpression, parse_update_expression};
pub use mock::{DynaMock, MockDynamoDB};

/// Create a client/registration pair with the default configuration.
#[must_use]
pub fn new() -> (MockDynamoDB, DynaMock) {
    new_with_config(MockConfig::default())
}

/// Create a client/registration pair sharing one expectation queue.
#[must_use]
pub fn new_with_config(config: MockConfig) -> (MockDynamoDB, DynaMock) {
    mock::pair(config)
}
