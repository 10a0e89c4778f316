//! End-to-end tests for dynamock.
//!
//! The tests drive [`OrderCounter`], a small service written against
//! [`UpdateItemApi`], the way an application would be tested with the mock.
//!
//! Run them with:
//! ```text
//! cargo test -p dynamock-integration
//! ```

use std::collections::HashMap;
use std::sync::Once;

use anyhow::Context;
use dynamock_core::{CallContext, CallOption, DynaMock, MockConfig, MockDynamoDB, UpdateItemApi};
use dynamock_model::{AttributeValue, UpdateItemInput};
use tracing::debug;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Create a mock pair with the default configuration.
#[must_use]
pub fn mock() -> (MockDynamoDB, DynaMock) {
    mock_with(MockConfig::default())
}

/// Create a mock pair with the given configuration.
#[must_use]
pub fn mock_with(config: MockConfig) -> (MockDynamoDB, DynaMock) {
    init_tracing();
    dynamock_core::new_with_config(config)
}

/// Primary key of an order item.
#[must_use]
pub fn order_key(order_id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([("pk".to_owned(), AttributeValue::s(format!("ORDER#{order_id}")))])
}

/// Sample application service: bumps counters and stamps status on orders.
#[derive(Debug)]
pub struct OrderCounter<C> {
    client: C,
    table: String,
}

impl<C: UpdateItemApi> OrderCounter<C> {
    /// Create a service bound to `table`.
    pub fn new(client: C, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    /// Add `by` to the order's view counter and return the new value.
    pub fn bump_views(&self, order_id: &str, by: i64) -> anyhow::Result<Option<String>> {
        let input = UpdateItemInput {
            table_name: self.table.clone(),
            key: order_key(order_id),
            update_expression: Some("ADD #views :by".to_owned()),
            expression_attribute_names: HashMap::from([("#views".to_owned(), "views".to_owned())]),
            expression_attribute_values: HashMap::from([(":by".to_owned(), AttributeValue::n(by))]),
            return_values: Some(dynamock_model::types::ReturnValue::UpdatedNew),
            ..Default::default()
        };
        let output = self
            .client
            .update_item(&input)
            .with_context(|| format!("failed to bump views of order {order_id}"))?;
        let views = output
            .attributes
            .get("views")
            .and_then(AttributeValue::as_n)
            .map(ToOwned::to_owned);
        debug!(order_id, ?views, "bumped views");
        Ok(views)
    }

    /// Set the order status, only when the order exists.
    pub fn set_status(&self, ctx: &CallContext, order_id: &str, status: &str) -> anyhow::Result<()> {
        let input = UpdateItemInput {
            table_name: self.table.clone(),
            key: order_key(order_id),
            update_expression: Some("SET #status = :status REMOVE pending_since".to_owned()),
            condition_expression: Some("attribute_exists(pk)".to_owned()),
            expression_attribute_names: HashMap::from([("#status".to_owned(), "status".to_owned())]),
            expression_attribute_values: HashMap::from([(
                ":status".to_owned(),
                AttributeValue::s(status),
            )]),
            ..Default::default()
        };
        let options = [
            CallOption::MaxAttempts(3),
            CallOption::Label("set-status".to_owned()),
        ];
        self.client
            .update_item_with_context(ctx, &input, &options)
            .with_context(|| format!("failed to set status of order {order_id}"))?;
        Ok(())
    }
}

mod test_config;
mod test_expression;
mod test_update_item;
