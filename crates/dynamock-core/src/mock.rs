//! The mock's shared state and its two handles.
//!
//! [`DynaMock`] is kept by the test to register expectations; [`MockDynamoDB`]
//! is handed to the code under test. Both point at the same queue.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use dynamock_model::{UpdateItemInput, UpdateItemOutput};

use crate::client::{CallContext, CallOption, UpdateItemApi};
use crate::config::{MismatchPolicy, MockConfig};
use crate::error::{MockError, MockOperation, MockResult};
use crate::expectation::{ExpectedUpdateItem, UpdateItemExpectation};
use crate::matcher;

/// State shared by both handles.
#[derive(Debug)]
struct MockState {
    config: MockConfig,
    /// Pending `UpdateItem` expectations, oldest first.
    update_item_expect: Mutex<VecDeque<ExpectedUpdateItem>>,
}

pub(crate) fn pair(config: MockConfig) -> (MockDynamoDB, DynaMock) {
    let state = Arc::new(MockState {
        config,
        update_item_expect: Mutex::new(VecDeque::new()),
    });
    (
        MockDynamoDB {
            state: Arc::clone(&state),
        },
        DynaMock { state },
    )
}

/// Registration handle for expectations.
#[derive(Debug, Clone)]
pub struct DynaMock {
    state: Arc<MockState>,
}

impl DynaMock {
    /// Start building an `UpdateItem` expectation.
    pub fn expect_update_item(&self) -> UpdateItemExpectation<'_> {
        UpdateItemExpectation::new(self)
    }

    pub(crate) fn push_update_item(&self, record: ExpectedUpdateItem) {
        let mut queue = self.state.update_item_expect.lock();
        debug!(
            table = record.table().unwrap_or("*"),
            constraints = record.constraint_count(),
            position = queue.len(),
            "registered update item expectation"
        );
        queue.push_back(record);
    }

    /// Number of expectations not yet consumed.
    #[must_use]
    pub fn pending_update_items(&self) -> usize {
        self.state.update_item_expect.lock().len()
    }

    /// Succeeds when every registered expectation has been consumed.
    pub fn expectations_were_met(&self) -> MockResult<()> {
        match self.pending_update_items() {
            0 => Ok(()),
            count => Err(MockError::UnconsumedExpectations { count }),
        }
    }

    /// Drop all pending expectations.
    pub fn reset(&self) {
        self.state.update_item_expect.lock().clear();
    }

    /// The configuration this mock was created with.
    #[must_use]
    pub fn config(&self) -> &MockConfig {
        &self.state.config
    }
}

/// Client handle implementing [`UpdateItemApi`].
#[derive(Debug, Clone)]
pub struct MockDynamoDB {
    state: Arc<MockState>,
}

impl MockDynamoDB {
    /// Match one call against the head of the queue.
    ///
    /// The head is taken off, checked, and on mismatch put back unless the
    /// policy is [`MismatchPolicy::Consume`]. All of it happens under one
    /// lock acquisition.
    fn intercept(
        &self,
        operation: MockOperation,
        input: &UpdateItemInput,
    ) -> MockResult<UpdateItemOutput> {
        let mut queue = self.state.update_item_expect.lock();

        let Some(head) = queue.pop_front() else {
            warn!(%operation, table = %input.table_name, "no update item expectation queued");
            return Err(MockError::ExpectationNotFound { operation });
        };

        match matcher::check(&head, input, &self.state.config) {
            Ok(()) => {
                debug!(
                    %operation,
                    table = %input.table_name,
                    remaining = queue.len(),
                    "update item matched expectation"
                );
                Ok(head.output)
            }
            Err(err) => {
                warn!(%operation, error = %err, "update item did not match expectation");
                if self.state.config.on_mismatch == MismatchPolicy::Retain {
                    queue.push_front(head);
                }
                Err(err)
            }
        }
    }
}

impl UpdateItemApi for MockDynamoDB {
    type Error = MockError;

    fn update_item(&self, input: &UpdateItemInput) -> Result<UpdateItemOutput, MockError> {
        self.intercept(MockOperation::UpdateItem, input)
    }

    fn update_item_with_context(
        &self,
        ctx: &CallContext,
        input: &UpdateItemInput,
        options: &[CallOption],
    ) -> Result<UpdateItemOutput, MockError> {
        debug!(
            request_id = ctx.request_id(),
            cancelled = ctx.is_cancelled(),
            options = options.len(),
            "intercepted update item with context"
        );
        self.intercept(MockOperation::UpdateItemWithContext, input)
    }
}
