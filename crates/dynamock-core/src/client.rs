//! The client-facing seam the code under test is written against.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use dynamock_model::{UpdateItemInput, UpdateItemOutput};

/// The `UpdateItem` surface of a DynamoDB client.
///
/// Production code takes `impl UpdateItemApi` (or a trait object) so tests
/// can substitute [`MockDynamoDB`](crate::MockDynamoDB).
pub trait UpdateItemApi {
    /// Error returned by a failed call.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Update an item.
    fn update_item(&self, input: &UpdateItemInput) -> Result<UpdateItemOutput, Self::Error>;

    /// Update an item, carrying a call context and per-call options.
    fn update_item_with_context(
        &self,
        ctx: &CallContext,
        input: &UpdateItemInput,
        options: &[CallOption],
    ) -> Result<UpdateItemOutput, Self::Error>;
}

impl<T: UpdateItemApi + ?Sized> UpdateItemApi for Arc<T> {
    type Error = T::Error;

    fn update_item(&self, input: &UpdateItemInput) -> Result<UpdateItemOutput, Self::Error> {
        (**self).update_item(input)
    }

    fn update_item_with_context(
        &self,
        ctx: &CallContext,
        input: &UpdateItemInput,
        options: &[CallOption],
    ) -> Result<UpdateItemOutput, Self::Error> {
        (**self).update_item_with_context(ctx, input, options)
    }
}

/// Per-call context: a request id and a cancellation flag.
///
/// Clones share the cancellation flag.
#[derive(Debug, Clone)]
pub struct CallContext {
    request_id: String,
    cancelled: Arc<AtomicBool>,
}

impl CallContext {
    /// Create a context with a fresh request id.
    #[must_use]
    pub fn new() -> Self {
        Self::with_request_id(uuid::Uuid::new_v4().to_string())
    }

    /// Create a context with the given request id.
    #[must_use]
    pub fn with_request_id(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The request id.
    #[must_use]
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Mark the context cancelled.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Whether [`cancel`](Self::cancel) was called on this context or a clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl Default for CallContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-call request option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOption {
    /// Extra request header.
    Header {
        /// Header name.
        name: String,
        /// Header value.
        value: String,
    },
    /// Maximum attempts including the first.
    MaxAttempts(u32),
    /// Free-form label, for logs.
    Label(String),
}
