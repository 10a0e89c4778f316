//! DynamoDB `UpdateItem` model types for Dynamock.
//!
//! These mirror the shapes the DynamoDB JSON protocol uses for `UpdateItem`
//! so that expectations and intercepted calls can be expressed with the same
//! types a real client would send. Only the types the mock needs are here.
// "DynamoDB" appears in virtually every doc comment in this crate.
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]

pub mod attribute_value;
pub mod input;
pub mod output;
pub mod types;

pub use attribute_value::AttributeValue;
pub use input::UpdateItemInput;
pub use output::UpdateItemOutput;
pub use types::{AttributeAction, AttributeValueUpdate};
