//! Records, pages and their JSON Lines representation.

pub mod json;
#[allow(clippy::module_inception)]
pub mod record;
pub mod value;

pub use json::JsonRecordConverter;
pub use record::{Page, Record};
pub use value::Value;
