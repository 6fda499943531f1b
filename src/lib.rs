//! # morph-filter
//!
//! A record-stream filter that tokenizes Japanese text columns with a
//! morphological analyzer and writes selected token attributes into derived
//! columns.
//!
//! ## Features
//!
//! - Two tokenizer backends over Lindera dictionaries
//! - Part-of-speech allow-lists
//! - Joined-string or JSON array output per extraction setting
//! - Deterministic output schema planning
//! - JSON Lines command line tool

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod observe;
pub mod record;
pub mod schema;

pub mod prelude {
    pub use crate::config::{ExtractionSetting, FilterConfig, Method, Mode, TokenizerKind};
    pub use crate::error::{FilterError, Result};
    pub use crate::filter::{FilterStream, MorphFilter};
    pub use crate::observe::{LogObserver, NoopObserver, StreamEvent, StreamObserver};
    pub use crate::record::{Page, Record, Value};
    pub use crate::schema::{Column, ColumnType, Schema};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
