//! Record schemas and output schema planning.

pub mod column;
pub mod planner;
#[allow(clippy::module_inception)]
pub mod schema;

pub use column::{Column, ColumnType};
pub use planner::{KeyFieldPlan, OutputPlan, SchemaPlanner};
pub use schema::{ColumnSpec, Schema};
