//! GraphQL documents for every Travelbase partner API operation.
//!
//! - [`document`]: the document tree ([`Field`], [`Value`], [`Document`],
//!   [`Operation`]) and its rendering to GraphQL text
//! - [`queries`]: read operations with fixed selection sets
//! - [`mutations`]: write operations taking a single `input` variable
//!
//! Selection sets are fixed per operation. Optional arguments are left out of
//! the document when absent; they are never sent as `null`.

pub mod document;
pub mod mutations;
pub mod queries;

pub use document::{Document, Field, Operation, Selection, Value, VariableDefinition, DATE_FORMAT};
pub use queries::{BookingFilter, DEFAULT_LIMIT};
