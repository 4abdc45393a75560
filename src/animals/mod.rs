//! # Animal Records
//!
//! The record store and the pure functions that operate on it:
//! query filtering, lookup by id, validation and append-with-persist.

pub mod errors;
pub mod filter;
pub mod persistence;
pub mod record;
pub mod store;
pub mod validator;

pub use errors::{AnimalError, AnimalResult, ValidationError};
pub use filter::{
    filter_by_query, AnimalField, AnimalQuery, FilterExpr, FilterOperator, FilterSet, FilterValue,
};
pub use persistence::{JsonFileBackend, MemoryBackend, Persistence, WriteMode};
pub use record::{AnimalDocument, AnimalRecord};
pub use store::{find_by_id, AnimalStore};
pub use validator::{is_valid_animal, validate_animal};
