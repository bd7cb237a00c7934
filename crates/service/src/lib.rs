//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses entity definitions in `models` crate.
//! - Not-found is a value (`Option`/`bool`), storage failures are `ServiceError`.

pub mod errors;
pub mod session;
pub mod product;
#[cfg(test)]
pub mod test_support;
