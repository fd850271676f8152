//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod build_catalog;
pub mod dispatch;

#[cfg(test)]
pub(crate) mod test_support;
