//! Randomized, internally consistent outlet records.
//!
//! [`assemble`] builds a single record from a caller-supplied random source;
//! [`generate_outlets`] fans a batch out across blocking tokio tasks.

pub mod assembler;
pub mod batch;
pub mod builders;
pub mod count;
pub mod error;
pub mod fields;
pub mod vocab;

pub use assembler::assemble;
pub use batch::{generate_outlets, task_seed, BatchRequest};
pub use count::randomize_count;
pub use error::GenerateError;
