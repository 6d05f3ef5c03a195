//! Form input hardening
//!
//! Raw form values arrive as strings. They are parsed and range-checked
//! here so the estimator only ever sees whole, non-negative counts and a
//! known deployment model.

pub mod types;
pub mod validate;

pub use types::{FormInput, InputLimits, RawForm};
pub use validate::{parse_count, validate_staffing};
