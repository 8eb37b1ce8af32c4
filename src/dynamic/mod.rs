//! Dynamic programming tracers
//!
//! - [`fibonacci`]: bottom-up table and top-down memoized recursion

pub mod fibonacci;
