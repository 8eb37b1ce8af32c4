//! Instrumented search algorithms
//!
//! - [`binary`]: interval halving over ascending input
//! - [`linear`]: left-to-right scan
//!
//! A missing target is not an error; both tracers close with `not_found`.

pub mod binary;
pub mod linear;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    Binary,
    Linear,
}
