//! Domain layer: pure computations consumed by the HTTP host.
//! - `pagination`: page buttons and ellipsis markers for a pager.
//! - `steps`: per-step status of a step indicator.
//!
//! Nothing here performs I/O or keeps state between calls.

pub mod errors;
pub mod pagination;
pub mod steps;

pub use errors::{PaginationError, StepsError};
pub use pagination::{compute, PageEntry, PageRangeCalculator, PageRangeResult, PaginationState};
pub use steps::{derive_statuses, StepStatus};
