//! Check results and the line format understood by check_mk local checks.
//!
//! Every check produces one or more [`CheckResult`]s which are rendered as
//!
//! ```text
//! <status> <check_name> <perf_data> <description>
//! ```
//!
//! and written to standard output by a [`Reporter`].
mod result;
mod status;
mod thresholds;
mod writer;

pub use result::CheckResult;
pub use status::Status;
pub use thresholds::{ThresholdError, Thresholds};
pub use writer::Reporter;
