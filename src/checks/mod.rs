//! The individual checks.
//!
//! Each check is a pure function from already collected data to one or more
//! [`CheckResult`](crate::report::CheckResult)s, so none of them touches the
//! filesystem or the docker CLI directly.
mod count;
mod daemon;
mod metrics;
mod presence;
mod storage;

pub use count::running_containers;
pub use daemon::daemon_service;
pub use metrics::{Totals, container_metrics};
pub use presence::watched_containers;
pub use storage::storage_pools;
