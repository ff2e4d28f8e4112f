use crate::availability::DaemonState;
use crate::report::{CheckResult, Status};

const CHECK_NAME: &str = "Docker_Service";

/// Reports daemon liveness with its uptime in seconds as perfdata.
pub fn daemon_service(state: &DaemonState) -> CheckResult {
    let (status, uptime, description) = match state {
        DaemonState::Running { uptime, .. } => {
            (Status::Ok, uptime.as_secs(), "Docker service is running")
        }
        DaemonState::NoPidFile => (Status::Crit, 0, "Service Down or No PID file found"),
        DaemonState::UnreadablePidFile { .. } => {
            (Status::Crit, 0, "Service Down - Problem reading pid file")
        }
        DaemonState::NotRunning { .. } => (Status::Crit, 0, "Docker service is not running"),
    };

    CheckResult::new(
        status,
        CHECK_NAME,
        format!("service_uptime={uptime}"),
        description,
    )
}
