use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use super::{Error, Result};

pub const MEMORY_WARN: f64 = 80.0;
pub const MEMORY_CRITICAL: f64 = 90.0;
pub const CPU_WARN: f64 = 95.0;
pub const CPU_CRITICAL: f64 = 99.0;
pub const DATASTORE_WARN: f64 = 80.0;
pub const DATASTORE_CRITICAL: f64 = 90.0;
pub const METASTORE_WARN: f64 = 80.0;
pub const METASTORE_CRITICAL: f64 = 90.0;
pub const COMMAND_TIMEOUT_SECS: u64 = 10;

const CONFIG_MODE: u32 = 0o644;

/// Renders the commented default config file.
pub fn template() -> String {
    format!(
        "\
#
# DockerMon configuration file
# Customises the docker local check. If this file gets corrupted, delete it and a
# fresh copy with the defaults is generated on the next run.
#

# Debug - 0 off OR 1 on. Debug output goes to stderr.
Debug=0
# Report containers by name (docker ps --format) instead of by id.
ShowFriendlyNames=yes
# Report cpu and memory of every container in addition to the totals.
DisplayAllContainers=False
# Seconds to wait for each docker command.
CommandTimeout={COMMAND_TIMEOUT_SECS}

# Thresholds (percent)
checkmemwarn={MEMORY_WARN}
checkmemcritical={MEMORY_CRITICAL}
checkcpuwarn={CPU_WARN}
checkcpucritical={CPU_CRITICAL}
checkdatastorewarn={DATASTORE_WARN}
checkdatastorecritical={DATASTORE_CRITICAL}
checkmetastorewarn={METASTORE_WARN}
checkmetastorecritical={METASTORE_CRITICAL}


# Monitor containers
# List every container that must be running, by id or by name. One per line.
# Examples:
#monitor=1d1792684b10
#monitor=Mycontainer
"
    )
}

/// Writes the default config to `path`, creating the parent directory if needed.
///
/// # Errors
///
/// Returns [`Error::Write`] if the directory, the file or its permissions cannot be
/// written.
pub fn generate(path: &Path) -> Result<()> {
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, template()).map_err(write_err)?;
    fs::set_permissions(path, fs::Permissions::from_mode(CONFIG_MODE)).map_err(write_err)?;

    log::info!("generated default config at {}", path.display());
    Ok(())
}
