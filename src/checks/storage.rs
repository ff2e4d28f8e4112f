//! Thin pool usage of block device backed storage drivers (devicemapper).
//!
//! Thin pools are allocated lazily and can be over-provisioned, so running out of
//! data or metadata space takes every container down at once. Drivers such as
//! overlay2 do not report these fields and the check is skipped.

use crate::config::Config;
use crate::report::{CheckResult, Thresholds};
use crate::stats::info::{
    DATA_SPACE_AVAILABLE, DATA_SPACE_USED, METADATA_SPACE_AVAILABLE, METADATA_SPACE_USED,
};
use crate::stats::{InfoFields, StatParseError};

/// Used and available bytes of one pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pool {
    used: u64,
    available: u64,
}

impl Pool {
    fn read(
        info: &InfoFields,
        used: &str,
        available: &str,
    ) -> Result<Option<Self>, StatParseError> {
        let (Some(used), Some(available)) = (info.size(used)?, info.size(available)?) else {
            return Ok(None);
        };
        Ok(Some(Self { used, available }))
    }

    fn used_percent(&self) -> f64 {
        let capacity = self.used + self.available;
        if capacity == 0 {
            return 0.0;
        }
        100.0 / capacity as f64 * self.used as f64
    }
}

/// Reports data and metadata pool usage as one combined result.
///
/// Returns `None` if any of the four pool fields is absent or malformed.
pub fn storage_pools(info: &InfoFields, config: &Config) -> Option<CheckResult> {
    let pools = Pool::read(info, DATA_SPACE_USED, DATA_SPACE_AVAILABLE).and_then(|data| {
        Pool::read(info, METADATA_SPACE_USED, METADATA_SPACE_AVAILABLE).map(|meta| data.zip(meta))
    });

    let (data, meta) = match pools {
        Ok(Some(pools)) => pools,
        Ok(None) => {
            log::debug!("storage driver reports no thin pool usage, skipping Docker_DataStores");
            return None;
        }
        Err(err) => {
            log::warn!("cannot read thin pool usage: {err}");
            return None;
        }
    };

    let data_percent = data.used_percent();
    let meta_percent = meta.used_percent();
    let status = config
        .datastore
        .evaluate(data_percent)
        .max(config.metastore.evaluate(meta_percent));

    Some(CheckResult::new(
        status,
        "Docker_DataStores",
        format!(
            "{}|{}",
            perf("datastore", data_percent, &config.datastore),
            perf("metastore", meta_percent, &config.metastore)
        ),
        format!("Datastore is at {data_percent:.2}%, Metastore is at {meta_percent:.2}%"),
    ))
}

fn perf(label: &str, percent: f64, thresholds: &Thresholds) -> String {
    format!("{label}={percent:.2};{};0;100", thresholds.perf_levels())
}
