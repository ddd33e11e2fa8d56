//! One free daily draw per caller per UTC day.
//!
//! Grants are kept in a flat JSON object mapping caller id to the date of
//! their last daily draw. The file is read in full on every check and
//! rewritten in full on every confirm. Checking never writes; a grant is only
//! recorded by [`DailyGate::confirm`] once the reading is ready to send.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use chrono::{NaiveDate, Utc};

use crate::error::{TarotError, TarotResult};

/// Caller id to the `YYYY-MM-DD` stamp of their last daily draw.
///
/// Values are kept as raw JSON so entries this gate cannot interpret are
/// written back untouched on the next confirm.
type Grants = BTreeMap<String, serde_json::Value>;

fn stamp(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

fn claimed_on(grants: &Grants, caller: &str, day: NaiveDate) -> bool {
    grants
        .get(caller)
        .and_then(serde_json::Value::as_str)
        .is_some_and(|recorded| recorded == stamp(day))
}

/// Outcome of a daily gate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStatus {
    /// The caller may draw today.
    Granted,
    /// The caller already drew today.
    AlreadyClaimedToday,
}

/// The current calendar date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// File-backed record of daily grants.
#[derive(Debug)]
pub struct DailyGate {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl DailyGate {
    /// Use the grant file at `path`. The file is created on first confirm.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the grant file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether `caller` may take a daily draw on `today`.
    ///
    /// Does not record anything; call [`confirm`](Self::confirm) after the
    /// draw succeeded.
    pub fn check_and_consume(&self, caller: &str, today: NaiveDate) -> GateStatus {
        if claimed_on(&self.load(), caller, today) {
            GateStatus::AlreadyClaimedToday
        } else {
            GateStatus::Granted
        }
    }

    /// Record that `caller` received their daily draw on `today`.
    ///
    /// The check is repeated under a lock, so when two requests from the same
    /// caller both passed [`check_and_consume`](Self::check_and_consume) only
    /// the first to confirm succeeds; the other gets
    /// [`TarotError::AlreadyClaimed`]. The file is synced before returning.
    pub fn confirm(&self, caller: &str, today: NaiveDate) -> TarotResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut grants = self.load();
        if claimed_on(&grants, caller, today) {
            return Err(TarotError::AlreadyClaimed);
        }
        grants.insert(caller.to_string(), stamp(today).into());
        self.store(&grants)?;
        tracing::debug!(caller, %today, "recorded daily draw");
        Ok(())
    }

    /// Read all grants. Missing or unreadable storage counts as empty.
    fn load(&self) -> Grants {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Grants::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "cannot read daily draws, treating as empty");
                return Grants::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "corrupt daily draws, treating as empty");
            Grants::new()
        })
    }

    /// Replace the grant file with `grants`: write a sibling temp file, sync
    /// it, then rename over the original. The temp file is removed if any
    /// step fails.
    fn store(&self, grants: &Grants) -> TarotResult<()> {
        let json = serde_json::to_vec(grants).map_err(TarotError::GateEncode)?;
        let write_err = |source| TarotError::GateWrite {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(write_err)?;
        }
        let tmp = self.temp_path();
        let replaced = fs::File::create(&tmp)
            .and_then(|mut file| {
                file.write_all(&json)?;
                file.sync_all()
            })
            .and_then(|()| fs::rename(&tmp, &self.path));
        if let Err(e) = replaced {
            let _ = fs::remove_file(&tmp);
            return Err(write_err(e));
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}
