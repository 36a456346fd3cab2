use crate::errors::{AppError, LoadError};
use crate::models::Record;
use crate::{score, timer};
use serde_json::{Map, Value};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{fs, sync::Mutex};
use tracing::{debug, error, info, warn};

/// The single persisted slot. Every operation re-reads the record from disk,
/// applies one change and writes it back while holding the slot lock, so no
/// two operations interleave.
#[derive(Clone)]
pub struct Store {
    path: PathBuf,
    slot: Arc<Mutex<()>>,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            slot: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Record {
        let _slot = self.slot.lock().await;
        load_record(&self.path).await
    }

    pub async fn save(&self, record: &Record) -> Result<(), AppError> {
        let _slot = self.slot.lock().await;
        persist_record(&self.path, record).await
    }

    pub async fn add_delta(&self, delta: i64, now: i64) -> Result<Record, AppError> {
        self.apply("add_delta", |record| score::add_delta(record, delta, now))
            .await
    }

    pub async fn undo(&self) -> Result<Record, AppError> {
        self.apply("undo", score::undo).await
    }

    pub async fn reset_score(&self) -> Result<Record, AppError> {
        self.apply("reset_score", |record| {
            score::reset_score(record);
            true
        })
        .await
    }

    /// A `None` keeps the stored value for that setting.
    pub async fn apply_settings(
        &self,
        target: Option<i64>,
        hours: Option<i64>,
    ) -> Result<Record, AppError> {
        self.apply("apply_settings", |record| {
            let target = target.unwrap_or(record.target);
            let hours = hours.unwrap_or(record.hours);
            score::apply_settings(record, target, hours);
            true
        })
        .await
    }

    pub async fn start_timer(&self, now: i64) -> Result<Record, AppError> {
        self.apply("start_timer", |record| timer::start(record, now))
            .await
    }

    pub async fn stop_timer(&self, now: i64) -> Result<Record, AppError> {
        self.apply("stop_timer", |record| timer::stop(record, now))
            .await
    }

    pub async fn reset_timer(&self) -> Result<Record, AppError> {
        self.apply("reset_timer", |record| {
            timer::reset(record);
            true
        })
        .await
    }

    /// Deletes the stored record; the next load starts from defaults.
    pub async fn wipe_all(&self) -> Result<Record, AppError> {
        let _slot = self.slot.lock().await;
        remove_record(&self.path).await?;
        info!(path = %self.path.display(), "record wiped");
        Ok(Record::default())
    }

    async fn apply<F>(&self, op: &'static str, mutate: F) -> Result<Record, AppError>
    where
        F: FnOnce(&mut Record) -> bool,
    {
        let _slot = self.slot.lock().await;
        let mut record = load_record(&self.path).await;

        if !mutate(&mut record) {
            debug!(op, "no-op");
            return Ok(record);
        }

        if let Err(err) = persist_record(&self.path, &record).await {
            error!(op, "failed to persist record: {}", err.message);
            return Err(err);
        }
        info!(op, total = record.total, running = record.timer.running, "record updated");
        Ok(record)
    }
}

pub async fn load_record(path: &Path) -> Record {
    match try_load_record(path).await {
        Ok(record) => record,
        Err(LoadError::Missing) => Record::default(),
        Err(err) => {
            warn!(path = %path.display(), "{err}; using defaults");
            Record::default()
        }
    }
}

pub async fn try_load_record(path: &Path) -> Result<Record, LoadError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Err(LoadError::Missing),
        Err(err) => return Err(err.into()),
    };
    merge_record(&bytes)
}

/// Overlays a stored record onto the defaults: top-level fields first, then
/// the timer's own fields, so records written by older or newer versions
/// still load. Stored nulls count as absent.
pub fn merge_record(bytes: &[u8]) -> Result<Record, LoadError> {
    let Value::Object(stored) = serde_json::from_slice::<Value>(bytes)? else {
        return Err(LoadError::Shape);
    };

    let mut merged = object_of(&Record::default())?;
    let mut timer = match merged.remove("timer") {
        Some(Value::Object(fields)) => fields,
        _ => Map::new(),
    };

    for (key, value) in stored {
        if value.is_null() {
            continue;
        }
        if key == "timer" {
            if let Value::Object(fields) = value {
                timer.extend(fields.into_iter().filter(|(_, v)| !v.is_null()));
            }
            continue;
        }
        merged.insert(key, value);
    }
    merged.insert("timer".to_string(), Value::Object(timer));

    let mut record: Record = serde_json::from_value(Value::Object(merged))?;
    // The running total is never negative.
    record.total = record.total.max(0);
    Ok(record)
}

/// Writes the full record to a sibling temp file and renames it into place.
pub async fn persist_record(path: &Path, record: &Record) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(record).map_err(AppError::internal)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let tmp = temp_path(path);
    fs::write(&tmp, payload).await?;
    if let Err(err) = fs::rename(&tmp, path).await {
        if let Err(cleanup) = fs::remove_file(&tmp).await {
            warn!(path = %tmp.display(), "failed to remove temp file: {cleanup}");
        }
        return Err(err.into());
    }
    Ok(())
}

pub async fn remove_record(path: &Path) -> Result<(), AppError> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}

fn object_of(record: &Record) -> Result<Map<String, Value>, LoadError> {
    match serde_json::to_value(record)? {
        Value::Object(fields) => Ok(fields),
        _ => Err(LoadError::Shape),
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
