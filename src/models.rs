use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_TARGET: i64 = 100_000;
pub const DEFAULT_HOURS: i64 = 12;
pub const MIN_HOURS: i64 = 1;
pub const MAX_HOURS: i64 = 72;
pub const HISTORY_LIMIT: usize = 1200;
pub const MS_PER_HOUR: i64 = 60 * 60 * 1000;

/// One applied delta together with the running total it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Epoch milliseconds.
    pub t: i64,
    pub delta: i64,
    pub after: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    pub duration_ms: i64,
    pub running: bool,
    pub started_at: Option<i64>,
    /// Time accumulated by completed run intervals. The open interval of a
    /// running timer is never folded in here until `stop`.
    pub elapsed_ms: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_HOURS * MS_PER_HOUR,
            running: false,
            started_at: None,
            elapsed_ms: 0,
            extra: Map::new(),
        }
    }
}

/// The whole persisted state: settings, score, history and timer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub target: i64,
    pub hours: i64,
    pub total: i64,
    pub history: Vec<Entry>,
    pub timer: TimerState,
    /// Fields written by other versions; carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            hours: DEFAULT_HOURS,
            total: 0,
            history: Vec::new(),
            timer: TimerState::default(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SettingsRequest {
    #[serde(default)]
    pub target: Option<Value>,
    #[serde(default)]
    pub hours: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct DeltaRequest {
    #[serde(default)]
    pub delta: Value,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub action: String,
    #[serde(default)]
    pub amount: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    Stopped,
    Paused,
    Running,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerView {
    pub phase: TimerPhase,
    pub duration_ms: i64,
    pub elapsed_ms: i64,
    pub remaining_ms: i64,
    pub display: String,
    pub ends_at_ms: Option<i64>,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryItem {
    pub t: i64,
    pub delta: i64,
    pub after: i64,
    pub label: String,
    pub after_label: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub target: i64,
    pub hours: i64,
    pub total: i64,
    pub points_remaining: i64,
    pub percent: f64,
    pub target_reached: bool,
    pub status: String,
    pub history_len: usize,
    pub recent: Vec<HistoryItem>,
    pub timer: TimerView,
}
