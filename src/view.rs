use crate::models::{HistoryItem, Record, Snapshot, TimerPhase, TimerState, TimerView};
use crate::timer;
use chrono::{Local, TimeZone};

pub const RECENT_LIMIT: usize = 20;

pub fn build_snapshot_at(record: &Record, now: i64) -> Snapshot {
    let target_reached = record.total >= record.target;
    let recent = record
        .history
        .iter()
        .rev()
        .take(RECENT_LIMIT)
        .map(|entry| HistoryItem {
            t: entry.t,
            delta: entry.delta,
            after: entry.after,
            label: signed_label(entry.delta),
            after_label: format_points(entry.after),
            time: local_label(entry.t, "%H:%M"),
        })
        .collect();

    Snapshot {
        target: record.target,
        hours: record.hours,
        total: record.total,
        points_remaining: record.target.saturating_sub(record.total).max(0),
        percent: percent(record.total, record.target),
        target_reached,
        status: if target_reached {
            "Target smashed ✅".to_string()
        } else {
            "Tracking…".to_string()
        },
        history_len: record.history.len(),
        recent,
        timer: build_timer_view(&record.timer, now),
    }
}

/// Read-only projection used by the fast display refresh.
pub fn build_timer_view(state: &TimerState, now: i64) -> TimerView {
    let phase = timer::phase(state);
    let remaining_ms = timer::remaining(state, now);
    let ends_at_ms = (phase == TimerPhase::Running).then(|| now.saturating_add(remaining_ms));

    let label = match ends_at_ms {
        Some(ends_at) => format!("Ends: {}", local_label(ends_at, "%a %H:%M")),
        None if phase == TimerPhase::Paused => "Paused".to_string(),
        None => "Timer not started".to_string(),
    };

    TimerView {
        phase,
        duration_ms: state.duration_ms,
        elapsed_ms: timer::compute_elapsed(state, now),
        remaining_ms,
        display: clock_label(remaining_ms),
        ends_at_ms,
        label,
    }
}

/// Whole points with `,` thousands separators; negatives show as 0.
pub fn format_points(value: i64) -> String {
    let digits = value.max(0).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn signed_label(delta: i64) -> String {
    let sign = if delta >= 0 { '+' } else { '−' };
    format!("{sign}{}", format_points(delta.saturating_abs()))
}

pub fn clock_label(ms: i64) -> String {
    let ms = ms.max(0);
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

fn percent(total: i64, target: i64) -> f64 {
    if target <= 0 {
        return 0.0;
    }
    let pct = (total as f64 / target as f64 * 100.0).clamp(0.0, 100.0);
    (pct * 10.0).round() / 10.0
}

fn local_label(epoch_ms: i64, pattern: &str) -> String {
    Local
        .timestamp_millis_opt(epoch_ms)
        .single()
        .map(|at| at.format(pattern).to_string())
        .unwrap_or_default()
}
