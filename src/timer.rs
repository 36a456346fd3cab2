use crate::models::{
    DEFAULT_HOURS, MAX_HOURS, MS_PER_HOUR, Record, TimerPhase, TimerState,
};

/// Countdown length for a configured number of hours.
pub fn duration_for_hours(hours: i64) -> i64 {
    let hours = if hours <= 0 { DEFAULT_HOURS } else { hours.min(MAX_HOURS) };
    hours * MS_PER_HOUR
}

pub fn phase(timer: &TimerState) -> TimerPhase {
    if timer.running {
        TimerPhase::Running
    } else if timer.elapsed_ms > 0 {
        TimerPhase::Paused
    } else {
        TimerPhase::Stopped
    }
}

/// Accumulated paused time plus the open interval, if running.
pub fn compute_elapsed(timer: &TimerState, now: i64) -> i64 {
    let base = timer.elapsed_ms.max(0);
    match (timer.running, timer.started_at) {
        (true, Some(started_at)) => base.saturating_add(open_interval(started_at, now)),
        _ => base,
    }
}

pub fn remaining(timer: &TimerState, now: i64) -> i64 {
    timer
        .duration_ms
        .saturating_sub(compute_elapsed(timer, now))
        .max(0)
}

/// Returns false when the timer was already running.
pub fn start(record: &mut Record, now: i64) -> bool {
    if record.timer.running {
        return false;
    }
    record.timer.duration_ms = duration_for_hours(record.hours);
    record.timer.started_at = Some(now);
    record.timer.running = true;
    true
}

/// Folds the open interval into `elapsed_ms`. Returns false when not running.
pub fn stop(record: &mut Record, now: i64) -> bool {
    let timer = &mut record.timer;
    if !timer.running {
        return false;
    }
    let since_start = timer
        .started_at
        .map_or(0, |started_at| open_interval(started_at, now));
    timer.elapsed_ms = timer.elapsed_ms.max(0).saturating_add(since_start);
    timer.started_at = None;
    timer.running = false;
    true
}

pub fn reset(record: &mut Record) {
    record.timer = TimerState {
        duration_ms: duration_for_hours(record.hours),
        running: false,
        started_at: None,
        elapsed_ms: 0,
        extra: std::mem::take(&mut record.timer.extra),
    };
}

// A start time ahead of `now` means the clock went backwards.
fn open_interval(started_at: i64, now: i64) -> i64 {
    now.saturating_sub(started_at).max(0)
}
