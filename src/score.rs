use crate::models::{Entry, HISTORY_LIMIT, MAX_HOURS, MIN_HOURS, Record};
use crate::timer::duration_for_hours;

/// Applies `delta` to the running total, clamping at zero. The history entry
/// carries the delta that was actually applied, which differs from the
/// requested one when a subtraction hits the floor. Returns false for a zero
/// delta.
pub fn add_delta(record: &mut Record, delta: i64, now: i64) -> bool {
    if delta == 0 {
        return false;
    }

    let before = record.total;
    let after = before.saturating_add(delta).max(0);

    record.total = after;
    record.history.push(Entry {
        t: now,
        delta: after.saturating_sub(before),
        after,
    });

    if record.history.len() > HISTORY_LIMIT {
        let excess = record.history.len() - HISTORY_LIMIT;
        record.history.drain(..excess);
    }

    true
}

/// Pops the latest entry and trusts the `after` chain of what remains.
pub fn undo(record: &mut Record) -> bool {
    if record.history.pop().is_none() {
        return false;
    }
    record.total = record.history.last().map_or(0, |entry| entry.after);
    true
}

pub fn reset_score(record: &mut Record) {
    record.total = 0;
    record.history.clear();
}

/// Stores clamped settings. The timer length follows `hours` only while the
/// timer is not running.
pub fn apply_settings(record: &mut Record, target: i64, hours: i64) {
    record.target = target.max(1);
    record.hours = hours.clamp(MIN_HOURS, MAX_HOURS);

    if !record.timer.running {
        record.timer.duration_ms = duration_for_hours(record.hours);
    }
}
