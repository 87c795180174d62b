//! Clock, duration and recurrence wording for the calendar views.

use crate::domain::model::RecurrenceFrequency;

/// `"45min"`, `"2h"`, `"1h30min"`; empty for zero or negative durations.
pub fn format_duration(minutes: i64) -> String {
    if minutes <= 0 {
        return String::new();
    }

    let hours = minutes / 60;
    let mins = minutes % 60;

    match (hours, mins) {
        (0, m) => format!("{m}min"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h{m}min"),
    }
}

/// Minutes since midnight for an `HH:MM` string; 0 when it cannot be read.
///
/// A missing or unreadable minutes part counts as 0 (`"09"` is 540).
pub fn time_to_minutes(time: &str) -> i64 {
    if time.trim().is_empty() {
        return 0;
    }

    let mut parts = time.split(':');
    let Some(hours) = parts.next().and_then(|h| h.trim().parse::<i64>().ok()) else {
        tracing::warn!("⏱️ could not parse time '{}'", time);
        return 0;
    };
    let minutes = parts
        .next()
        .and_then(|m| m.trim().parse::<i64>().ok())
        .unwrap_or(0);

    match hours.checked_mul(60).and_then(|h| h.checked_add(minutes)) {
        Some(total) => total,
        None => {
            tracing::warn!("⏱️ time '{}' is out of range", time);
            0
        }
    }
}

pub fn minutes_to_time(minutes: i64) -> String {
    if minutes < 0 {
        tracing::warn!("⏱️ negative minute count {}", minutes);
        return "00:00".to_string();
    }
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Length of a slot in minutes, never negative.
pub fn duration_between(start: &str, end: &str) -> i64 {
    if start.is_empty() || end.is_empty() {
        return 0;
    }
    time_to_minutes(end)
        .saturating_sub(time_to_minutes(start))
        .max(0)
}

pub fn recurrence_interval_text(frequency: &str, interval: u32) -> String {
    match frequency.parse::<RecurrenceFrequency>() {
        Ok(RecurrenceFrequency::Daily) => format!("Tous les {interval} jour(s)"),
        Ok(RecurrenceFrequency::Weekly) => format!("Toutes les {interval} semaine(s)"),
        Ok(RecurrenceFrequency::Monthly) => format!("Tous les {interval} mois"),
        Err(_) => String::new(),
    }
}

pub fn is_valid_recurrence(frequency: &str, interval: u32) -> bool {
    frequency.parse::<RecurrenceFrequency>().is_ok() && interval > 0
}
