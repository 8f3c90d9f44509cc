use crate::api::events::models::UpdateEvent;
use crate::utils::events::roster::{RosterDiff, RosterSnapshot};
use uuid::Uuid;

/// The edit form, fed either by hand (create) or from an existing event
/// (edit). `schedule` is composed out of the date and time fields.
#[derive(Debug, Default, Clone)]
pub struct EventForm {
    pub name: String,
    pub schedule: String,
    pub address: String,
    pub date: String,
    pub time: String,
}

impl EventForm {
    /// Splits a stored schedule into its date and time halves. Both `T` and
    /// a space are accepted as separators.
    pub fn split_schedule(schedule: &str) -> (String, String) {
        let sep = if schedule.contains('T') { 'T' } else { ' ' };
        let mut parts = schedule.splitn(2, sep);
        let date = parts.next().unwrap_or_default().to_string();
        let time: String = parts.next().unwrap_or_default().chars().take(5).collect();
        (date, time)
    }

    pub fn load_schedule(&mut self, schedule: &str) {
        self.schedule = schedule.to_string();
        let (date, time) = Self::split_schedule(schedule);
        self.date = date;
        self.time = time;
    }

    pub fn compose_schedule(&mut self) {
        self.schedule = format!("{} {}", self.date, self.time);
    }

    pub fn clear_schedule(&mut self) {
        self.schedule.clear();
        self.date.clear();
        self.time.clear();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn as_update(&self) -> UpdateEvent {
        UpdateEvent {
            name: Some(self.name.clone()),
            schedule: Some(self.schedule.clone()),
            address: Some(self.address.clone()),
        }
    }
}

/// Renders a schedule for listings as `DD-MM-YYYY HH:MM`, falling back to
/// the raw value when it does not look like a timestamp, and `-` when
/// there is none.
pub fn format_schedule(schedule: Option<&str>) -> String {
    let Some(s) = schedule.filter(|s| !s.is_empty()) else {
        return "-".to_string();
    };
    let (date, time) = EventForm::split_schedule(s);
    let mut ymd = date.splitn(3, '-');
    match (ymd.next(), ymd.next(), ymd.next()) {
        (Some(y), Some(m), Some(d)) if !y.is_empty() && !m.is_empty() && !d.is_empty() => {
            if time.is_empty() {
                format!("{d}-{m}-{y}")
            } else {
                format!("{d}-{m}-{y} {time}")
            }
        }
        _ => s.to_string(),
    }
}

/// Editing context captured when an event is opened for editing.
#[derive(Debug, Clone)]
pub struct EditSession {
    pub event_id: Uuid,
    pub original: RosterSnapshot,
}

/// Everything the confirmation step needs, captured once at submit time
/// and replayed verbatim on confirm.
#[derive(Debug, Clone)]
pub struct PendingUpdate {
    pub event_id: Uuid,
    pub data: UpdateEvent,
    pub diff: RosterDiff,
}

/// Outcome of a submit: the create path finishes immediately, the edit
/// path stops for confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    ConfirmationPending,
}
