use thiserror::Error;
use time::macros::format_description;
use time::{Date, Time};

use crate::utils::events::models::EventForm;

#[derive(Debug, Error)]
pub enum ValidateContentError {
    #[error("{0}")]
    Expected(String),
    #[error("Unexpected error")]
    Unexpected(#[from] anyhow::Error),
}

impl ValidateContentError {
    pub fn new(content: impl ToString) -> Self {
        Self::Expected(content.to_string())
    }
}

pub trait ValidateContent {
    fn validate_content(&self) -> Result<(), ValidateContentError>;
}

impl ValidateContent for EventForm {
    fn validate_content(&self) -> Result<(), ValidateContentError> {
        if self.name.trim().is_empty() {
            return Err(ValidateContentError::new("The event name is required"));
        }
        if self.schedule.is_empty() {
            return Err(ValidateContentError::new("Pick a schedule for the event"));
        }
        validate_schedule(&self.schedule)?;
        if self.address.is_empty() {
            return Err(ValidateContentError::new("Pick an address for the event"));
        }
        Ok(())
    }
}

/// A schedule is a `YYYY-MM-DD HH:MM` timestamp; `T` is accepted as the
/// separator as well.
fn validate_schedule(schedule: &str) -> Result<(), ValidateContentError> {
    let (date, time) = EventForm::split_schedule(schedule);
    Date::parse(&date, format_description!("[year]-[month]-[day]"))
        .map_err(|_| ValidateContentError::new("The schedule date is not valid"))?;
    Time::parse(&time, format_description!("[hour]:[minute]"))
        .map_err(|_| ValidateContentError::new("The schedule time is not valid"))?;
    Ok(())
}
