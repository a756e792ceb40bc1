use chrono::{DateTime, NaiveDateTime, Utc};
use validator::{Validate, ValidationErrors};

use super::{error, FormFields, INVALID_CHOICE, INVALID_DATETIME};
use crate::models::NewShow;

/// Formats accepted for `start_time`, tried in order. Naive values are UTC.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Format used to pre-fill the start time input.
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Default, Validate)]
pub struct ShowForm {
    #[validate(length(min = 1, message = "This field is required."))]
    pub artist_id: String,
    #[validate(length(min = 1, message = "This field is required."))]
    pub venue_id: String,
    #[validate(length(min = 1, message = "This field is required."))]
    pub start_time: String,
}

impl ShowForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            artist_id: fields.text("artist_id"),
            venue_id: fields.text("venue_id"),
            start_time: fields.text("start_time"),
        }
    }

    /// Blank form with the start time defaulted to `now`.
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            start_time: now.format(START_TIME_FORMAT).to_string(),
            ..Self::default()
        }
    }

    /// Validate against the ids currently offered in the artist and venue
    /// selects and convert into a booking.
    pub fn into_new_show(
        self,
        artist_ids: &[i32],
        venue_ids: &[i32],
    ) -> Result<NewShow, ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        let artist_id = parse_choice(&self.artist_id, artist_ids);
        if !self.artist_id.is_empty() && artist_id.is_none() {
            errors.add("artist_id", error("choice", INVALID_CHOICE));
        }

        let venue_id = parse_choice(&self.venue_id, venue_ids);
        if !self.venue_id.is_empty() && venue_id.is_none() {
            errors.add("venue_id", error("choice", INVALID_CHOICE));
        }

        let start_time = parse_start_time(&self.start_time);
        if !self.start_time.is_empty() && start_time.is_none() {
            errors.add("start_time", error("datetime", INVALID_DATETIME));
        }

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) if errors.errors().is_empty() => {
                Ok(NewShow {
                    artist_id,
                    venue_id,
                    start_time,
                })
            }
            _ => Err(errors),
        }
    }
}

fn parse_choice(value: &str, allowed: &[i32]) -> Option<i32> {
    value.parse::<i32>().ok().filter(|id| allowed.contains(id))
}

pub fn parse_start_time(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}
