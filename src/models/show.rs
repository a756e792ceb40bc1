use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Show {
    pub id: i32,
    pub start_time: DateTime<Utc>,
    pub artist_id: i32,
    pub venue_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

/// A row of the shows index, with both sides of the booking denormalized.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ShowListing {
    pub id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// A show as seen from a venue page.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VenueShow {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// A show as seen from an artist page.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ArtistShow {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

pub trait Scheduled {
    fn start_time(&self) -> DateTime<Utc>;
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

/// Shows split around a reference instant. A show is upcoming only when it
/// starts strictly after `now`; everything else is past.
#[derive(Debug, Clone, Serialize)]
pub struct ShowPartition<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T: Scheduled> ShowPartition<T> {
    pub fn split(shows: Vec<T>, now: DateTime<Utc>) -> Self {
        let (upcoming, past) = shows.into_iter().partition(|show| show.start_time() > now);
        Self { past, upcoming }
    }

    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }
}
