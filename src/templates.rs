//! Page templates. Sources live under `templates/` and are compiled into
//! the binary by askama; every page extends `layouts/main.html`, which
//! renders the pending flash messages.

use askama::Template;
use chrono::{DateTime, Utc};

use crate::forms::choices::Choice;
use crate::forms::{ArtistForm, ShowForm, VenueForm};
use crate::models::{ArtistDetail, ArtistSummary, ShowListing, VenueArea, VenueDetail, VenueSummary};

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub flashes: Vec<String>,
}

#[derive(Template)]
#[template(path = "pages/venues.html")]
pub struct VenuesTemplate {
    pub flashes: Vec<String>,
    pub areas: Vec<VenueArea>,
}

#[derive(Template)]
#[template(path = "pages/search_venues.html")]
pub struct VenueSearchTemplate {
    pub flashes: Vec<String>,
    pub search_term: String,
    pub count: usize,
    pub venues: Vec<VenueSummary>,
}

#[derive(Template)]
#[template(path = "pages/show_venue.html")]
pub struct VenueDetailTemplate {
    pub flashes: Vec<String>,
    pub detail: VenueDetail,
}

/// Shared by the create and edit venue pages.
#[derive(Template)]
#[template(path = "forms/venue.html")]
pub struct VenueFormTemplate {
    pub flashes: Vec<String>,
    pub heading: String,
    pub action: String,
    pub form: VenueForm,
    pub states: Vec<Choice>,
    pub genres: Vec<Choice>,
}

#[derive(Template)]
#[template(path = "pages/artists.html")]
pub struct ArtistsTemplate {
    pub flashes: Vec<String>,
    pub artists: Vec<ArtistSummary>,
}

#[derive(Template)]
#[template(path = "pages/search_artists.html")]
pub struct ArtistSearchTemplate {
    pub flashes: Vec<String>,
    pub search_term: String,
    pub count: usize,
    pub artists: Vec<ArtistSummary>,
}

#[derive(Template)]
#[template(path = "pages/show_artist.html")]
pub struct ArtistDetailTemplate {
    pub flashes: Vec<String>,
    pub detail: ArtistDetail,
}

#[derive(Template)]
#[template(path = "forms/artist.html")]
pub struct ArtistFormTemplate {
    pub flashes: Vec<String>,
    pub heading: String,
    pub action: String,
    pub form: ArtistForm,
    pub states: Vec<Choice>,
    pub genres: Vec<Choice>,
}

#[derive(Template)]
#[template(path = "pages/shows.html")]
pub struct ShowsTemplate {
    pub flashes: Vec<String>,
    pub shows: Vec<ShowListing>,
}

#[derive(Template)]
#[template(path = "forms/new_show.html")]
pub struct ShowFormTemplate {
    pub flashes: Vec<String>,
    pub form: ShowForm,
    pub artists: Vec<Choice>,
    pub venues: Vec<Choice>,
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundTemplate {
    pub flashes: Vec<String>,
}

#[derive(Template)]
#[template(path = "errors/500.html")]
pub struct ServerErrorTemplate {
    pub flashes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `Tuesday May, 21, 2019 at 9:30PM`
    Full,
    /// `Tue 05, 21, 2019 9:30PM`
    Medium,
}

pub fn format_datetime(value: &DateTime<Utc>, style: DateStyle) -> String {
    let pattern = match style {
        DateStyle::Full => "%A %B, %-d, %Y at %-I:%M%p",
        DateStyle::Medium => "%a %m, %d, %Y %-I:%M%p",
    };
    value.format(pattern).to_string()
}

mod filters {
    use std::borrow::Borrow;

    use chrono::{DateTime, Utc};

    use super::{format_datetime, DateStyle};

    pub fn datetime_full<T: Borrow<DateTime<Utc>>>(value: T) -> ::askama::Result<String> {
        Ok(format_datetime(value.borrow(), DateStyle::Full))
    }

    pub fn datetime_medium<T: Borrow<DateTime<Utc>>>(value: T) -> ::askama::Result<String> {
        Ok(format_datetime(value.borrow(), DateStyle::Medium))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_datetime_styles() {
        let value = Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap();
        assert_eq!(
            format_datetime(&value, DateStyle::Full),
            "Tuesday May, 21, 2019 at 9:30PM"
        );
        assert_eq!(
            format_datetime(&value, DateStyle::Medium),
            "Tue 05, 21, 2019 9:30PM"
        );
    }

    #[test]
    fn test_home_renders_flashes_escaped() {
        let page = HomeTemplate {
            flashes: vec!["Venue R&B Room was successfully listed!".to_string()],
        }
        .render()
        .unwrap();

        assert!(page.contains("Venue R&amp;B Room was successfully listed!"));
    }

    #[test]
    fn test_empty_venue_listing_renders() {
        let page = VenuesTemplate {
            flashes: Vec::new(),
            areas: Vec::new(),
        }
        .render()
        .unwrap();

        assert!(page.contains("No venues listed yet"));
    }
}
