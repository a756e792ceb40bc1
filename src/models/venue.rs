use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::show::{ShowPartition, VenueShow};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Every mutable venue column, as written by both create and edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenueInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// A venue row enriched with its upcoming show count. Used by the
/// directory listing and by search results.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub num_upcoming_shows: i64,
}

/// Venues sharing one `(city, state)` pair.
#[derive(Debug, Clone, Serialize)]
pub struct VenueArea {
    pub city: Option<String>,
    pub state: Option<String>,
    pub venues: Vec<VenueSummary>,
}

impl VenueArea {
    /// Group summaries by `(city, state)`, keeping areas in first-seen order.
    pub fn group(summaries: Vec<VenueSummary>) -> Vec<VenueArea> {
        let mut areas: Vec<VenueArea> = Vec::new();

        for summary in summaries {
            let existing = areas
                .iter_mut()
                .find(|area| area.city == summary.city && area.state == summary.state);

            match existing {
                Some(area) => area.venues.push(summary),
                None => areas.push(VenueArea {
                    city: summary.city.clone(),
                    state: summary.state.clone(),
                    venues: vec![summary],
                }),
            }
        }

        areas
    }

    pub fn label(&self) -> String {
        format!(
            "{}, {}",
            self.city.as_deref().unwrap_or(""),
            self.state.as_deref().unwrap_or("")
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    pub venue: Venue,
    pub shows: ShowPartition<VenueShow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: i32, city: &str, state: &str) -> VenueSummary {
        VenueSummary {
            id,
            name: format!("Venue {}", id),
            city: Some(city.to_string()),
            state: Some(state.to_string()),
            num_upcoming_shows: 0,
        }
    }

    #[test]
    fn test_group_collects_venues_per_area() {
        let areas = VenueArea::group(vec![
            summary(1, "San Francisco", "CA"),
            summary(2, "New York", "NY"),
            summary(3, "San Francisco", "CA"),
        ]);

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].city.as_deref(), Some("San Francisco"));
        assert_eq!(
            areas[0].venues.iter().map(|v| v.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(areas[1].venues.len(), 1);
    }

    #[test]
    fn test_same_city_in_different_states_is_two_areas() {
        let areas = VenueArea::group(vec![
            summary(1, "Portland", "OR"),
            summary(2, "Portland", "ME"),
        ]);

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[1].label(), "Portland, ME");
    }

    #[test]
    fn test_group_of_nothing_is_empty() {
        assert!(VenueArea::group(Vec::new()).is_empty());
    }
}
