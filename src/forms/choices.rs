//! Fixed option lists offered by the venue and artist forms.

use serde::Serialize;

pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// One `<option>` of a select element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>, selected: bool) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected,
        }
    }
}

pub fn state_choices(selected: &str) -> Vec<Choice> {
    STATES
        .iter()
        .map(|state| Choice::new(*state, *state, *state == selected))
        .collect()
}

pub fn genre_choices(selected: &[String]) -> Vec<Choice> {
    GENRES
        .iter()
        .map(|genre| Choice::new(*genre, *genre, selected.iter().any(|s| s == genre)))
        .collect()
}

/// Options for an id select, e.g. the artist and venue pickers of the show form.
pub fn id_choices(options: &[(i32, String)], selected: Option<i32>) -> Vec<Choice> {
    options
        .iter()
        .map(|(id, name)| Choice::new(id.to_string(), name.clone(), Some(*id) == selected))
        .collect()
}

pub fn is_state(value: &str) -> bool {
    STATES.contains(&value)
}

pub fn is_genre(value: &str) -> bool {
    GENRES.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_choices_mark_selection() {
        let choices = state_choices("CA");
        assert_eq!(choices.len(), STATES.len());
        assert_eq!(choices.iter().filter(|c| c.selected).count(), 1);
        assert!(choices.iter().any(|c| c.value == "CA" && c.selected));
    }

    #[test]
    fn test_genre_choices_mark_every_selected_genre() {
        let selected = vec!["Jazz".to_string(), "Folk".to_string()];
        let marked: Vec<_> = genre_choices(&selected)
            .into_iter()
            .filter(|c| c.selected)
            .map(|c| c.value)
            .collect();
        assert_eq!(marked, vec!["Folk".to_string(), "Jazz".to_string()]);
    }

    #[test]
    fn test_id_choices_render_ids_as_values() {
        let options = vec![(3, "Guns N Petals".to_string()), (7, "Matt Quevado".to_string())];
        let choices = id_choices(&options, Some(7));
        assert_eq!(choices[0], Choice::new("3", "Guns N Petals", false));
        assert!(choices[1].selected);
    }

    #[test]
    fn test_membership() {
        assert!(is_state("NY"));
        assert!(!is_state("ny"));
        assert!(is_genre("R&B"));
        assert!(!is_genre("Polka"));
    }
}
