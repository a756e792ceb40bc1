//! Submitted form handling.
//!
//! Handlers receive the urlencoded body as ordered key/value pairs so that
//! repeated keys (the `genres` multi-select) survive. Each form struct is
//! built from a [`FormFields`] and checked with `validator`.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

pub mod artist;
pub mod choices;
pub mod show;
pub mod venue;

pub use artist::ArtistForm;
pub use show::ShowForm;
pub use venue::VenueForm;

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_URL: &str = "Invalid URL.";
pub const INVALID_CHOICE: &str = "Not a valid choice.";
pub const INVALID_PHONE: &str = "Invalid phone number.";
pub const INVALID_DATETIME: &str = "Not a valid datetime value.";

/// Raw `application/x-www-form-urlencoded` pairs in submission order.
#[derive(Debug, Clone, Default)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// First value submitted under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Trimmed value, empty when the field was not submitted.
    pub fn text(&self, key: &str) -> String {
        self.get(key).map(str::trim).unwrap_or_default().to_string()
    }

    /// Trimmed value, `None` when missing or blank.
    pub fn optional(&self, key: &str) -> Option<String> {
        let value = self.text(key);
        (!value.is_empty()).then_some(value)
    }

    /// Every non-blank value submitted under `key`.
    pub fn all(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Checkbox semantics: unchecked boxes are not submitted at all.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).map(is_truthy).unwrap_or(false)
    }
}

pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "t" | "true" | "on" | "1"
    )
}

pub(crate) fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub(crate) fn validate_state(value: &str) -> Result<(), ValidationError> {
    // Blank values are reported by the length check.
    if value.is_empty() || choices::is_state(value) {
        Ok(())
    } else {
        Err(error("choice", INVALID_CHOICE))
    }
}

pub(crate) fn validate_genres(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().all(|genre| choices::is_genre(genre)) {
        Ok(())
    } else {
        Err(error("choice", INVALID_CHOICE))
    }
}

pub(crate) fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let allowed = |c: char| c.is_ascii_digit() || " +-.()".contains(c);
    if value.chars().any(|c| c.is_ascii_digit()) && value.chars().all(allowed) {
        Ok(())
    } else {
        Err(error("phone", INVALID_PHONE))
    }
}

/// Flatten validation errors into the single flash line shown to the user:
/// `Errors ['city This field is required.', 'genres Not a valid choice.']`.
/// Fields are sorted; several errors on one field are joined with `|`.
pub fn error_summary(errors: &ValidationErrors) -> String {
    let mut fields: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect::<Vec<_>>()
                .join("|");
            (field.to_string(), messages)
        })
        .collect();
    fields.sort();

    let items = fields
        .iter()
        .map(|(field, messages)| format!("'{} {}'", field, messages))
        .collect::<Vec<_>>()
        .join(", ");

    format!("Errors [{}]", items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        FormFields::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_repeated_keys_are_all_kept() {
        let form = fields(&[("genres", "Jazz"), ("name", "x"), ("genres", "Folk")]);
        assert_eq!(form.all("genres"), vec!["Jazz", "Folk"]);
        assert_eq!(form.get("genres"), Some("Jazz"));
    }

    #[test]
    fn test_optional_treats_blank_as_missing() {
        let form = fields(&[("phone", "   "), ("website_link", " https://a.b ")]);
        assert_eq!(form.optional("phone"), None);
        assert_eq!(form.optional("missing"), None);
        assert_eq!(form.optional("website_link").as_deref(), Some("https://a.b"));
    }

    #[test]
    fn test_flag_values() {
        for value in ["y", "Y", "true", "True", "t", "on", "1", "yes"] {
            assert!(fields(&[("seeking_talent", value)]).flag("seeking_talent"), "{value}");
        }
        for value in ["n", "false", "", "0"] {
            assert!(!fields(&[("seeking_talent", value)]).flag("seeking_talent"), "{value}");
        }
        assert!(!fields(&[]).flag("seeking_talent"));
    }

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone("123-123-1234").is_ok());
        assert!(validate_phone("+1 (415) 555.0100").is_ok());
        assert!(validate_phone("call me").is_err());
        assert!(validate_phone("---").is_err());
    }

    #[test]
    fn test_error_summary_is_sorted_and_joined() {
        let mut errors = ValidationErrors::new();
        errors.add("name", error("length", REQUIRED));
        errors.add("city", error("length", REQUIRED));
        errors.add("city", error("other", INVALID_CHOICE));

        assert_eq!(
            error_summary(&errors),
            "Errors ['city This field is required.|Not a valid choice.', \
             'name This field is required.']"
        );
    }
}
