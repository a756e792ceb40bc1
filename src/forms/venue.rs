use validator::{Validate, ValidationErrors};

use super::FormFields;
use crate::models::{Venue, VenueInput};

#[derive(Debug, Clone, Default, Validate)]
pub struct VenueForm {
    #[validate(length(min = 1, message = "This field is required."))]
    pub name: String,
    #[validate(length(min = 1, message = "This field is required."))]
    pub city: String,
    #[validate(
        length(min = 1, message = "This field is required."),
        custom(function = "crate::forms::validate_state")
    )]
    pub state: String,
    #[validate(length(min = 1, message = "This field is required."))]
    pub address: String,
    #[validate(custom(function = "crate::forms::validate_phone"))]
    pub phone: Option<String>,
    #[validate(url(message = "Invalid URL."))]
    pub image_link: Option<String>,
    #[validate(
        length(min = 1, message = "This field is required."),
        custom(function = "crate::forms::validate_genres")
    )]
    pub genres: Vec<String>,
    #[validate(url(message = "Invalid URL."))]
    pub facebook_link: Option<String>,
    #[validate(url(message = "Invalid URL."))]
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state"),
            address: fields.text("address"),
            phone: fields.optional("phone"),
            image_link: fields.optional("image_link"),
            genres: fields.all("genres"),
            facebook_link: fields.optional("facebook_link"),
            website_link: fields.optional("website_link"),
            seeking_talent: fields.flag("seeking_talent"),
            seeking_description: fields.optional("seeking_description"),
        }
    }

    /// Pre-populate the edit form from a stored venue.
    pub fn from_venue(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone().unwrap_or_default(),
            state: venue.state.clone().unwrap_or_default(),
            address: venue.address.clone().unwrap_or_default(),
            phone: venue.phone.clone(),
            image_link: venue.image_link.clone(),
            genres: venue.genres.clone(),
            facebook_link: venue.facebook_link.clone(),
            website_link: venue.website.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone(),
        }
    }

    /// Validate and convert into the column set written to the store.
    pub fn into_input(self) -> Result<VenueInput, ValidationErrors> {
        self.validate()?;

        Ok(VenueInput {
            name: self.name,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website: self.website_link,
            genres: self.genres,
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description,
        })
    }
}
