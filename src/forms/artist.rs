use validator::{Validate, ValidationErrors};

use super::FormFields;
use crate::models::{Artist, ArtistInput};

#[derive(Debug, Clone, Default, Validate)]
pub struct ArtistForm {
    #[validate(length(min = 1, message = "This field is required."))]
    pub name: String,
    #[validate(length(min = 1, message = "This field is required."))]
    pub city: String,
    #[validate(
        length(min = 1, message = "This field is required."),
        custom(function = "crate::forms::validate_state")
    )]
    pub state: String,
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
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state"),
            phone: fields.optional("phone"),
            image_link: fields.optional("image_link"),
            genres: fields.all("genres"),
            facebook_link: fields.optional("facebook_link"),
            website_link: fields.optional("website_link"),
            seeking_venue: fields.flag("seeking_venue"),
            seeking_description: fields.optional("seeking_description"),
        }
    }

    pub fn from_artist(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone().unwrap_or_default(),
            state: artist.state.clone().unwrap_or_default(),
            phone: artist.phone.clone(),
            image_link: artist.image_link.clone(),
            genres: artist.genres.clone(),
            facebook_link: artist.facebook_link.clone(),
            website_link: artist.website.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone(),
        }
    }

    pub fn into_input(self) -> Result<ArtistInput, ValidationErrors> {
        self.validate()?;

        Ok(ArtistInput {
            name: self.name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website: self.website_link,
            genres: self.genres,
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description,
        })
    }
}
