use axum::extract::{Path, State};
use axum::response::Response;
use axum::Form;
use chrono::Utc;
use tracing::{error, info};

use crate::forms::choices::{genre_choices, state_choices};
use crate::forms::{error_summary, FormFields, VenueForm};
use crate::models::{ShowPartition, VenueArea, VenueDetail};
use crate::repositories::VenueRepo;
use crate::state::AppState;
use crate::templates::{VenueDetailTemplate, VenueFormTemplate, VenueSearchTemplate, VenuesTemplate};
use crate::utils::error::AppError;
use crate::utils::flash::Flashes;
use crate::utils::response::{page, redirect, redirect_with_flash, take_flashes};

/// Form value that confirms a delete submitted through `POST /venues/<id>`.
const DELETE_CONFIRMATION: &str = "DELETE";

pub async fn list_venues(
    State(state): State<AppState>,
    flashes: Flashes,
) -> Result<Response, AppError> {
    let summaries = VenueRepo::list_summaries(&state.pool, Utc::now()).await?;
    let (flashes, shown) = take_flashes(flashes);

    page(
        &VenuesTemplate {
            flashes,
            areas: VenueArea::group(summaries),
        },
        shown,
    )
}

pub async fn search_venues(
    State(state): State<AppState>,
    flashes: Flashes,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let fields = FormFields::new(pairs);
    let search_term = fields.get("search_term").unwrap_or_default().to_string();

    let venues = VenueRepo::search(&state.pool, &search_term, Utc::now()).await?;
    let (flashes, shown) = take_flashes(flashes);

    page(
        &VenueSearchTemplate {
            flashes,
            search_term,
            count: venues.len(),
            venues,
        },
        shown,
    )
}

pub async fn show_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<i32>,
    flashes: Flashes,
) -> Result<Response, AppError> {
    let venue = VenueRepo::find_by_id(&state.pool, venue_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue with id '{}' was not found", venue_id)))?;

    let shows = VenueRepo::list_shows(&state.pool, venue_id).await?;
    let detail = VenueDetail {
        venue,
        shows: ShowPartition::split(shows, Utc::now()),
    };
    let (flashes, shown) = take_flashes(flashes);

    page(&VenueDetailTemplate { flashes, detail }, shown)
}

pub async fn create_venue_form(flashes: Flashes) -> Result<Response, AppError> {
    let (flashes, shown) = take_flashes(flashes);

    page(
        &VenueFormTemplate {
            flashes,
            heading: "List a new venue".to_string(),
            action: "/venues/create".to_string(),
            form: VenueForm::default(),
            states: state_choices(""),
            genres: genre_choices(&[]),
        },
        shown,
    )
}

pub async fn create_venue(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let input = match VenueForm::from_fields(&FormFields::new(pairs)).into_input() {
        Ok(input) => input,
        Err(errors) => return redirect_with_flash("/venues", error_summary(&errors)),
    };

    match VenueRepo::create(&state.pool, &input).await {
        Ok(venue) => {
            info!(venue_id = venue.id, name = %venue.name, "Venue created");
            redirect_with_flash(
                "/venues",
                format!("Venue {} was successfully listed!", venue.name),
            )
        }
        Err(e) => {
            error!(error = ?e, name = %input.name, "Failed to create venue");
            redirect_with_flash(
                "/",
                format!("An error occurred. Venue {} could not be listed.", input.name),
            )
        }
    }
}

pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(venue_id): Path<i32>,
    flashes: Flashes,
) -> Result<Response, AppError> {
    let venue = VenueRepo::find_by_id(&state.pool, venue_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue with id '{}' was not found", venue_id)))?;

    let form = VenueForm::from_venue(&venue);
    let (flashes, shown) = take_flashes(flashes);

    page(
        &VenueFormTemplate {
            flashes,
            heading: format!("Edit venue {}", venue.name),
            action: format!("/venues/{}/edit", venue.id),
            states: state_choices(&form.state),
            genres: genre_choices(&form.genres),
            form,
        },
        shown,
    )
}

pub async fn edit_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<i32>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    if VenueRepo::find_by_id(&state.pool, venue_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Venue with id '{}' was not found",
            venue_id
        )));
    }

    let input = match VenueForm::from_fields(&FormFields::new(pairs)).into_input() {
        Ok(input) => input,
        Err(errors) => {
            return Ok(redirect_with_flash(
                &format!("/venues/{}/edit", venue_id),
                error_summary(&errors),
            ))
        }
    };

    let detail_url = format!("/venues/{}", venue_id);
    match VenueRepo::update(&state.pool, venue_id, &input).await {
        Ok(Some(venue)) => {
            info!(venue_id, name = %venue.name, "Venue updated");
            Ok(redirect_with_flash(
                &detail_url,
                format!("Venue {} was successfully updated!", venue.name),
            ))
        }
        Ok(None) => Err(AppError::NotFound(format!(
            "Venue with id '{}' was not found",
            venue_id
        ))),
        Err(e) => {
            error!(error = ?e, venue_id, "Failed to update venue");
            Ok(redirect_with_flash(
                &detail_url,
                format!("An error occurred. Venue {} could not be updated.", input.name),
            ))
        }
    }
}

/// `POST /venues/<id>` doubles as delete when the form carries
/// `_method_delete=DELETE`; anything else leaves the venue alone.
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<i32>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let fields = FormFields::new(pairs);
    if fields.get("_method_delete") != Some(DELETE_CONFIRMATION) {
        return Ok(redirect(&format!("/venues/{}", venue_id)));
    }

    match VenueRepo::delete(&state.pool, venue_id).await {
        Ok(Some(name)) => {
            info!(venue_id, name = %name, "Venue deleted");
            Ok(redirect_with_flash(
                "/",
                format!("Venue {} was successfully deleted.", name),
            ))
        }
        Ok(None) => Err(AppError::NotFound(format!(
            "Venue with id '{}' was not found",
            venue_id
        ))),
        Err(e) => {
            error!(error = ?e, venue_id, "Failed to delete venue");
            Ok(redirect_with_flash(
                "/",
                format!("An error occurred. Venue {} could not be deleted.", venue_id),
            ))
        }
    }
}
