use axum::extract::{Path, State};
use axum::response::Response;
use axum::Form;
use chrono::Utc;
use tracing::{error, info};

use crate::forms::choices::{genre_choices, state_choices};
use crate::forms::{error_summary, ArtistForm, FormFields};
use crate::models::{ArtistDetail, ShowPartition};
use crate::repositories::ArtistRepo;
use crate::state::AppState;
use crate::templates::{
    ArtistDetailTemplate, ArtistFormTemplate, ArtistSearchTemplate, ArtistsTemplate,
};
use crate::utils::error::AppError;
use crate::utils::flash::Flashes;
use crate::utils::response::{page, redirect_with_flash, take_flashes};

fn artist_not_found(artist_id: i32) -> AppError {
    AppError::NotFound(format!("Artist with id '{}' was not found", artist_id))
}

pub async fn list_artists(
    State(state): State<AppState>,
    flashes: Flashes,
) -> Result<Response, AppError> {
    let artists = ArtistRepo::list(&state.pool).await?;
    let (flashes, shown) = take_flashes(flashes);

    page(&ArtistsTemplate { flashes, artists }, shown)
}

/// Unlike venue search, results carry no upcoming show counts.
pub async fn search_artists(
    State(state): State<AppState>,
    flashes: Flashes,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let fields = FormFields::new(pairs);
    let search_term = fields.get("search_term").unwrap_or_default().to_string();

    let artists = ArtistRepo::search(&state.pool, &search_term).await?;
    let (flashes, shown) = take_flashes(flashes);

    page(
        &ArtistSearchTemplate {
            flashes,
            search_term,
            count: artists.len(),
            artists,
        },
        shown,
    )
}

pub async fn show_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<i32>,
    flashes: Flashes,
) -> Result<Response, AppError> {
    let artist = ArtistRepo::find_by_id(&state.pool, artist_id)
        .await?
        .ok_or_else(|| artist_not_found(artist_id))?;

    let shows = ArtistRepo::list_shows(&state.pool, artist_id).await?;
    let detail = ArtistDetail {
        artist,
        shows: ShowPartition::split(shows, Utc::now()),
    };
    let (flashes, shown) = take_flashes(flashes);

    page(&ArtistDetailTemplate { flashes, detail }, shown)
}

pub async fn create_artist_form(flashes: Flashes) -> Result<Response, AppError> {
    let (flashes, shown) = take_flashes(flashes);

    page(
        &ArtistFormTemplate {
            flashes,
            heading: "List a new artist".to_string(),
            action: "/artists/create".to_string(),
            form: ArtistForm::default(),
            states: state_choices(""),
            genres: genre_choices(&[]),
        },
        shown,
    )
}

pub async fn create_artist(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let input = match ArtistForm::from_fields(&FormFields::new(pairs)).into_input() {
        Ok(input) => input,
        Err(errors) => return redirect_with_flash("/artists", error_summary(&errors)),
    };

    match ArtistRepo::create(&state.pool, &input).await {
        Ok(artist) => {
            info!(artist_id = artist.id, name = %artist.name, "Artist created");
            redirect_with_flash(
                "/artists",
                format!("Artist {} was successfully listed!", artist.name),
            )
        }
        Err(e) => {
            error!(error = ?e, name = %input.name, "Failed to create artist");
            redirect_with_flash(
                "/",
                format!("An error occurred. Artist {} could not be listed.", input.name),
            )
        }
    }
}

pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(artist_id): Path<i32>,
    flashes: Flashes,
) -> Result<Response, AppError> {
    let artist = ArtistRepo::find_by_id(&state.pool, artist_id)
        .await?
        .ok_or_else(|| artist_not_found(artist_id))?;

    let form = ArtistForm::from_artist(&artist);
    let (flashes, shown) = take_flashes(flashes);

    page(
        &ArtistFormTemplate {
            flashes,
            heading: format!("Edit artist {}", artist.name),
            action: format!("/artists/{}/edit", artist.id),
            states: state_choices(&form.state),
            genres: genre_choices(&form.genres),
            form,
        },
        shown,
    )
}

pub async fn edit_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<i32>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    ArtistRepo::find_by_id(&state.pool, artist_id)
        .await?
        .ok_or_else(|| artist_not_found(artist_id))?;

    let input = match ArtistForm::from_fields(&FormFields::new(pairs)).into_input() {
        Ok(input) => input,
        Err(errors) => {
            return Ok(redirect_with_flash(
                &format!("/artists/{}/edit", artist_id),
                error_summary(&errors),
            ))
        }
    };

    let detail_url = format!("/artists/{}", artist_id);
    match ArtistRepo::update(&state.pool, artist_id, &input).await {
        Ok(Some(artist)) => {
            info!(artist_id, name = %artist.name, "Artist updated");
            Ok(redirect_with_flash(
                &detail_url,
                format!("Artist {} was successfully updated!", artist.name),
            ))
        }
        Ok(None) => Err(artist_not_found(artist_id)),
        Err(e) => {
            error!(error = ?e, artist_id, "Failed to update artist");
            Ok(redirect_with_flash(
                &detail_url,
                format!("An error occurred. Artist {} could not be updated.", input.name),
            ))
        }
    }
}
