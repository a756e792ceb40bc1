use axum::extract::State;
use axum::response::Response;
use axum::Form;
use chrono::Utc;
use tracing::{error, info};

use crate::forms::choices::id_choices;
use crate::forms::{error_summary, FormFields, ShowForm};
use crate::repositories::{ArtistRepo, ShowRepo, VenueRepo};
use crate::state::AppState;
use crate::templates::{ShowFormTemplate, ShowsTemplate};
use crate::utils::error::AppError;
use crate::utils::flash::Flashes;
use crate::utils::response::{page, redirect_with_flash, take_flashes};

pub async fn list_shows(
    State(state): State<AppState>,
    flashes: Flashes,
) -> Result<Response, AppError> {
    let shows = ShowRepo::list(&state.pool).await?;
    let (flashes, shown) = take_flashes(flashes);

    page(&ShowsTemplate { flashes, shows }, shown)
}

pub async fn create_show_form(
    State(state): State<AppState>,
    flashes: Flashes,
) -> Result<Response, AppError> {
    let artists = ArtistRepo::list_choices(&state.pool).await?;
    let venues = VenueRepo::list_choices(&state.pool).await?;
    let (flashes, shown) = take_flashes(flashes);

    page(
        &ShowFormTemplate {
            flashes,
            form: ShowForm::starting_at(Utc::now()),
            artists: id_choices(&artists, None),
            venues: id_choices(&venues, None),
        },
        shown,
    )
}

pub async fn create_show(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let artist_ids: Vec<i32> = ArtistRepo::list_choices(&state.pool)
        .await?
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    let venue_ids: Vec<i32> = VenueRepo::list_choices(&state.pool)
        .await?
        .into_iter()
        .map(|(id, _)| id)
        .collect();

    let new_show = match ShowForm::from_fields(&FormFields::new(pairs))
        .into_new_show(&artist_ids, &venue_ids)
    {
        Ok(new_show) => new_show,
        Err(errors) => return Ok(redirect_with_flash("/shows", error_summary(&errors))),
    };

    match ShowRepo::create(&state.pool, &new_show).await {
        Ok(show) => {
            info!(
                show_id = show.id,
                artist_id = show.artist_id,
                venue_id = show.venue_id,
                "Show created"
            );
            Ok(redirect_with_flash("/shows", "Show was successfully listed!"))
        }
        Err(e) => {
            error!(error = ?e, "Failed to create show");
            Ok(redirect_with_flash(
                "/",
                "An error occurred. Show could not be listed.",
            ))
        }
    }
}
