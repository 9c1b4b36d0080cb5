use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use crate::{
    cli::types::{GameDate, Season, SeasonType},
    commands::{
        game_dates::list_game_dates,
        players::list_players,
        xpt::{calculate_xpt, XptQuery, XptResult},
    },
    error::{Result, XptError},
    server::{
        state::AppState,
        types::{present, ErrorResponse, GameDatesRequest, GameDatesResponse, PlayersResponse, XptRequest},
    },
};

fn error_response(status: StatusCode, err: &XptError) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

fn missing_parameters() -> Response {
    error_response(StatusCode::BAD_REQUEST, &XptError::MissingParameters)
}

/// GET /get_players
pub async fn get_players(State(state): State<AppState>) -> Response {
    match list_players(state.provider.as_ref()).await {
        Ok(players) => Json(PlayersResponse { players }).into_response(),
        Err(e) => {
            warn!(error = %e, "listing players failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e)
        }
    }
}

/// POST /get_game_dates
pub async fn get_game_dates(
    State(state): State<AppState>,
    body: Option<Json<GameDatesRequest>>,
) -> Response {
    let Some(Json(req)) = body else {
        return missing_parameters();
    };
    let (Some(name), Some(season), Some(season_type)) = (
        present(&req.player_name),
        present(&req.season),
        present(&req.season_type),
    ) else {
        return missing_parameters();
    };

    let outcome = async {
        let season: Season = season.parse()?;
        let season_type: SeasonType = season_type.parse()?;
        list_game_dates(state.provider.as_ref(), &name, &season, season_type).await
    }
    .await;

    match outcome {
        Ok(dates) => {
            info!(player = %name, count = dates.len(), "listed game dates");
            Json(GameDatesResponse { dates }).into_response()
        }
        Err(e @ XptError::PlayerNotFound { .. }) => error_response(StatusCode::NOT_FOUND, &e),
        Err(e @ (XptError::InvalidSeason { .. } | XptError::InvalidSeasonType { .. })) => {
            error_response(StatusCode::BAD_REQUEST, &e)
        }
        Err(e) => {
            warn!(player = %name, error = %e, "listing game dates failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e)
        }
    }
}

fn parse_query(
    player_name: &str,
    season: &str,
    season_type: &str,
    game_date: Option<&str>,
) -> Result<XptQuery> {
    Ok(XptQuery {
        player_name: player_name.to_string(),
        season: season.parse()?,
        season_type: season_type.parse()?,
        game_date: game_date.map(str::parse::<GameDate>).transpose()?,
    })
}

/// POST /get_xpt
///
/// Calculator failures are reported inside a 200 body; only missing
/// required fields are rejected with 400.
pub async fn get_xpt(State(state): State<AppState>, body: Option<Json<XptRequest>>) -> Response {
    let Some(Json(req)) = body else {
        return missing_parameters();
    };
    let (Some(name), Some(season), Some(season_type)) = (
        present(&req.player_name),
        present(&req.season),
        present(&req.season_type),
    ) else {
        return missing_parameters();
    };
    let game_date = present(&req.game_date);

    let outcome = match parse_query(&name, &season, &season_type, game_date.as_deref()) {
        Ok(query) => calculate_xpt(state.provider.as_ref(), &query).await,
        Err(e) => Err(e),
    };

    if let Err(e) = &outcome {
        if e.is_provider_error() {
            warn!(player = %name, season = %season, error = %e, "xPT provider failure");
        } else {
            info!(player = %name, season = %season, error = %e, "xPT not computed");
        }
    }

    Json(XptResult::new(&name, &season, game_date.as_deref(), &outcome)).into_response()
}
