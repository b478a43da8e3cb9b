use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::app_state::AppState;
use crate::errors::AppError;
use crate::form::{Effect, Intent};

pub async fn get_screen(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let screen = state.screen()?;
    Ok(HttpResponse::Ok().json(screen.view()))
}

/// Dispatches one user intent and returns the effect with the refreshed screen.
pub async fn post_intent(
    state: web::Data<AppState>,
    intent: web::Json<Intent>,
) -> Result<HttpResponse, AppError> {
    let mut screen = state.screen()?;
    let effect = screen.dispatch(intent.into_inner())?;

    if let Effect::Rejected { errors } = &effect {
        return Err(errors.clone().into());
    }

    Ok(HttpResponse::Ok().json(json!({
        "effect": effect,
        "screen": screen.view(),
    })))
}
