//! HTTP request handlers.

use crate::app::response::{
    ApiError, CardBody, CardView, CardsBody, CatalogBody, DeckBody, MajorArcanaBody, ReadingBody,
    ReadingView, Success,
};
use crate::app::state::SharedState;
use crate::utils::error::TarotError;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

type HandlerResult<T> = Result<T, ApiError>;

/// GET /cards
pub async fn list_cards(State(state): State<SharedState>) -> HandlerResult<Response> {
    tracing::info!("📚 Catalog requested");
    let listing = state.deck.list_all()?;
    Ok(Success::new(CatalogBody::from(&listing)).into_response())
}

/// GET /major-arcana
pub async fn list_major_arcana(State(state): State<SharedState>) -> HandlerResult<Response> {
    tracing::info!("📚 Major arcana requested");
    let cards = state.deck.list_major()?;
    let body = MajorArcanaBody {
        major_arcana: cards.iter().map(CardView::from).collect(),
    };
    Ok(Success::new(body).into_response())
}

/// GET /card/:id
pub async fn get_card(
    State(state): State<SharedState>,
    id: Result<Path<String>, PathRejection>,
) -> HandlerResult<Response> {
    let Path(id) = id.map_err(|rejection| TarotError::invalid_argument(rejection.body_text()))?;
    tracing::info!("🔍 Card {} requested", id);
    let card = state.deck.get_by_id(&id)?;
    Ok(Success::new(CardBody {
        card: CardView::from(&card),
    })
    .into_response())
}

/// POST /reading
pub async fn perform_reading(State(state): State<SharedState>) -> HandlerResult<Response> {
    let reading = state.readings.perform_reading()?;
    tracing::info!("🔮 Reading generated");
    Ok(Success::new(ReadingBody {
        reading: ReadingView::from(&reading),
    })
    .into_response())
}

#[derive(Debug, Deserialize)]
pub struct DrawParams {
    // signed so that negative counts reach the deck's own bounds check
    pub count: Option<i64>,
}

/// GET /draw?count=N
pub async fn draw_cards(
    State(state): State<SharedState>,
    params: Result<Query<DrawParams>, QueryRejection>,
) -> HandlerResult<Response> {
    let Query(params) =
        params.map_err(|rejection| TarotError::invalid_argument(rejection.body_text()))?;
    let requested = params.count.unwrap_or(1);
    tracing::info!("🎴 Drawing {} card(s)", requested);

    let count = usize::try_from(requested).map_err(|_| {
        TarotError::invalid_argument(format!("card count must be positive, got {}", requested))
    })?;
    let cards = state.deck.draw(count)?;
    Ok(Success::new(CardsBody {
        cards: cards.iter().map(CardView::from).collect(),
    })
    .into_response())
}

/// GET /deck
pub async fn deck_info(State(state): State<SharedState>) -> HandlerResult<Response> {
    let body = DeckBody {
        size: state.deck.size()?,
        reversal_probability: state.deck.reversal_probability(),
    };
    Ok(Success::new(body).into_response())
}

/// Fallback for unknown paths and unsupported methods.
pub async fn not_found() -> ApiError {
    tracing::warn!("Unknown API endpoint requested");
    ApiError::endpoint_not_found()
}
