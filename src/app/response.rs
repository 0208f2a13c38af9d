//! JSON wire format: success envelopes, the error envelope, and the three card
//! views the API exposes.

use crate::core::deck::CardListing;
use crate::domain::model::{Card, CardType, Reading, Suit};
use crate::utils::error::TarotError;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::collections::BTreeMap;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Serializes `body` with the crate's JSON content type.
pub struct JsonResponse<T> {
    status: StatusCode,
    body: T,
}

impl<T: Serialize> JsonResponse<T> {
    pub fn ok(body: T) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn with_status(status: StatusCode, body: T) -> Self {
        Self { status, body }
    }
}

impl<T: Serialize> IntoResponse for JsonResponse<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.body) {
            Ok(bytes) => {
                let mut response = (self.status, bytes).into_response();
                response.headers_mut().insert(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(JSON_CONTENT_TYPE),
                );
                response
            }
            Err(e) => {
                tracing::error!("❌ Failed to serialize response body: {}", e);
                ApiError::from(TarotError::from(e)).into_response()
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Success<T> {
    success: bool,
    #[serde(flatten)]
    body: T,
}

impl<T: Serialize> Success<T> {
    pub fn new(body: T) -> JsonResponse<Self> {
        JsonResponse::ok(Self {
            success: true,
            body,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    success: bool,
    error: String,
    status_code: u16,
}

/// Error leaving a handler. 5xx messages are logged and replaced by a generic
/// text so internals never reach the client.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn endpoint_not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "API endpoint not found".to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<TarotError> for ApiError {
    fn from(err: TarotError) -> Self {
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let message = if status.is_server_error() {
            tracing::error!("❌ Request failed: {}", err);
            err.user_friendly_message()
        } else {
            tracing::warn!("Request rejected: {}", err);
            err.to_string()
        };
        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            error: self.message,
            status_code: self.status.as_u16(),
        };
        JsonResponse::with_status(self.status, body).into_response()
    }
}

/// Catalog view: no orientation fields.
#[derive(Debug, Serialize)]
pub struct CatalogCardView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub english_name: &'a str,
    pub upright_meaning: &'a str,
    pub reversed_meaning: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a Card> for CatalogCardView<'a> {
    fn from(card: &'a Card) -> Self {
        Self {
            id: &card.id,
            name: &card.name,
            english_name: &card.english_name,
            upright_meaning: &card.upright_meaning,
            reversed_meaning: &card.reversed_meaning,
            description: &card.description,
        }
    }
}

/// Full card including its current orientation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub english_name: &'a str,
    pub upright_meaning: &'a str,
    pub reversed_meaning: &'a str,
    pub description: &'a str,
    pub reversed: bool,
    pub card_type: CardType,
    pub suit: Option<Suit>,
    pub current_meaning: &'a str,
}

impl<'a> From<&'a Card> for CardView<'a> {
    fn from(card: &'a Card) -> Self {
        Self {
            id: &card.id,
            name: &card.name,
            english_name: &card.english_name,
            upright_meaning: &card.upright_meaning,
            reversed_meaning: &card.reversed_meaning,
            description: &card.description,
            reversed: card.reversed,
            card_type: card.card_type(),
            suit: card.suit(),
            current_meaning: card.current_meaning(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawnCardView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub english_name: &'a str,
    pub upright_meaning: &'a str,
    pub reversed_meaning: &'a str,
    pub description: &'a str,
    pub is_reversed: bool,
    pub card_type: CardType,
    pub suit: Option<Suit>,
    pub current_meaning: &'a str,
    pub position_label: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingView<'a> {
    pub overall_reading: &'a str,
    pub spread_type: &'a str,
    pub reading_time: String,
    pub drawn_cards: Vec<DrawnCardView<'a>>,
}

impl<'a> From<&'a Reading> for ReadingView<'a> {
    fn from(reading: &'a Reading) -> Self {
        let drawn_cards = reading
            .positioned_cards()
            .map(|(position, card)| DrawnCardView {
                id: &card.id,
                name: &card.name,
                english_name: &card.english_name,
                upright_meaning: &card.upright_meaning,
                reversed_meaning: &card.reversed_meaning,
                description: &card.description,
                is_reversed: card.reversed,
                card_type: card.card_type(),
                suit: card.suit(),
                current_meaning: card.current_meaning(),
                position_label: position.label(),
            })
            .collect();

        Self {
            overall_reading: reading.narrative(),
            spread_type: reading.spread_type(),
            reading_time: reading.timestamp().to_rfc3339(),
            drawn_cards,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CatalogBody<'a> {
    pub major_arcana: Vec<CatalogCardView<'a>>,
    pub minor_arcana: BTreeMap<Suit, Vec<CatalogCardView<'a>>>,
}

impl<'a> From<&'a CardListing> for CatalogBody<'a> {
    fn from(listing: &'a CardListing) -> Self {
        Self {
            major_arcana: catalog_views(&listing.major_arcana),
            minor_arcana: listing
                .minor_arcana
                .iter()
                .map(|(suit, cards)| (*suit, catalog_views(cards)))
                .collect(),
        }
    }
}

fn catalog_views(cards: &[Card]) -> Vec<CatalogCardView<'_>> {
    cards.iter().map(CatalogCardView::from).collect()
}

#[derive(Debug, Serialize)]
pub struct MajorArcanaBody<'a> {
    pub major_arcana: Vec<CardView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct CardBody<'a> {
    pub card: CardView<'a>,
}

#[derive(Debug, Serialize)]
pub struct CardsBody<'a> {
    pub cards: Vec<CardView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ReadingBody<'a> {
    pub reading: ReadingView<'a>,
}

#[derive(Debug, Serialize)]
pub struct DeckBody {
    pub size: usize,
    pub reversal_probability: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;

    #[test]
    fn test_catalog_view_omits_orientation() {
        let catalog = Catalog::standard();
        let fool = catalog.find("0").unwrap();
        let value = serde_json::to_value(CatalogCardView::from(fool)).unwrap();

        assert_eq!(value["english_name"], "The Fool");
        assert!(value.get("reversed").is_none());
        assert!(value.get("cardType").is_none());
    }

    #[test]
    fn test_card_view_field_names() {
        let catalog = Catalog::standard();
        let mut card = catalog.find("cups_queen").unwrap().clone();
        card.reversed = true;
        let value = serde_json::to_value(CardView::from(&card)).unwrap();

        assert_eq!(value["englishName"], "Queen of Cups");
        assert_eq!(value["reversed"], true);
        assert_eq!(value["cardType"], "MINOR_ARCANA");
        assert_eq!(value["suit"], "cups");
        assert_eq!(value["currentMeaning"], card.reversed_meaning.as_str());
    }

    #[test]
    fn test_major_card_has_null_suit() {
        let catalog = Catalog::standard();
        let world = catalog.find("21").unwrap();
        let value = serde_json::to_value(CardView::from(world)).unwrap();
        assert!(value["suit"].is_null());
        assert_eq!(value["cardType"], "MAJOR_ARCANA");
    }

    #[test]
    fn test_error_mapping() {
        let err = ApiError::from(TarotError::not_found("nope"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(err.message().contains("nope"));

        let err = ApiError::from(TarotError::internal("secret detail"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message().contains("secret"));
    }
}
