//! JSON API over the advisor.
//!
//! - `GET  /api/v1/options`          dropdown values and the default budget
//! - `POST /api/v1/interpret`        room description to profile and palettes
//! - `POST /api/v1/recommendations`  ranked, diverse listings for a room
//!
//! Every error body carries a user-safe message and the request's
//! correlation id.

use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use rand::rngs::StdRng;
use roomwise_core::advisor::{Advisor, Interpretation, Recommendation, RecommendationRequest};
use roomwise_core::catalog::CacheStats;
use roomwise_core::domain::listing::{Color, ColorFilter, Room, Style, StyleFilter};
use roomwise_core::domain::profile::{DEFAULT_ROOM, DEFAULT_WALL_COLOR};
use roomwise_core::errors::{ApplicationError, DomainError, InterfaceError};
use roomwise_core::harmony::Suggestion;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

/// The advisor and its random source behind one lock. No handler awaits
/// while holding it.
#[derive(Clone)]
pub struct AdvisorState {
    session: Arc<Mutex<AdvisorSession>>,
}

struct AdvisorSession {
    advisor: Advisor,
    rng: StdRng,
}

impl AdvisorState {
    pub fn new(advisor: Advisor, rng: StdRng) -> Self {
        Self { session: Arc::new(Mutex::new(AdvisorSession { advisor, rng })) }
    }

    fn lock(&self, correlation_id: &str) -> Result<MutexGuard<'_, AdvisorSession>, InterfaceError> {
        self.session.lock().map_err(|_| InterfaceError::Internal {
            message: "advisor lock poisoned".to_string(),
            correlation_id: correlation_id.to_string(),
        })
    }

    pub fn default_budget(&self, correlation_id: &str) -> Result<Decimal, InterfaceError> {
        Ok(self.lock(correlation_id)?.advisor.default_budget())
    }

    pub fn cache_stats(&self, correlation_id: &str) -> Result<CacheStats, InterfaceError> {
        Ok(self.lock(correlation_id)?.advisor.cache_stats())
    }
}

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub rooms: Vec<&'static str>,
    pub styles: Vec<String>,
    pub colors: Vec<String>,
    pub default_budget: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct InterpretBody {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct InterpretResponse {
    pub correlation_id: String,
    #[serde(flatten)]
    pub interpretation: Interpretation,
}

/// Either `prompt` or the explicit `room`/`wall_color` pair.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RecommendationBody {
    pub prompt: Option<String>,
    pub room: Option<String>,
    pub wall_color: Option<String>,
    pub style: Option<String>,
    pub color: Option<String>,
    pub budget: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub correlation_id: String,
    pub wall_color: String,
    pub dimensions: Option<String>,
    pub suggestion: Suggestion,
    pub recommendation: Recommendation,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub correlation_id: String,
}

#[derive(Debug)]
pub struct ApiError(InterfaceError);

impl ApiError {
    fn bad_request(message: impl Into<String>, correlation_id: &str) -> Self {
        Self(InterfaceError::BadRequest {
            message: message.into(),
            correlation_id: correlation_id.to_string(),
        })
    }

    fn domain(error: DomainError, correlation_id: &str) -> Self {
        Self(ApplicationError::from(error).into_interface(correlation_id))
    }
}

impl From<InterfaceError> for ApiError {
    fn from(value: InterfaceError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            InterfaceError::BadRequest { message, .. } => {
                (StatusCode::BAD_REQUEST, Some(message.clone()))
            }
            InterfaceError::ServiceUnavailable { .. } => (StatusCode::SERVICE_UNAVAILABLE, None),
            InterfaceError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, None),
        };

        warn!(
            event_name = "api.request.rejected",
            correlation_id = self.0.correlation_id(),
            status = status.as_u16(),
            error = %self.0,
            "request rejected"
        );

        let body = ErrorBody {
            error: self.0.user_message(),
            detail,
            correlation_id: self.0.correlation_id().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router(state: AdvisorState) -> Router {
    Router::new()
        .route("/api/v1/options", get(options))
        .route("/api/v1/interpret", post(interpret))
        .route("/api/v1/recommendations", post(recommendations))
        .with_state(state)
}

fn new_correlation_id() -> String {
    format!("req-{}", Uuid::new_v4())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn options(State(state): State<AdvisorState>) -> Result<Json<OptionsResponse>, ApiError> {
    let correlation_id = new_correlation_id();
    let default_budget = state.default_budget(&correlation_id)?;

    let styles = std::iter::once(StyleFilter::All.to_string())
        .chain(Style::ALL.iter().map(|style| style.name().to_string()))
        .collect();
    let colors = std::iter::once(ColorFilter::All.to_string())
        .chain(Color::PALETTE.iter().map(|color| color.name().to_string()))
        .collect();

    Ok(Json(OptionsResponse {
        rooms: Room::ALL.iter().map(Room::name).collect(),
        styles,
        colors,
        default_budget,
    }))
}

async fn interpret(
    State(state): State<AdvisorState>,
    payload: Result<Json<InterpretBody>, JsonRejection>,
) -> Result<Json<InterpretResponse>, ApiError> {
    let correlation_id = new_correlation_id();
    let Json(body) =
        payload.map_err(|rejection| ApiError::bad_request(rejection.body_text(), &correlation_id))?;

    let interpretation = {
        let mut session = state.lock(&correlation_id)?;
        let AdvisorSession { advisor, rng } = &mut *session;
        advisor.interpret(&body.prompt, rng)
    };

    info!(
        event_name = "api.interpret.served",
        correlation_id = %correlation_id,
        room = %interpretation.profile.room,
        wall_tone = ?interpretation.suggestion.wall_tone,
        "prompt interpreted"
    );

    Ok(Json(InterpretResponse { correlation_id, interpretation }))
}

async fn recommendations(
    State(state): State<AdvisorState>,
    payload: Result<Json<RecommendationBody>, JsonRejection>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    let correlation_id = new_correlation_id();
    let Json(body) =
        payload.map_err(|rejection| ApiError::bad_request(rejection.body_text(), &correlation_id))?;

    if body.prompt.is_some() && (body.room.is_some() || body.wall_color.is_some()) {
        return Err(ApiError::bad_request(
            "send either `prompt` or `room`/`wall_color`, not both",
            &correlation_id,
        ));
    }

    let explicit_room = body
        .room
        .as_deref()
        .map(Room::from_str)
        .transpose()
        .map_err(|error| ApiError::domain(error, &correlation_id))?;
    let style = parse_filter::<StyleFilter>(body.style.as_deref(), &correlation_id)?;
    let color = parse_filter::<ColorFilter>(body.color.as_deref(), &correlation_id)?;

    let response = {
        let mut session = state.lock(&correlation_id)?;
        let AdvisorSession { advisor, rng } = &mut *session;

        let (room, wall_color, dimensions, suggestion) = match &body.prompt {
            Some(prompt) => {
                let interpretation = advisor.interpret(prompt, rng);
                let profile = interpretation.profile;
                (profile.room, profile.wall_color, profile.dimensions, interpretation.suggestion)
            }
            None => {
                let wall_color =
                    body.wall_color.clone().unwrap_or_else(|| DEFAULT_WALL_COLOR.to_string());
                let suggestion = advisor.suggest(&wall_color, rng);
                (explicit_room.unwrap_or(DEFAULT_ROOM), wall_color, None, suggestion)
            }
        };

        let request = RecommendationRequest {
            room,
            style,
            color,
            preferred_colors: suggestion.colors.clone(),
            budget: body.budget,
        };
        let recommendation = advisor
            .recommend(&request, rng)
            .map_err(|error| ApiError::domain(error, &correlation_id))?;

        RecommendationResponse {
            correlation_id: correlation_id.clone(),
            wall_color,
            dimensions,
            suggestion,
            recommendation,
        }
    };

    info!(
        event_name = "api.recommendations.served",
        correlation_id = %correlation_id,
        room = %response.recommendation.room,
        items = response.recommendation.items.len(),
        notices = response.recommendation.notices.len(),
        "recommendations served"
    );

    Ok(Json(response))
}

fn parse_filter<T>(raw: Option<&str>, correlation_id: &str) -> Result<T, ApiError>
where
    T: FromStr<Err = DomainError>,
{
    raw.unwrap_or_default().parse::<T>().map_err(|error| ApiError::domain(error, correlation_id))
}
