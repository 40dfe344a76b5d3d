use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::{ErrorKind, LookupError};
use crate::identifier::Identifier;
use crate::models::{
    ApiError, IdentifierLookupRequest, NameLookupRequest, NameLookupResponse,
    NameLookupUnavailableResponse,
};
use crate::name::{split_full_name, NameSplit};
use crate::state::AppState;
use crate::upstream::NameLookupOutcome;

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ApiError {
            error: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        match self.kind() {
            ErrorKind::Validation => {
                let message = match self {
                    LookupError::InvalidIdentifier(_) => {
                        "Invalid identifier. It must contain exactly 10 digits".to_string()
                    }
                    LookupError::InvalidRequest(msg) => msg,
                    other => other.to_string(),
                };
                error_response(StatusCode::BAD_REQUEST, message)
            }
            ErrorKind::NotFound => error_response(StatusCode::NOT_FOUND, self.to_string()),
            ErrorKind::Upstream => {
                tracing::error!(error = %self, "upstream lookup failed");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error while querying the registry",
                )
            }
            ErrorKind::Config => {
                tracing::error!(error = %self, "configuration error during request");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

fn reject_json(rejection: JsonRejection) -> LookupError {
    tracing::debug!(error = %rejection.body_text(), "rejected request body");
    LookupError::InvalidRequest("Invalid JSON".into())
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

pub async fn lookup_by_identifier(
    State(state): State<AppState>,
    payload: Result<Json<IdentifierLookupRequest>, JsonRejection>,
) -> Result<Json<NameSplit>, LookupError> {
    let Json(request) = payload.map_err(reject_json)?;
    let identifier = Identifier::parse(&request.identifier)?;

    let full_name = state
        .identifier_lookup
        .lookup_by_identifier(&identifier)
        .await?
        .ok_or(LookupError::NotFound)?;

    Ok(Json(split_full_name(full_name.trim())))
}

pub async fn lookup_by_name(
    State(state): State<AppState>,
    payload: Result<Json<NameLookupRequest>, JsonRejection>,
) -> Result<Response, LookupError> {
    let Json(request) = payload.map_err(reject_json)?;
    let given_name = request.given_name.trim();
    let surname = request.surname.trim();

    if given_name.is_empty() || surname.is_empty() {
        return Err(LookupError::InvalidRequest(
            "Both given name and surname are required".into(),
        ));
    }

    let response = match state.name_lookup.lookup_by_name(given_name, surname).await? {
        NameLookupOutcome::Found(identifier) => Json(NameLookupResponse {
            identifier,
            given_name: given_name.to_string(),
            surname: surname.to_string(),
        })
        .into_response(),
        NameLookupOutcome::NotFound => return Err(LookupError::NotFound),
        NameLookupOutcome::Unavailable(info) => Json(NameLookupUnavailableResponse {
            success: false,
            given_name: given_name.to_string(),
            surname: surname.to_string(),
            message: info.message,
            alternatives_info: true,
            alternatives: info.alternatives,
        })
        .into_response(),
    };

    Ok(response)
}
