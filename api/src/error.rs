//! Unified error types for the EcoHarmony ticketing API
//!
//! This module defines error types for each layer:
//! - `RuleViolation`: Purchase rules broken by a request (domain)
//! - `PaymentError`: Payment gateway failures
//! - `NotificationError`: Email delivery failures
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::rules::MAX_VISITORS;

/// Reasons a purchase is rejected before any side effect happens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("Se debe permitir la compra solo a usuario registrado.")]
    UnregisteredUser,

    #[error("Debe indicar la cantidad de entradas y datos de visitantes.")]
    NoVisitors,

    #[error("La cantidad de entradas no debe ser mayor a {}.", MAX_VISITORS)]
    TooManyVisitors,

    #[error("La edad de todos los visitantes debe ser un numero positivo.")]
    InvalidAge,

    #[error("La fecha de visita debe ser el día actual o futuro.")]
    PastDate,

    #[error("La fecha de la visita debe estar dentro de los días en que el parque está abierto: el parque está cerrado.")]
    ParkClosed,

    #[error("Debe seleccionar la forma de pago (efectivo o tarjeta).")]
    MissingPaymentMethod,

    #[error("Debe ingresar un email para recibir la confirmación.")]
    MissingEmail,
}

impl RuleViolation {
    /// Stable machine-readable code
    pub fn reason(&self) -> &'static str {
        match self {
            RuleViolation::UnregisteredUser => "unregistered_user",
            RuleViolation::NoVisitors => "no_visitors",
            RuleViolation::TooManyVisitors => "too_many_visitors",
            RuleViolation::InvalidAge => "invalid_age",
            RuleViolation::PastDate => "past_date",
            RuleViolation::ParkClosed => "park_closed",
            RuleViolation::MissingPaymentMethod => "missing_payment_method",
            RuleViolation::MissingEmail => "missing_email",
        }
    }
}

/// Payment gateway errors
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Payment gateway error: {0}")]
    Gateway(String),
}

/// Email delivery errors
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Rule(#[from] RuleViolation),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, reason) = match &self {
            AppError::Rule(violation) => {
                tracing::debug!(reason = violation.reason(), "Purchase rejected");
                (StatusCode::BAD_REQUEST, Some(violation.reason()))
            }
            AppError::BadRequest(msg) => {
                tracing::debug!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, None)
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
            reason,
        });

        (status, body).into_response()
    }
}
