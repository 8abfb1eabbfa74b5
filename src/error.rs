use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt;

pub const MISSING_CREDENTIAL: i32 = 1;
pub const REQWEST: i32 = 3;
pub const UPSTREAM: i32 = 4;
pub const COMMUNICATION: i32 = 6;
pub const INVALID_CONFIG: i32 = 7;
pub const SERVE: i32 = 8;
pub const INVALID_COORDINATE: i32 = 100;
pub const EMPTY_INPUT: i32 = 102;
pub const NOT_FOUND: i32 = 103;
pub const SERVER_REJECTED: i32 = 104;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self.code {
            1..=99 => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "code": self.code,
            "error": self.message,
        }));

        (status, body).into_response()
    }
}

pub fn missing_credential_error() -> Error {
    Error {
        code: MISSING_CREDENTIAL,
        message: "Missing GOOGLE_MAPS_API_KEY in environment".into(),
    }
}

pub fn reqwest_error(err: reqwest::Error) -> Error {
    Error {
        code: REQWEST,
        message: format!("reqwest error: {}", err),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: UPSTREAM,
        message: "upstream error".into(),
    }
}

pub fn communication_error() -> Error {
    Error {
        code: COMMUNICATION,
        message: "Something went wrong talking to the server.".into(),
    }
}

pub fn invalid_config_error(var: &str, reason: impl fmt::Display) -> Error {
    Error {
        code: INVALID_CONFIG,
        message: format!("invalid value for {}: {}", var, reason),
    }
}

pub fn serve_error(err: impl fmt::Display) -> Error {
    Error {
        code: SERVE,
        message: format!("server error: {}", err),
    }
}

pub fn invalid_coordinate_error() -> Error {
    Error {
        code: INVALID_COORDINATE,
        message: "lat and lng are required query parameters".into(),
    }
}

pub fn empty_input_error() -> Error {
    Error {
        code: EMPTY_INPUT,
        message: "Type a city name first.".into(),
    }
}

pub fn not_found_error(hint: String) -> Error {
    Error {
        code: NOT_FOUND,
        message: hint,
    }
}

pub fn server_rejected_error(message: String) -> Error {
    Error {
        code: SERVER_REJECTED,
        message,
    }
}
