use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use snafu::Snafu;
use std::num::ParseIntError;

pub type RollbookResult<T> = Result<T, RollbookError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RollbookError {
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error getting db connection"))]
    GetDatabaseConnection { source: sqlx::Error },
    #[snafu(display("Error making SQL query"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Error migrating DB schema"))]
    Migrate { source: sqlx::migrate::MigrateError },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse IP port"))]
    ParsePort { source: ParseIntError },
    #[snafu(display("Invalid student ID"))]
    ParseStudentId { source: ParseIntError },
    #[snafu(display("Unable to parse date {:?}", original))]
    ParseDate {
        source: chrono::ParseError,
        original: String,
    },
    #[snafu(display("Name, surname, and email are required"))]
    MissingRequiredFields,
    #[snafu(display("Student not found"))]
    MissingStudent { id: i32 },
    #[snafu(display("A student with this email already exists"))]
    DuplicateEmail,
}

/// Wire shape for every API error: `{"error": "..."}`.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl RollbookError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::OpenDatabase { .. }
            | Self::GetDatabaseConnection { .. }
            | Self::MakeQuery { .. }
            | Self::Migrate { .. }
            | Self::BadEnvVar { .. }
            | Self::ParsePort { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ParseStudentId { .. }
            | Self::ParseDate { .. }
            | Self::MissingRequiredFields => StatusCode::BAD_REQUEST,
            Self::MissingStudent { .. } => StatusCode::NOT_FOUND,
            Self::DuplicateEmail => StatusCode::CONFLICT,
        }
    }

    /// Message safe to hand to a client. Server-side failures collapse to a
    /// fixed string so no driver detail crosses the boundary.
    pub fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        }
    }
}

impl IntoResponse for RollbookError {
    fn into_response(self) -> Response {
        error!(?self, "Error!");
        let body = ErrorBody {
            error: self.public_message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
