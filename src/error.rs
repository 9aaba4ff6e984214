// src/error.rs
use thiserror::Error;

/// Why a table could not be loaded. Scoped to one view; never fatal to
/// the application.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Fichier {path} introuvable.")]
    NotFound { path: String },

    #[error("HTTP error: {status} ({path})")]
    Http { status: String, path: String },

    #[error("malformed HTTP response for {path}")]
    MalformedResponse { path: String },

    #[error("{path} is not valid UTF-8")]
    Utf8 { path: String },

    #[error("year {year} is not in the historique header")]
    UnknownYear { year: String },

    #[error("view {view} needs a year")]
    MissingYear { view: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;
