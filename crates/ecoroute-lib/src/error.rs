use thiserror::Error;

/// Convenient result alias for the EcoRoute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// The scoring core never produces these; they are raised by the glue around
/// it (provider responses, vehicle data loading, candidate comparison).
#[derive(Debug, Error)]
pub enum Error {
    /// Address resolution returned no candidates for the query.
    #[error("location not found: {query}")]
    LocationNotFound { query: String },

    /// The routing service reported a non-success status.
    #[error("routing unavailable (status {code})")]
    RoutingUnavailable { code: String },

    /// The routing service returned an empty candidate list.
    #[error("no routes returned")]
    NoRoutes,

    /// Raised when custom vehicle data fails validation.
    #[error("invalid vehicle data: {message}")]
    VehicleDataValidation { message: String },

    /// Raised when a vehicle kind appears more than once in custom vehicle data.
    #[error("duplicate vehicle kind encountered: {kind}")]
    DuplicateVehicleKind { kind: String },

    /// Raised when custom vehicle data names a kind outside the supported set.
    #[error("unknown vehicle kind: {kind}{}", format_supported())]
    UnknownVehicleKind { kind: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_supported() -> String {
    format!(
        ". Expected one of: {}",
        crate::vehicle::VehicleKind::ALL
            .iter()
            .map(|kind| format!("'{}'", kind))
            .collect::<Vec<_>>()
            .join(", ")
    )
}
