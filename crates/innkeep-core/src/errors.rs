use crate::model::RoomNumber;
use thiserror::Error;

/// Result type alias using RegistryError
pub type Result<T> = std::result::Result<T, RegistryError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    InvalidRoomNumber,

    // Occupancy
    RoomOccupied,
    NotFound,
    Cancelled,

    // Integration
    Persistence,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidRoomNumber => "ERR_INVALID_ROOM_NUMBER",
            ExErrorKind::RoomOccupied => "ERR_ROOM_OCCUPIED",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Cancelled => "ERR_CANCELLED",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }

    /// Whether this kind is a normal, user-facing outcome rather than a fault.
    ///
    /// Expected kinds are logged at `warn`; everything else at `error`.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvalidInput
                | ExErrorKind::InvalidRoomNumber
                | ExErrorKind::RoomOccupied
                | ExErrorKind::NotFound
                | ExErrorKind::Cancelled
        )
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and context for
/// log lines. Built from [`RegistryError`] at operation boundaries.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    room_number: Option<i64>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            room_number: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add room number context
    pub fn with_room_number(mut self, room_number: RoomNumber) -> Self {
        self.room_number = Some(room_number.get());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn room_number(&self) -> Option<i64> {
        self.room_number
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(room_number) = self.room_number {
            write!(f, " (room_number: {})", room_number)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Closed set of outcome categories a caller can pattern-match on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// Caller input malformed; nothing was submitted to the store
    Validation,
    /// Room already occupied
    Conflict,
    /// Room is vacant
    NotFound,
    /// Caller declined the check-out confirmation
    Cancelled,
    /// Any other storage-layer failure
    Storage,
}

/// Error taxonomy for registry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    // ===== Validation Errors =====
    /// A required field was absent or blank
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// Room number did not parse as an integer
    #[error("Invalid room number '{input}': must be an integer")]
    InvalidRoomNumber { input: String },

    // ===== Occupancy Errors =====
    /// Check-in targeted a room that already has a guest
    #[error("Room {room_number} is already occupied")]
    RoomOccupied { room_number: RoomNumber },

    /// Lookup or check-out targeted a vacant room
    #[error("No guest is checked into room {room_number}")]
    RoomVacant { room_number: RoomNumber },

    /// Caller declined to confirm the check-out
    #[error("Check-out of room {room_number} was cancelled")]
    CheckOutCancelled { room_number: RoomNumber },

    // ===== Storage Errors =====
    /// The occupant vanished between lookup and delete
    #[error("Could not process check-out for room {room_number}")]
    CheckOutFailed { room_number: RoomNumber },

    /// Any other storage failure, with the underlying cause
    #[error("Storage failure during {op}: {message}")]
    Storage { op: String, message: String },
}

impl RegistryError {
    /// Build a storage failure for the given operation
    pub fn storage(op: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::Storage {
            op: op.into(),
            message: message.into(),
        }
    }

    /// Classify this error into the caller-facing outcome set
    pub fn outcome(&self) -> OutcomeKind {
        match self {
            RegistryError::MissingField { .. } | RegistryError::InvalidRoomNumber { .. } => {
                OutcomeKind::Validation
            }
            RegistryError::RoomOccupied { .. } => OutcomeKind::Conflict,
            RegistryError::RoomVacant { .. } => OutcomeKind::NotFound,
            RegistryError::CheckOutCancelled { .. } => OutcomeKind::Cancelled,
            RegistryError::CheckOutFailed { .. } | RegistryError::Storage { .. } => {
                OutcomeKind::Storage
            }
        }
    }
}

impl From<RegistryError> for ExError {
    fn from(err: RegistryError) -> Self {
        let message = err.to_string();
        match err {
            RegistryError::MissingField { field } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("validate")
                .with_message(format!("{} is required", field)),

            RegistryError::InvalidRoomNumber { .. } => {
                ExError::new(ExErrorKind::InvalidRoomNumber)
                    .with_op("validate")
                    .with_message(message)
            }

            RegistryError::RoomOccupied { room_number } => {
                ExError::new(ExErrorKind::RoomOccupied)
                    .with_room_number(room_number)
                    .with_message(message)
            }

            RegistryError::RoomVacant { room_number } => ExError::new(ExErrorKind::NotFound)
                .with_room_number(room_number)
                .with_message(message),

            RegistryError::CheckOutCancelled { room_number } => {
                ExError::new(ExErrorKind::Cancelled)
                    .with_room_number(room_number)
                    .with_message(message)
            }

            RegistryError::CheckOutFailed { room_number } => {
                ExError::new(ExErrorKind::Persistence)
                    .with_op("check_out")
                    .with_room_number(room_number)
                    .with_message(message)
            }

            RegistryError::Storage { op, message } => ExError::new(ExErrorKind::Persistence)
                .with_op(op)
                .with_message(message),
        }
    }
}
