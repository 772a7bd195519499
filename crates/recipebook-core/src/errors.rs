use recipebook_core_types::RequestId;
use thiserror::Error;

/// Result type alias using JournalError
pub type Result<T> = std::result::Result<T, JournalError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that the UI layer can match on
/// without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A required text field was empty or whitespace-only
    Validation,
    /// The storage medium could not be opened, read or written
    StorageUnavailable,

    // Identity lifecycle
    AlreadyExists,
    IdentityMissing,

    // Lookup
    NotFound,
    /// A stored row could not be decoded into its typed record
    CorruptRecord,

    // Integration/IO
    Io,
    Serialization,

    /// The engine answered with a result the caller did not ask for
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Validation => "ERR_VALIDATION",
            ExErrorKind::StorageUnavailable => "ERR_STORAGE_UNAVAILABLE",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::IdentityMissing => "ERR_IDENTITY_MISSING",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::CorruptRecord => "ERR_CORRUPT_RECORD",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether the UI can recover locally (show a warning, keep running)
    pub fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            ExErrorKind::Validation
                | ExErrorKind::AlreadyExists
                | ExErrorKind::IdentityMissing
                | ExErrorKind::NotFound
        )
    }
}

/// Canonical structured error type
///
/// Carries the classification used for programmatic handling plus the
/// context (operation, entity, request) needed when reading logs.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
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

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
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
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised by journal rules before anything touches storage
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JournalError {
    /// Display name was empty after trimming
    #[error("Name cannot be empty")]
    EmptyName,

    /// Recipe title was empty after trimming
    #[error("Please enter a recipe title")]
    EmptyTitle,

    /// Recipe note was empty after trimming
    #[error("Please enter a recipe note")]
    EmptyNote,

    /// An identity is already registered for this journal
    #[error("An identity is already registered: {name}")]
    IdentityAlreadyExists { name: String },

    /// A recipe command was issued before any identity was registered
    #[error("No identity registered yet")]
    IdentityMissing,

    #[error("Recipe not found: {recipe_id}")]
    RecipeNotFound { recipe_id: i64 },

    /// Uploaded image does not carry an accepted extension
    #[error("Unsupported image type '{extension}' (expected jpg, jpeg or png)")]
    UnsupportedImageType { extension: String },
}

/// Conversion from JournalError to ExError
impl From<JournalError> for ExError {
    fn from(err: JournalError) -> Self {
        let message = err.to_string();
        match err {
            JournalError::EmptyName => ExError::new(ExErrorKind::Validation)
                .with_op("validate_identity")
                .with_message(message),

            JournalError::EmptyTitle | JournalError::EmptyNote => {
                ExError::new(ExErrorKind::Validation)
                    .with_op("validate_recipe")
                    .with_message(message)
            }

            JournalError::IdentityAlreadyExists { name } => {
                ExError::new(ExErrorKind::AlreadyExists)
                    .with_entity_id(name)
                    .with_message("An identity is already registered")
            }

            JournalError::IdentityMissing => {
                ExError::new(ExErrorKind::IdentityMissing).with_message(message)
            }

            JournalError::RecipeNotFound { recipe_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(recipe_id.to_string())
                .with_message("Recipe not found"),

            JournalError::UnsupportedImageType { .. } => ExError::new(ExErrorKind::Validation)
                .with_op("validate_image")
                .with_message(message),
        }
    }
}
