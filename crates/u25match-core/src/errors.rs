//! Error facility (`ExError`, `ExErrorKind`) and profile domain errors

use u25match_core_types::RequestId;
use thiserror::Error;

/// Result type alias using ProfileError
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Generic failure text shown to the user when a save does not go through.
pub const SAVE_FAILED_MESSAGE: &str = "保存に失敗しました";

/// Generic failure text shown to the user when a profile cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "プロフィールの読み込みに失敗しました";

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every error surfaced by the kernel or a profile service maps to one of
/// these kinds. Each kind has a stable code for tests and API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    DuplicateTag,
    TagNotFound,

    // Lookup
    NotFound,
    ProfileNotFound,

    // Session
    NotSignedIn,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    ExternalService,
    Timeout,
    Concurrency,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::DuplicateTag => "ERR_DUPLICATE_TAG",
            ExErrorKind::TagNotFound => "ERR_TAG_NOT_FOUND",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ProfileNotFound => "ERR_PROFILE_NOT_FOUND",
            ExErrorKind::NotSignedIn => "ERR_NOT_SIGNED_IN",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::Timeout => "ERR_TIMEOUT",
            ExErrorKind::Concurrency => "ERR_CONCURRENCY",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// True for kinds produced by the persistence boundary rather than by
    /// local validation.
    pub fn is_service_failure(&self) -> bool {
        matches!(
            self,
            ExErrorKind::Io
                | ExErrorKind::Serialization
                | ExErrorKind::Persistence
                | ExErrorKind::ExternalService
                | ExErrorKind::Timeout
                | ExErrorKind::Concurrency
                | ExErrorKind::Internal
                | ExErrorKind::ProfileNotFound
                | ExErrorKind::NotFound
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional
/// context (operation, profile uid, field, request id) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    uid: Option<String>,
    field: Option<String>,
    request_id: Option<RequestId>,
    status: Option<u16>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            uid: None,
            field: None,
            request_id: None,
            status: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add profile uid context
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Add the profile field (or tag id) the error is about
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add the HTTP status returned by a remote service
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
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

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }

    /// Text suitable for a user-facing dialog.
    ///
    /// Service failures collapse into one generic message. Validation errors
    /// keep their own message since they describe something the user did.
    pub fn user_message(&self) -> String {
        if self.kind.is_service_failure() {
            SAVE_FAILED_MESSAGE.to_string()
        } else if self.message.is_empty() {
            self.kind.code().to_string()
        } else {
            self.message.clone()
        }
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
        if let Some(uid) = &self.uid {
            write!(f, " (uid: {})", uid)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        if let Some(status) = self.status {
            write!(f, " (status: {})", status)?;
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

/// Domain errors raised by the profile editor and in-process stores
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// No profile stored under this uid
    #[error("Profile not found: {uid}")]
    ProfileNotFound { uid: String },

    /// A tag with this id is already attached to the profile
    #[error("Tag already present: {tag_id}")]
    DuplicateTag { tag_id: String },

    /// No tag with this id is attached to the profile
    #[error("Tag not found: {tag_id}")]
    TagNotFound { tag_id: String },

    /// Operation requires a signed-in session
    #[error("No user is signed in")]
    NotSignedIn,

    /// Profile value failed a structural check
    #[error("Invalid profile: {reason}")]
    InvalidProfile { reason: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<ProfileError> for ExError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::ProfileNotFound { uid } => ExError::new(ExErrorKind::ProfileNotFound)
                .with_uid(uid)
                .with_message("Profile not found"),

            ProfileError::DuplicateTag { tag_id } => ExError::new(ExErrorKind::DuplicateTag)
                .with_field(tag_id)
                .with_message("Tag is already attached to the profile"),

            ProfileError::TagNotFound { tag_id } => ExError::new(ExErrorKind::TagNotFound)
                .with_field(tag_id)
                .with_message("Tag is not attached to the profile"),

            ProfileError::NotSignedIn => {
                ExError::new(ExErrorKind::NotSignedIn).with_message("No user is signed in")
            }

            ProfileError::InvalidProfile { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }

            ProfileError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for ProfileError {
    fn from(err: serde_json::Error) -> Self {
        ProfileError::Serialization {
            message: err.to_string(),
        }
    }
}
