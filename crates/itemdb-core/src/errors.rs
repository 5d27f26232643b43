use thiserror::Error;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and user-facing messages. Every kind is a storage
/// failure; lookups by id report a missing item through `Option`/`bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Filesystem failure while preparing the store
    Io,
    /// The database rejected or failed a statement
    Persistence,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus the
/// operation and item context needed to explain the failure.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    item_id: Option<i64>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            item_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the id of the item the failed operation targeted
    pub fn with_item_id(mut self, id: i64) -> Self {
        self.item_id = Some(id);
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

    pub fn item_id(&self) -> Option<i64> {
        self.item_id
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
        if let Some(item_id) = self.item_id {
            write!(f, " (item_id: {})", item_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for itemdb storage failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ItemDbError {
    /// The backing store rejected or failed a statement
    #[error("Storage error during {op}: {message}")]
    Storage { op: String, message: String },

    /// Filesystem failure while preparing the store
    #[error("I/O error during {op}: {message}")]
    Io { op: String, message: String },
}

impl From<ItemDbError> for ExError {
    fn from(err: ItemDbError) -> Self {
        match err {
            ItemDbError::Storage { op, message } => ExError::new(ExErrorKind::Persistence)
                .with_op(op)
                .with_message(message),

            ItemDbError::Io { op, message } => ExError::new(ExErrorKind::Io)
                .with_op(op)
                .with_message(message),
        }
    }
}
