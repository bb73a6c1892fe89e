//! Canonical schema constants for structured logging and events
//!
//! Every log line and error report uses these keys so that captured events
//! can be asserted on without string drift.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Entity identifiers
pub const FIELD_UID: &str = "uid";
pub const FIELD_TAG_ID: &str = "tag_id";

// Diff shape
pub const FIELD_CHANGED_FIELDS: &str = "changed_fields";
pub const FIELD_SERVICE_MODE: &str = "service_mode";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
