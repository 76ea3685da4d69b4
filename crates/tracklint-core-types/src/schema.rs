//! Canonical schema constants for structured logging and events
//!
//! These constants keep log fields consistent across the checker, the git
//! adapter and the CLI.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";

// Lint subjects
pub const FIELD_PATH: &str = "path";
pub const FIELD_RULE: &str = "rule";
pub const FIELD_CHECK: &str = "check";

// Counters
pub const FIELD_FILE_COUNT: &str = "file_count";
pub const FIELD_VIOLATIONS: &str = "violations";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
