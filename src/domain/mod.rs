// Response envelope shared by both entry points
pub mod envelope;

// Domain-specific error types
pub mod errors;

// Request parsing and selectors
pub mod request;

// Helpers for synthetic values (rounding, month labels)
pub mod sampling;
