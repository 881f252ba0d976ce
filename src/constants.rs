//! Shared constants and defaults

/// Average adult reading speed used for estimates
pub const WORDS_PER_MINUTE: usize = 200;

/// Rate assigned to the base currency of a rate snapshot
pub const BASE_RATE: f64 = 1.0;

/// Process exit status on any reported failure
pub const EXIT_FAILURE: i32 = 1;
