// ===== oppgauge/src/consts.rs =====
/// Lowest rating a slider can express.
pub const RATING_MIN: i64 = 1;

/// Highest rating a slider can express.
pub const RATING_MAX: i64 = 5;

/// Neutral fallback used whenever a seed cell is missing or unusable.
pub const FALLBACK_RATING: i64 = 3;

/// Column names (trimmed, case-folded) that never become differentiators.
/// These hold computed results in the source spreadsheets, not criteria.
pub const RESERVED_COLUMNS: [&str; 2] = ["score", "total score"];
