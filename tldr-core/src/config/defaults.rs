// Single source of truth for all default values.

// --- Ranking ---
pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_TOLERANCE: f64 = 0.0001;
pub const DEFAULT_THRESHOLD: f64 = 0.001;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

// --- Deduplication ---
pub const DEFAULT_SENTENCE_DISTANCE_THRESHOLD: f64 = 0.95;

// --- Output ---
pub const DEFAULT_MAX_CHARACTERS: usize = 0; // 0 = unlimited

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = true;
