//! Tunable constants shared across the geometry kernel and the search engine.
//!
//! These double as the stable interface described for callers embedding this
//! crate: changing them changes solver behavior and fingerprint stability,
//! so they are plain `pub const`s rather than a runtime-configurable struct.

/// Inverse of the coordinate rounding tolerance used by fingerprints.
pub const HASH_PRECISION: f64 = 1e8;

/// Mixing constant used to combine rounded coordinates into one fingerprint.
pub const PRIME: i64 = 19_260_817;

/// Coordinate/value tolerance below which two numbers are considered equal.
pub const TOLERANCE: f64 = 1e-8;

/// Points with either coordinate beyond this magnitude are invisible to the
/// board (treated as points "at infinity" and silently discarded).
pub const MAX_POINT_COORD: f64 = 1e3;

/// Half-range used when sampling a random point on a curve during bootstrap.
pub const RANDOM_POINT_RANGE: f64 = 10.0;

/// Side length, in pixels, of rendered PNG output.
pub const IMAGE_SIZE: u32 = 1000;

/// When true, the solver checks the target against the board at every depth
/// rather than only at the leaves of the tool sequence.
pub const EARLY_STOP: bool = true;

/// Upper bound on the number of `add_*_trace` journal entries a board may
/// accumulate before it must be unwound. Matches the longest tool sequence a
/// puzzle in this crate's library prescribes.
pub const MAX_SEQUENCE_LENGTH: usize = 16;
