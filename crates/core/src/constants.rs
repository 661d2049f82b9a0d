/// Storage key for the goal collection. The suffix is the schema generation;
/// blobs stored under other generations are never read.
pub const GOALS_STORAGE_KEY: &str = "gaman-goals-v1";

/// Quick-add contribution amounts shown on every goal card (yen)
pub const DEFAULT_QUICK_ADD_AMOUNTS: [u64; 3] = [100, 500, 1000];

/// Length of a generated goal id
pub const GOAL_ID_LENGTH: usize = 16;

/// Number of history entries shown on a goal card
pub const HISTORY_SUMMARY_LEN: usize = 3;

/// Celebration timings (milliseconds)
pub const CELEBRATION_CLEAR_AFTER_MS: u64 = 2800;
pub const CELEBRATION_BANNER_MS: u64 = 2200;

/// Particle count bounds and the viewport area that yields one particle
pub const MIN_PARTICLES: usize = 60;
pub const MAX_PARTICLES: usize = 220;
pub const AREA_PER_PARTICLE: u64 = 25_000;

/// Particles below `height + PARTICLE_EXIT_MARGIN` are dropped
pub const PARTICLE_EXIT_MARGIN: f64 = 20.0;

pub const CONFETTI_COLORS: [&str; 5] = ["#22c55e", "#38bdf8", "#f59e0b", "#ef4444", "#a78bfa"];

/// Press-and-hold repeat timings (milliseconds)
pub const HOLD_INITIAL_DELAY_MS: u64 = 400;
pub const HOLD_REPEAT_INTERVAL_MS: u64 = 120;

/// Placeholder shown when a goal has no photo
pub const THUMBNAIL_PLACEHOLDER: &str = "📦";

/// Marker appended to the title of a completed goal
pub const COMPLETED_MARKER: &str = " ✅";
