/// Occupancy at or above which a room is drawn fully red.
pub const SATURATION_OCCUPANCY: f64 = 10.0;

/// Alpha applied to every overlay fill (50% translucency).
pub const OVERLAY_ALPHA: u8 = 128;

/// Multiplicative factor applied by one zoom step.
pub const ZOOM_STEP: f64 = 1.2;

/// Smallest allowed view scale.
pub const MIN_SCALE: f64 = 1.0;

/// Largest allowed view scale.
pub const MAX_SCALE: f64 = 3.0;

/// Number of hourly snapshots in a day. Valid hours are `0..HOURS_PER_DAY`.
pub const HOURS_PER_DAY: u8 = 24;

/// Last selectable hour.
pub const LAST_HOUR: u8 = HOURS_PER_DAY - 1;

/// Default period between playback ticks.
pub const DEFAULT_PLAYBACK_INTERVAL_MS: u64 = 1000;

/// Default bounding box width used to fit the floor plan.
pub const DEFAULT_MAX_WIDTH: u32 = 1600;

/// Default bounding box height used to fit the floor plan.
pub const DEFAULT_MAX_HEIGHT: u32 = 800;

/// Largest display width or height the overlay rasteriser accepts.
pub const MAX_DISPLAY_DIMENSION: u32 = u16::MAX as u32;

/// Minimum number of rooms in one hour before overlays are rendered with Rayon.
pub const PARALLEL_ROOM_THRESHOLD: usize = 8;
