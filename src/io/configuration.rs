//! Engine constants and runtime configuration defaults

// Physical size of one filet square
/// Width of one grid cell in centimeters
pub const CELL_WIDTH_CM: f64 = 1.0;
/// Height of one grid cell in centimeters (filet squares are slightly shorter than wide)
pub const CELL_HEIGHT_CM: f64 = 0.9;

// Accepted physical dimensions for a new chart
/// Smallest accepted chart width in centimeters
pub const MIN_WIDTH_CM: f64 = 8.0;
/// Largest accepted chart width in centimeters
pub const MAX_WIDTH_CM: f64 = 200.0;
/// Smallest accepted chart height in centimeters
pub const MIN_HEIGHT_CM: f64 = 7.2;
/// Largest accepted chart height in centimeters
pub const MAX_HEIGHT_CM: f64 = 180.0;

/// Smallest grid dimension in cells
pub const MIN_GRID_CELLS: usize = 8;
/// Largest grid dimension in cells
pub const MAX_GRID_CELLS: usize = 200;

// Motif parameter ranges
/// Smallest motif size multiplier
pub const MIN_MOTIF_SIZE: f64 = 0.1;
/// Largest motif size multiplier
pub const MAX_MOTIF_SIZE: f64 = 1.2;
/// Size change applied by one resize step
pub const MOTIF_SIZE_STEP: f64 = 0.1;
/// Default motif size multiplier
pub const DEFAULT_MOTIF_SIZE: f64 = 1.0;
/// Default luminance threshold for ink detection
pub const DEFAULT_THRESHOLD: u8 = 128;
/// Lowest motif position as a percentage of the grid
pub const MIN_POSITION_PERCENT: f64 = -50.0;
/// Highest motif position as a percentage of the grid
pub const MAX_POSITION_PERCENT: f64 = 150.0;
/// Offset applied to both axes when duplicating a motif
pub const DUPLICATE_OFFSET_PERCENT: f64 = 5.0;

// Rasterization
/// Pixels (and grid cells) per unit of motif size
pub const RASTER_PIXELS_PER_SIZE: f64 = 25.0;
/// Smallest raster footprint edge
pub const MIN_RASTER_SIZE: u32 = 5;
/// Largest raster footprint edge
pub const MAX_RASTER_SIZE: u32 = 100;
/// Pixels with alpha below this value are transparent
pub const ALPHA_CUTOFF: u8 = 128;
/// Rec. 601 luma weights for red, green and blue
pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

// Yarn consumption
/// Grams of yarn per square centimeter for a dense grid
pub const DENSE_GRAMS_PER_CM2: f64 = 0.209;
/// Grams of yarn per square centimeter for an open grid
pub const OPEN_GRAMS_PER_CM2: f64 = 0.194;
/// Mass of one skein in grams
pub const SKEIN_GRAMS: f64 = 50.0;

// Session behavior
/// Maximum number of undo snapshots retained
pub const HISTORY_CAPACITY: usize = 50;
/// Quiet period before a regeneration pass runs
pub const REGENERATION_DEBOUNCE_MS: u64 = 300;
/// How long a regeneration pass waits for pending decodes
pub const DECODE_WAIT_MS: u64 = 5_000;
/// How long a batch export waits for motif decodes before giving up
pub const BATCH_DECODE_WAIT_MS: u64 = 60_000;

// Output settings
/// Default edge length of one exported cell in pixels
pub const DEFAULT_CELL_PIXELS: u32 = 12;
/// Suffix added to front-side chart images
pub const FRONT_SUFFIX: &str = "_front";
/// Suffix added to back-side chart images
pub const BACK_SUFFIX: &str = "_back";
/// Suffix added to summary files
pub const SUMMARY_SUFFIX: &str = "_summary";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
