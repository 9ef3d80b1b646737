// Session timing constants
pub const TICK_INTERVAL_MS: u64 = 1000;

// Pairing games: how long a mismatched pair stays face up before flipping back
pub const MEMORY_REVERT_TICKS: u32 = 1;

// Minimax terminal scores
pub const ENGINE_WIN_SCORE: i32 = 10;
pub const ENGINE_LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

// Full credit for a solved level, in percent of its reward
pub const FULL_CREDIT_PERCENT: u32 = 100;

// Fallback seed for seeded content that does not specify one
pub const DEFAULT_CONTENT_SEED: u64 = 0x5EED_A7CA_DE00_0001;

// Save system constants
pub const PROGRESS_VERSION_MAGIC: u64 = 0x4152434144450001; // "ARCADE" + format 1
pub const PROGRESS_FILE_EXTENSION: &str = "progress";
pub const LEVELS_FILE_EXTENSION: &str = "json";
pub const APP_DIR_NAME: &str = "arcade";
