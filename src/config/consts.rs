// src/config/consts.rs

// Default local root: the published site directory
pub const DEFAULT_DATA_DIR: &str = "docs";

// Net config
pub const DEFAULT_HTTP_PORT: u16 = 80;
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "classement/0.2";

// Table shape
pub const FIXED_COLUMNS: usize = 3; // Pilote, Rang, Points
pub const RANK_COLUMN: usize = 1;
pub const POINTS_COLUMN: usize = 2;
pub const MIN_CELLS: usize = 3;

// Historique pager
pub const YEARS_PER_PAGE: usize = 10;

// Local state
pub const LOG_FILE: &str = ".store/debug.log";
