pub const DEFAULT_BASE_URL: &str = "https://backend.pixelheroes.io/playtomint";

// ENDPOINTS
pub const MISSION_LIST_PATH: &str = "/missionlist";
pub const MISSION_CLAIM_PATH: &str = "/missionRewardClaim";
pub const DAILY_KEY_CLAIM_PATH: &str = "/dailyClaimKey";

// FILES
pub const CONFIG_FILE_PATH: &str = "data/config.toml";
pub const TOKENS_FILE_PATH: &str = "data/tokens.txt";
pub const LOGS_DIR: &str = "logs";
pub const LOG_FILE_PREFIX: &str = "mission-claimer.log";

// Application-level codes carried in the response header
pub const STATUS_OK: i64 = 200;
pub const STATUS_ALREADY_DONE: i64 = 201;
pub const ALREADY_ACCOMPLISHED_MESSAGE: &str = "Mission already accomplished.";

// Missions with this status are already claimed and never sent for claiming
pub const MISSION_STATUS_EXCLUDED: i64 = 5;
