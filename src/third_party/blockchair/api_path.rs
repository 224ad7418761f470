use const_format::concatcp;

// Root
pub const BLOCKCHAIR_API_URL: &str = "https://api.blockchair.com";

// Paths
pub const BLOCKCHAIR_STATS_API_PATH: &str = "/zcash/stats";

// Endpoints
pub const BLOCKCHAIR_STATS_API: &str = concatcp!(BLOCKCHAIR_API_URL, BLOCKCHAIR_STATS_API_PATH);
