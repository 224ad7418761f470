use const_format::concatcp;

// Root
pub const CHAIN_TIP_API_URL: &str = "https://zcash.blockchain.saltlending.com";

// Paths
pub const CHAIN_TIP_API_PATH: &str = "/blocks/tip";

// Endpoints
pub const CHAIN_TIP_API: &str = concatcp!(CHAIN_TIP_API_URL, CHAIN_TIP_API_PATH);
