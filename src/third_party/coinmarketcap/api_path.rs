use const_format::concatcp;

// Root
pub const CMC_API_URL: &str = "https://api.coinmarketcap.com";

// Paths
pub const CMC_DETAIL_API_PATH: &str = "/data-api/v3/cryptocurrency/detail";
pub const ZEC_ASSET_ID: &str = "1437";

// Endpoints
pub const CMC_DETAIL_API: &str = concatcp!(CMC_API_URL, CMC_DETAIL_API_PATH, "?id=", ZEC_ASSET_ID);
