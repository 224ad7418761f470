pub mod blockchair;
pub mod chain_tip;
pub mod coinmarketcap;
