pub mod client;

pub use client::StatsClient;
