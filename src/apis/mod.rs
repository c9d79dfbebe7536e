/// External API clients
pub mod client;
pub mod coinmarketcap;
