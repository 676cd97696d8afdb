pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod logging;
pub mod models;

pub use auth::LockfileData;
pub use client::LcuClient;
pub use error::LcuError;
pub use models::summoner::CurrentSummoner;
