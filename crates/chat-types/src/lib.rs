pub mod auth;
pub mod config;
pub mod error;
pub mod user;

pub use auth::*;
pub use config::*;
pub use error::*;
pub use user::*;
