mod config;
mod credential;
mod entities;
mod error;
mod request;
mod response;

pub use config::*;
pub use credential::*;
pub use entities::*;
pub use error::*;
pub use request::*;
pub use response::*;
