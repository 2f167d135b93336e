//! The major components are:
//! * `clients`: a thin wrapper over a `redis` connection issuing the commands the script needs.
//! * `script`: the fixed PING / SET / GET / HSET sequence.
//! * `error`: failures the script can abort on.

#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]

pub mod clients;
pub use clients::Client;

mod error;
pub use error::Error;

pub mod script;
pub use script::Report;

/// Default host the script connects to.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port that a redis server listens on.
pub const DEFAULT_PORT: u16 = 6379;

pub type Result<T> = std::result::Result<T, Error>;
