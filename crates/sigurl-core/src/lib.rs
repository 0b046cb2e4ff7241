//! Core types, configuration, and clock abstraction for SigUrl.
//!
//! This crate provides the building blocks shared by the URL signer and
//! verifier: the runtime configuration, the token and algorithm types, and
//! the time source used for expiry handling.

mod clock;
mod config;
mod error;
mod types;

pub use clock::{
    Clock, FixedClock, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SystemClock,
    now_plus_days, now_plus_hours, now_plus_minutes,
};
pub use config::SigUrlConfig;
pub use error::{SigUrlError, SigUrlResult};
pub use types::{ParamNames, SignatureAlgorithm, Token};
