//! # snowcodec
//!
//! Encode, decode and generate 64-bit snowflakes measured from a configurable
//! epoch.
//!
//! Each snowflake packs four fields:
//! - 42-bit timestamp, in milliseconds since the codec's epoch
//! - 5-bit internal worker id
//! - 5-bit internal process id
//! - 12-bit increment
//!
//! ```
//! use snowcodec::{SnowflakeCodec, SnowflakeFields, DISCORD_EPOCH};
//!
//! let codec = SnowflakeCodec::new(DISCORD_EPOCH);
//! let id = codec.parse("1073325901825187841").unwrap();
//! assert_eq!(id.timestamp(), 1675971236426);
//!
//! let made = codec.make(SnowflakeFields::new().with_internal_worker_id(2));
//! assert_eq!(made.internal_worker_id(), 2);
//! ```

#![forbid(unsafe_code)]

mod codec;
mod config;
mod error;
mod generator;
pub mod layout;
mod snowflake;
mod structure;


use once_cell::sync::Lazy;

// Re-export main types
pub use codec::{RawSnowflake, SnowflakeCodec};
pub use config::{GeneratorConfig, GeneratorConfigBuilder};
pub use error::{Result, SnowflakeError};
pub use generator::{DefaultGenerator, SnowflakeGenerator};
pub use snowflake::Snowflake;
pub use structure::{SnowflakeFields, SnowflakeStructure};

/// Discord epoch, 2015-01-01T00:00:00Z
pub const DISCORD_EPOCH: i64 = 1420070400000;
/// ECRD epoch, 2021-02-23T09:00:00Z
pub const ECRD_EPOCH: i64 = 1614070800000;

pub static DISCORD_CODEC: SnowflakeCodec = SnowflakeCodec::new(DISCORD_EPOCH);
pub static ECRD_CODEC: SnowflakeCodec = SnowflakeCodec::new(ECRD_EPOCH);

/// Process-wide generator for the Discord epoch, worker 0, this process's id
pub static DISCORD_GENERATOR: Lazy<DefaultGenerator> =
    Lazy::new(|| DISCORD_CODEC.default_generator(0));

/// Process-wide generator for the ECRD epoch, worker 0, this process's id
pub static ECRD_GENERATOR: Lazy<DefaultGenerator> =
    Lazy::new(|| ECRD_CODEC.default_generator(0));
