//! Sequential snowflake generator
//!
//! - `time` - Wall-clock time utilities

mod time;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::codec::SnowflakeCodec;
use crate::config::GeneratorConfig;
use crate::layout::{INCREMENT_MASK, MAX_PROCESS_ID, MAX_WORKER_ID};
use crate::snowflake::Snowflake;
use crate::structure::SnowflakeFields;

pub(crate) use time::unix_time_ms;

/// Something that produces a fresh snowflake on every call
pub trait SnowflakeGenerator {
    fn produce(&self) -> Snowflake;
}

impl<G: SnowflakeGenerator + ?Sized> SnowflakeGenerator for &G {
    fn produce(&self) -> Snowflake {
        (**self).produce()
    }
}

impl<G: SnowflakeGenerator + ?Sized> SnowflakeGenerator for Arc<G> {
    fn produce(&self) -> Snowflake {
        (**self).produce()
    }
}

/// Stamps the current time, a fixed worker id, a fixed process id and an
/// auto-incrementing counter into each snowflake
///
/// The counter is atomic, so a generator shared between threads never hands
/// out the same increment twice. It is never reset and wraps past 4095 when
/// packed; nothing prevents two ids in the same millisecond from colliding
/// after 4096 calls.
#[derive(Debug)]
pub struct DefaultGenerator {
    codec: SnowflakeCodec,
    worker_id: u32,
    process_id: u32,
    start: u64,
    increment: AtomicU64,
}

impl DefaultGenerator {
    /// Create with default configuration: worker 0 and the OS process id
    pub fn new(codec: SnowflakeCodec) -> Self {
        Self::with_config(codec, GeneratorConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(codec: SnowflakeCodec, config: GeneratorConfig) -> Self {
        if config.worker_id() > u32::from(MAX_WORKER_ID)
            || config.process_id() > u32::from(MAX_PROCESS_ID)
        {
            tracing::debug!(
                worker_id = config.worker_id(),
                process_id = config.process_id(),
                "generator ids exceed 5 bits and will be truncated"
            );
        }
        tracing::trace!(epoch = codec.epoch(), ?config, "created snowflake generator");

        Self {
            codec,
            worker_id: config.worker_id(),
            process_id: config.process_id(),
            start: config.starting_increment(),
            increment: AtomicU64::new(config.starting_increment()),
        }
    }

    /// Produce the next snowflake
    ///
    /// Never fails. The counter advances by exactly one per call.
    pub fn produce(&self) -> Snowflake {
        let timestamp = unix_time_ms();
        let increment = self.increment.fetch_add(1, Ordering::Relaxed);
        if increment != self.start && increment & INCREMENT_MASK == 0 {
            tracing::trace!(increment, "snowflake increment wrapped to zero");
        }

        self.codec.make(
            SnowflakeFields::new()
                .with_timestamp(timestamp)
                .with_internal_worker_id(self.worker_id)
                .with_internal_process_id(self.process_id)
                .with_increment(increment),
        )
    }

    #[inline(always)]
    pub fn codec(&self) -> SnowflakeCodec {
        self.codec
    }

    #[inline(always)]
    pub fn internal_worker_id(&self) -> u32 {
        self.worker_id
    }

    #[inline(always)]
    pub fn internal_process_id(&self) -> u32 {
        self.process_id
    }

    /// Counter value the next call to [`produce`](Self::produce) will use
    pub fn next_increment(&self) -> u64 {
        self.increment.load(Ordering::Relaxed)
    }

    /// `true` until the first snowflake has been produced
    pub fn is_fresh(&self) -> bool {
        self.next_increment() == self.start
    }
}

impl SnowflakeGenerator for DefaultGenerator {
    fn produce(&self) -> Snowflake {
        DefaultGenerator::produce(self)
    }
}
