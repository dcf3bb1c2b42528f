//! Field sets going into and coming out of the codec

use chrono::{DateTime, Utc};

/// Partial set of snowflake fields accepted by [`SnowflakeCodec::make`]
///
/// Any field left as `None` contributes zero bits. Out-of-range values are
/// truncated to the field width when packed.
///
/// [`SnowflakeCodec::make`]: crate::SnowflakeCodec::make
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnowflakeFields {
    /// Absolute timestamp in milliseconds since the Unix epoch
    pub timestamp: Option<i64>,
    pub internal_worker_id: Option<u32>,
    pub internal_process_id: Option<u32>,
    pub increment: Option<u64>,
}

impl SnowflakeFields {
    /// Empty field set, equivalent to `Default::default()`
    pub const fn new() -> Self {
        Self {
            timestamp: None,
            internal_worker_id: None,
            internal_process_id: None,
            increment: None,
        }
    }

    pub const fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub const fn with_internal_worker_id(mut self, id: u32) -> Self {
        self.internal_worker_id = Some(id);
        self
    }

    pub const fn with_internal_process_id(mut self, id: u32) -> Self {
        self.internal_process_id = Some(id);
        self
    }

    pub const fn with_increment(mut self, increment: u64) -> Self {
        self.increment = Some(increment);
        self
    }
}

/// Decoded snapshot of every field in a snowflake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnowflakeStructure {
    /// Absolute timestamp in milliseconds since the Unix epoch
    pub timestamp: i64,
    pub internal_worker_id: u8,
    pub internal_process_id: u8,
    pub increment: u16,
}

impl SnowflakeStructure {
    /// Timestamp as a UTC date, `None` if it falls outside chrono's range
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp)
    }
}

impl From<SnowflakeStructure> for SnowflakeFields {
    fn from(structure: SnowflakeStructure) -> Self {
        SnowflakeFields::new()
            .with_timestamp(structure.timestamp)
            .with_internal_worker_id(structure.internal_worker_id.into())
            .with_internal_process_id(structure.internal_process_id.into())
            .with_increment(structure.increment.into())
    }
}
