//! A packed snowflake together with the codec that interprets it

use std::fmt;

use chrono::{DateTime, Utc};

use crate::codec::SnowflakeCodec;
use crate::layout::Field;
use crate::structure::SnowflakeStructure;

/// A 64-bit snowflake bound to the codec (epoch) that produced it
///
/// Setters mutate the packed value in place. Every setter truncates its
/// input to the field width and leaves the other fields untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Snowflake {
    value: u64,
    codec: SnowflakeCodec,
}

impl Snowflake {
    #[inline(always)]
    pub(crate) const fn new(codec: SnowflakeCodec, value: u64) -> Self {
        Self { value, codec }
    }

    #[inline(always)]
    pub const fn value(&self) -> u64 {
        self.value
    }

    #[inline(always)]
    pub const fn codec(&self) -> SnowflakeCodec {
        self.codec
    }

    /// Absolute timestamp in milliseconds since the Unix epoch
    #[inline]
    pub fn timestamp(&self) -> i64 {
        self.codec.absolute(Field::TIMESTAMP.decode(self.value))
    }

    /// Timestamp field as stored, relative to the codec's epoch
    #[inline]
    pub fn relative_timestamp(&self) -> u64 {
        Field::TIMESTAMP.decode(self.value)
    }

    #[inline]
    pub fn internal_worker_id(&self) -> u8 {
        Field::WORKER_ID.decode(self.value) as u8
    }

    #[inline]
    pub fn internal_process_id(&self) -> u8 {
        Field::PROCESS_ID.decode(self.value) as u8
    }

    #[inline]
    pub fn increment(&self) -> u16 {
        Field::INCREMENT.decode(self.value) as u16
    }

    /// Store an absolute timestamp; the inverse of [`Snowflake::timestamp`]
    /// for any timestamp within 2^42 ms after the epoch
    pub fn set_timestamp(&mut self, timestamp: i64) {
        let relative = self.codec.relative(timestamp);
        self.set_relative_timestamp(relative);
    }

    /// Write the timestamp field's bits directly, with no epoch adjustment
    pub fn set_relative_timestamp(&mut self, relative: u64) {
        self.value = Field::TIMESTAMP.replace(self.value, relative);
    }

    pub fn set_internal_worker_id(&mut self, id: u32) {
        self.value = Field::WORKER_ID.replace(self.value, id.into());
    }

    pub fn set_internal_process_id(&mut self, id: u32) {
        self.value = Field::PROCESS_ID.replace(self.value, id.into());
    }

    pub fn set_increment(&mut self, increment: u64) {
        self.value = Field::INCREMENT.replace(self.value, increment);
    }

    /// Snapshot of all decoded fields
    pub fn structure(&self) -> SnowflakeStructure {
        self.codec.decompose(self.value)
    }

    /// Timestamp as a UTC date, `None` if it falls outside chrono's range
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp())
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl From<Snowflake> for u64 {
    fn from(snowflake: Snowflake) -> Self {
        snowflake.value
    }
}

impl From<Snowflake> for SnowflakeStructure {
    fn from(snowflake: Snowflake) -> Self {
        snowflake.structure()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SnowflakeFields, DISCORD_EPOCH};

    fn sample() -> Snowflake {
        SnowflakeCodec::new(DISCORD_EPOCH).from_raw(1073325901825187841)
    }

    #[test]
    fn test_getters() {
        let id = sample();
        assert_eq!(id.timestamp(), 1675971236426);
        assert_eq!(id.relative_timestamp(), 1675971236426 - 1420070400000);
        assert_eq!(id.internal_worker_id(), 2);
        assert_eq!(id.internal_process_id(), 2);
        assert_eq!(id.increment(), 1);
    }

    #[test]
    fn test_set_timestamp_is_symmetric() {
        let mut id = sample();
        id.set_timestamp(1700000000000);
        assert_eq!(id.timestamp(), 1700000000000);
        assert_eq!(id.internal_worker_id(), 2);
        assert_eq!(id.internal_process_id(), 2);
        assert_eq!(id.increment(), 1);
    }

    #[test]
    fn test_set_relative_timestamp_writes_raw_bits() {
        let mut id = sample();
        id.set_relative_timestamp(10);
        assert_eq!(id.value() >> 22, 10);
        assert_eq!(id.timestamp(), DISCORD_EPOCH + 10);
    }

    #[test]
    fn test_setters_mask_to_width() {
        let mut id = sample();
        id.set_internal_worker_id(37);
        id.set_internal_process_id(32);
        id.set_increment(4097);
        assert_eq!(id.internal_worker_id(), 5);
        assert_eq!(id.internal_process_id(), 0);
        assert_eq!(id.increment(), 1);
        assert_eq!(id.timestamp(), 1675971236426);
    }

    #[test]
    fn test_display_is_decimal() {
        assert_eq!(sample().to_string(), "1073325901825187841");
        assert_eq!(u64::from(sample()), 1073325901825187841);
    }

    #[test]
    fn test_datetime() {
        let codec = SnowflakeCodec::new(DISCORD_EPOCH);
        let id = codec.make(SnowflakeFields::new().with_timestamp(DISCORD_EPOCH));
        assert_eq!(
            id.datetime().unwrap().to_rfc3339(),
            "2015-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn test_ordering_follows_value() {
        let codec = SnowflakeCodec::new(0);
        assert!(codec.from_raw(1) < codec.from_raw(2));
    }
}
