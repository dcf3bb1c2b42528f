//! Epoch codec: packs field sets into snowflakes and back

use crate::config::GeneratorConfig;
use crate::error::{Result, SnowflakeError};
use crate::generator::DefaultGenerator;
use crate::layout::Field;
use crate::snowflake::Snowflake;
use crate::structure::{SnowflakeFields, SnowflakeStructure};

/// Converts between structured fields and packed 64-bit snowflakes,
/// anchored to one epoch
///
/// The codec is a plain value; copy it freely and share it across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SnowflakeCodec {
    epoch: i64,
}

impl SnowflakeCodec {
    /// Create a codec for the given epoch in milliseconds since the Unix epoch
    ///
    /// Any value is accepted, including negative or future-dated epochs.
    pub const fn new(epoch: i64) -> Self {
        Self { epoch }
    }

    #[inline(always)]
    pub const fn epoch(&self) -> i64 {
        self.epoch
    }

    /// Wrap a raw packed value verbatim
    #[inline]
    pub const fn from_raw(&self, value: u64) -> Snowflake {
        Snowflake::new(*self, value)
    }

    /// Parse the decimal text form of a packed value
    ///
    /// Leading and trailing ASCII whitespace is ignored.
    pub fn parse(&self, text: &str) -> Result<Snowflake> {
        let value = parse_decimal(text)?;
        Ok(self.from_raw(value))
    }

    /// Build a snowflake from either a raw integer or its decimal text
    pub fn read<R: RawSnowflake>(&self, raw: R) -> Result<Snowflake> {
        Ok(self.from_raw(raw.into_raw()?))
    }

    /// Compose a snowflake from a partial field set
    ///
    /// Absent fields contribute zero bits. Present fields are truncated to
    /// their width, so `make` never fails. A timestamp earlier than the epoch
    /// wraps to the two's complement bit pattern of the negative offset.
    pub fn make(&self, fields: SnowflakeFields) -> Snowflake {
        let mut value = 0u64;
        if let Some(timestamp) = fields.timestamp {
            value |= Field::TIMESTAMP.encode(self.relative(timestamp));
        }
        if let Some(worker_id) = fields.internal_worker_id {
            value |= Field::WORKER_ID.encode(worker_id.into());
        }
        if let Some(process_id) = fields.internal_process_id {
            value |= Field::PROCESS_ID.encode(process_id.into());
        }
        if let Some(increment) = fields.increment {
            value |= Field::INCREMENT.encode(increment);
        }
        self.from_raw(value)
    }

    /// Decode every field of a packed value without wrapping it
    #[inline]
    pub fn decompose(&self, value: u64) -> SnowflakeStructure {
        SnowflakeStructure {
            timestamp: self.absolute(Field::TIMESTAMP.decode(value)),
            internal_worker_id: Field::WORKER_ID.decode(value) as u8,
            internal_process_id: Field::PROCESS_ID.decode(value) as u8,
            increment: Field::INCREMENT.decode(value) as u16,
        }
    }

    /// Generator bound to this codec, `internal_worker_id` and the OS process id
    pub fn default_generator(&self, internal_worker_id: u32) -> DefaultGenerator {
        let config = GeneratorConfig::builder()
            .worker_id(internal_worker_id)
            .build();
        self.generator_with_config(config)
    }

    pub fn generator_with_config(&self, config: GeneratorConfig) -> DefaultGenerator {
        DefaultGenerator::with_config(*self, config)
    }

    /// Offset of an absolute timestamp from the epoch, as field bits
    #[inline(always)]
    pub(crate) const fn relative(&self, timestamp: i64) -> u64 {
        timestamp.wrapping_sub(self.epoch) as u64
    }

    /// Absolute timestamp for a decoded relative field value
    #[inline(always)]
    pub(crate) const fn absolute(&self, relative: u64) -> i64 {
        (relative as i64).wrapping_add(self.epoch)
    }
}

/// Anything that can stand for a packed snowflake: the integer itself or
/// its decimal text
pub trait RawSnowflake {
    fn into_raw(self) -> Result<u64>;
}

impl RawSnowflake for u64 {
    #[inline]
    fn into_raw(self) -> Result<u64> {
        Ok(self)
    }
}

impl RawSnowflake for &str {
    fn into_raw(self) -> Result<u64> {
        parse_decimal(self)
    }
}

impl RawSnowflake for String {
    fn into_raw(self) -> Result<u64> {
        parse_decimal(&self)
    }
}

impl RawSnowflake for &String {
    fn into_raw(self) -> Result<u64> {
        parse_decimal(self)
    }
}

fn parse_decimal(text: &str) -> Result<u64> {
    text.trim_matches(|c: char| c.is_ascii_whitespace())
        .parse::<u64>()
        .map_err(|source| {
            tracing::debug!(input = text, error = %source, "rejected snowflake text");
            SnowflakeError::Parse {
                input: text.to_owned(),
                source,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DISCORD_EPOCH;

    #[test]
    fn test_new_stores_epoch() {
        assert_eq!(SnowflakeCodec::new(DISCORD_EPOCH).epoch(), DISCORD_EPOCH);
        assert_eq!(SnowflakeCodec::new(-5).epoch(), -5);
    }

    #[test]
    fn test_from_raw_is_verbatim() {
        let codec = SnowflakeCodec::new(DISCORD_EPOCH);
        assert_eq!(codec.from_raw(u64::MAX).value(), u64::MAX);
        assert_eq!(codec.from_raw(0).value(), 0);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let codec = SnowflakeCodec::new(0);
        assert_eq!(codec.parse(" 42\n").unwrap().value(), 42);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let codec = SnowflakeCodec::new(0);
        for input in ["", "abc", "-1", "1.5", "0x10", "18446744073709551616"] {
            match codec.parse(input) {
                Err(SnowflakeError::Parse { input: got, .. }) => assert_eq!(got, input),
                other => panic!("expected parse error for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_read_accepts_integer_and_text() {
        let codec = SnowflakeCodec::new(DISCORD_EPOCH);
        let from_int = codec.read(1073325901825187841u64).unwrap();
        let from_str = codec.read("1073325901825187841").unwrap();
        let from_string = codec.read(String::from("1073325901825187841")).unwrap();
        assert_eq!(from_int, from_str);
        assert_eq!(from_str, from_string);
    }

    #[test]
    fn test_read_accepts_borrowed_string() {
        let codec = SnowflakeCodec::new(DISCORD_EPOCH);
        let text = String::from(" 1073325901825187841\t");
        let id = codec.read(&text).unwrap();
        assert_eq!(id.value(), 1073325901825187841);
        assert!(codec.read(&String::from("12a")).is_err());
    }

    #[test]
    fn test_parse_keeps_unicode_whitespace() {
        let codec = SnowflakeCodec::new(0);
        // U+00A0 and U+3000 are whitespace, but not ASCII whitespace
        for input in ["\u{a0}42", "42\u{3000}"] {
            assert!(matches!(
                codec.parse(input),
                Err(SnowflakeError::Parse { .. })
            ));
        }
        assert_eq!(codec.parse("\r\n 42 \x0c").unwrap().value(), 42);
    }

    #[test]
    fn test_make_packs_each_field() {
        let codec = SnowflakeCodec::new(1000);
        let id = codec.make(
            SnowflakeFields::new()
                .with_timestamp(1003)
                .with_internal_worker_id(1)
                .with_internal_process_id(1)
                .with_increment(1),
        );
        assert_eq!(id.value(), (3 << 22) | (1 << 17) | (1 << 12) | 1);
    }

    #[test]
    fn test_make_before_epoch_wraps() {
        let codec = SnowflakeCodec::new(1000);
        let id = codec.make(SnowflakeFields::new().with_timestamp(999));
        assert_eq!(id.value() >> 22, (1u64 << 42) - 1);
        assert_eq!(id.value() & 0x3F_FFFF, 0);
    }

    #[test]
    fn test_decompose_matches_snowflake_structure() {
        let codec = SnowflakeCodec::new(DISCORD_EPOCH);
        let raw = 1073325901825187841u64;
        assert_eq!(codec.decompose(raw), codec.from_raw(raw).structure());
    }

    #[test]
    fn test_default_generator_binds_codec() {
        let codec = SnowflakeCodec::new(DISCORD_EPOCH);
        let generator = codec.default_generator(3);
        assert_eq!(generator.codec(), codec);
        assert_eq!(generator.internal_worker_id(), 3);
        assert_eq!(generator.internal_process_id(), std::process::id());
    }

    #[test]
    fn test_generator_with_config_binds_codec() {
        let codec = SnowflakeCodec::new(DISCORD_EPOCH);
        let config = GeneratorConfig::builder().worker_id(6).process_id(11).build();
        let id = codec.generator_with_config(config).produce();
        assert_eq!(id.codec(), codec);
        assert_eq!(id.internal_worker_id(), 6);
        assert_eq!(id.internal_process_id(), 11);
    }
}
