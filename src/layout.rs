//! Bit layout of a packed snowflake
//!
//! ```text
//!  63                                         22 21     17 16     12 11          0
//! +---------------------------------------------+---------+---------+-------------+
//! |        relative timestamp (42 bits)         | worker  | process |  increment  |
//! +---------------------------------------------+---------+---------+-------------+
//! ```

/// Width of the relative timestamp field
pub const TIMESTAMP_BITS: u32 = 42;
/// Width of the internal worker id field
pub const WORKER_ID_BITS: u32 = 5;
/// Width of the internal process id field
pub const PROCESS_ID_BITS: u32 = 5;
/// Width of the increment field
pub const INCREMENT_BITS: u32 = 12;

pub const INCREMENT_SHIFT: u32 = 0;
pub const PROCESS_ID_SHIFT: u32 = INCREMENT_SHIFT + INCREMENT_BITS;
pub const WORKER_ID_SHIFT: u32 = PROCESS_ID_SHIFT + PROCESS_ID_BITS;
pub const TIMESTAMP_SHIFT: u32 = WORKER_ID_SHIFT + WORKER_ID_BITS;

/// Field masks, relative to the field (not shifted)
pub const TIMESTAMP_MASK: u64 = mask(TIMESTAMP_BITS);
pub const WORKER_ID_MASK: u64 = mask(WORKER_ID_BITS);
pub const PROCESS_ID_MASK: u64 = mask(PROCESS_ID_BITS);
pub const INCREMENT_MASK: u64 = mask(INCREMENT_BITS);

/// Largest value each narrow field can hold
pub const MAX_WORKER_ID: u8 = WORKER_ID_MASK as u8;
pub const MAX_PROCESS_ID: u8 = PROCESS_ID_MASK as u8;
pub const MAX_INCREMENT: u16 = INCREMENT_MASK as u16;

#[inline]
const fn mask(bits: u32) -> u64 {
    (1u64 << bits) - 1
}

/// A single bit window inside the packed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Field {
    shift: u32,
    mask: u64,
}

impl Field {
    pub(crate) const TIMESTAMP: Field = Field::new(TIMESTAMP_SHIFT, TIMESTAMP_MASK);
    pub(crate) const WORKER_ID: Field = Field::new(WORKER_ID_SHIFT, WORKER_ID_MASK);
    pub(crate) const PROCESS_ID: Field = Field::new(PROCESS_ID_SHIFT, PROCESS_ID_MASK);
    pub(crate) const INCREMENT: Field = Field::new(INCREMENT_SHIFT, INCREMENT_MASK);

    const fn new(shift: u32, mask: u64) -> Self {
        Self { shift, mask }
    }

    /// The field's window positioned inside the packed value
    #[inline(always)]
    pub(crate) const fn window(self) -> u64 {
        self.mask << self.shift
    }

    /// Truncate `value` to the field width and move it into position
    #[inline(always)]
    pub(crate) const fn encode(self, value: u64) -> u64 {
        (value & self.mask) << self.shift
    }

    #[inline(always)]
    pub(crate) const fn decode(self, packed: u64) -> u64 {
        (packed & self.window()) >> self.shift
    }

    /// Clear exactly this field's window in `packed` and write `value` into it
    #[inline(always)]
    pub(crate) const fn replace(self, packed: u64, value: u64) -> u64 {
        (packed & !self.window()) | self.encode(value)
    }
}
