//! Configuration for the default generator

mod builder;

pub use builder::GeneratorConfigBuilder;

/// Fixed inputs of a [`DefaultGenerator`](crate::DefaultGenerator)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    worker_id: u32,
    process_id: u32,
    starting_increment: u64,
}

impl GeneratorConfig {
    /// Create config from builder
    pub(crate) fn from_builder(b: GeneratorConfigBuilder) -> Self {
        Self {
            worker_id: b.worker_id,
            process_id: b.process_id,
            starting_increment: b.starting_increment,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    #[inline(always)]
    pub const fn worker_id(&self) -> u32 {
        self.worker_id
    }

    #[inline(always)]
    pub const fn process_id(&self) -> u32 {
        self.process_id
    }

    #[inline(always)]
    pub const fn starting_increment(&self) -> u64 {
        self.starting_increment
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfigBuilder::new().build()
    }
}
