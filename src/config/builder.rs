//! GeneratorConfig builder for constructing configuration

use super::GeneratorConfig;

/// Default configuration values
pub(super) const DEFAULT_WORKER_ID: u32 = 0;
pub(super) const DEFAULT_STARTING_INCREMENT: u64 = 0;

/// Builder for GeneratorConfig
#[derive(Debug)]
pub struct GeneratorConfigBuilder {
    pub(super) worker_id: u32,
    pub(super) process_id: u32,
    pub(super) starting_increment: u64,
}

impl GeneratorConfigBuilder {
    /// Create a new builder: worker 0, the current OS process id, increment 0
    pub fn new() -> Self {
        Self {
            worker_id: DEFAULT_WORKER_ID,
            process_id: std::process::id(),
            starting_increment: DEFAULT_STARTING_INCREMENT,
        }
    }

    /// Set the internal worker id (only the low 5 bits are encoded)
    pub const fn worker_id(mut self, id: u32) -> Self {
        self.worker_id = id;
        self
    }

    /// Override the internal process id (only the low 5 bits are encoded)
    pub const fn process_id(mut self, id: u32) -> Self {
        self.process_id = id;
        self
    }

    /// Set the first increment the generator hands out
    pub const fn starting_increment(mut self, increment: u64) -> Self {
        self.starting_increment = increment;
        self
    }

    /// Build the final GeneratorConfig
    pub fn build(self) -> GeneratorConfig {
        GeneratorConfig::from_builder(self)
    }
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
