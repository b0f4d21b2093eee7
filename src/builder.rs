use crate::error::Result;
use crate::instance::InstanceKind;
use crate::sweep::{Sweep, SweepConfig};

pub struct SweepBuilder {
    config: SweepConfig,
}

impl SweepBuilder {
    pub fn new() -> Self {
        Self {
            config: SweepConfig::default(),
        }
    }
    pub fn max_n(mut self, max_n: usize) -> Self {
        self.config.max_n = max_n;
        self
    }
    pub fn max_m(mut self, max_m: usize) -> Self {
        self.config.max_m = max_m;
        self
    }
    pub fn kind(mut self, kind: InstanceKind) -> Self {
        self.config.kind = kind;
        self
    }
    pub fn step(mut self, step: usize) -> Self {
        self.config.step = step;
        self
    }
    pub fn repetitions(mut self, repetitions: usize) -> Self {
        self.config.repetitions = repetitions;
        self
    }
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }
    pub fn build(self) -> Result<Sweep> {
        Sweep::new(self.config)
    }
}

impl Default for SweepBuilder {
    fn default() -> Self {
        Self::new()
    }
}
