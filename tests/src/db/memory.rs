use lateral::{
    driver::{Capability, Driver},
    Result,
};
use lateral_driver_memory::Memory;

use crate::Setup;

#[derive(Debug, Default)]
pub struct SetupMemory;

impl SetupMemory {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Setup for SetupMemory {
    async fn connect(&self) -> Result<Box<dyn Driver>> {
        Ok(Box::new(Memory::new()))
    }

    fn capability(&self) -> &Capability {
        &Capability::MEMORY
    }
}
