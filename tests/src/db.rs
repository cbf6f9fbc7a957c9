#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "postgresql")]
pub mod postgresql;
