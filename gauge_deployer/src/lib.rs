#![no_std]

pub mod errors;
pub mod events;
pub mod registry;
pub mod salt;
mod storage;

pub use crate::registry::{GaugeRecord, GaugeRegistry, RegistryKind};
pub use crate::salt::{default_salt, effective_salt, predict_address};
