#![no_std]

pub mod errors;
pub mod gate;
pub mod messenger;
pub mod types;

pub use crate::gate::require_messenger;
pub use crate::types::{GlobalPoint, Message, Payload, UserPoint};
