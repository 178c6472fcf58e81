//! Inter-stage latches, control signals, and hazard logic.

pub mod hazards;
pub mod latches;
pub mod signals;

pub use latches::{ExMem, IdEx, IfId, MemWb};
