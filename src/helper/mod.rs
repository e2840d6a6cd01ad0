//! Small helpers shared by the rest of the crate: logging setup and panic payload conversion
pub mod logging;
pub mod panic_payload;
