//! Opens a native window with an OpenGL context, bootstraps Dear ImGui on it, and bridges platform input into a per-frame cycle.
//!
//! Start at [window::Window]
pub mod backend;
pub mod config;
pub mod gui;
pub mod helper;
pub mod window;
