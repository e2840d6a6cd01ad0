//! Error types for window initialisation

use std::path::PathBuf;

use thiserror::Error;

/// Why [Window::init](crate::window::Window::init) failed.
///
/// None of these are retried internally; the host decides whether to log and exit, or retry with a different [WindowConfig](crate::config::window_config::WindowConfig)
#[derive(Error, Debug)]
pub enum InitError {
    /// The windowing library could not create the event loop, the window, or the GL context
    #[error("platform initialisation failed: {0}")]
    Platform(String),

    /// The GL context was created, but the GL loader could not load a usable set of OpenGL functions from it
    #[error("failed to initialise OpenGL loader ({loader}): {reason}")]
    GlLoader { loader: &'static str, reason: String },

    /// The GUI renderer (shaders, font atlas texture) could not be created
    #[error("failed to create GUI renderer: {0}")]
    Renderer(String),

    /// A configured font file could not be read
    #[error("could not load font file {path:?}")]
    Font {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
