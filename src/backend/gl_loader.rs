//! Strategies for turning a current GL context into a [Display] (loading the OpenGL function pointers and checking what the driver supports)
//!
//! Exactly one strategy is compiled in, picked by cargo feature. First match wins:
//! * `gl-loader-debug` - [DebugLoader]
//! * `gl-loader-unchecked` - [UncheckedLoader]
//! * neither - [CheckedLoader]
use glium::debug::DebugCallbackBehavior;
use glium::glutin::{self, PossiblyCurrent};
use glium::{Display, IncompatibleOpenGl};

pub type GlWindow = glutin::WindowedContext<PossiblyCurrent>;

/// Loads the OpenGL functions for a context that has already been made current
pub trait GlLoader {
    /// Name shown in logs and errors
    const NAME: &'static str;

    fn load(gl_window: GlWindow) -> Result<Display, IncompatibleOpenGl>;
}

/// Loads the functions and verifies the context supports everything glium needs
#[derive(Debug)]
pub struct CheckedLoader;

impl GlLoader for CheckedLoader {
    const NAME: &'static str = "checked";

    fn load(gl_window: GlWindow) -> Result<Display, IncompatibleOpenGl> {
        Display::from_gl_window(gl_window)
    }
}

/// Loads the functions without checking the context's version or extensions
#[derive(Debug)]
pub struct UncheckedLoader;

impl GlLoader for UncheckedLoader {
    const NAME: &'static str = "unchecked";

    fn load(gl_window: GlWindow) -> Result<Display, IncompatibleOpenGl> {
        // SAFETY: the context was made current on this thread by the caller, and nothing else uses it yet
        unsafe { Display::unchecked(gl_window) }
    }
}

/// Same checks as [CheckedLoader], but prints every message the driver's debug output produces
#[derive(Debug)]
pub struct DebugLoader;

impl GlLoader for DebugLoader {
    const NAME: &'static str = "debug";

    fn load(gl_window: GlWindow) -> Result<Display, IncompatibleOpenGl> {
        Display::with_debug(gl_window, DebugCallbackBehavior::PrintAll)
    }
}

#[cfg(feature = "gl-loader-debug")]
pub type SelectedLoader = DebugLoader;
#[cfg(all(feature = "gl-loader-unchecked", not(feature = "gl-loader-debug")))]
pub type SelectedLoader = UncheckedLoader;
#[cfg(not(any(feature = "gl-loader-unchecked", feature = "gl-loader-debug")))]
pub type SelectedLoader = CheckedLoader;
