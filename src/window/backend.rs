use std::fmt::Debug;

use color_eyre::eyre;

use crate::gui::fonts::FontHandles;
use crate::window::input::PlatformEvent;

/// The platform + GUI + graphics stack a [Window](crate::window::Window) drives.
///
/// [GliumBackend](crate::backend::GliumBackend) is the real one (winit window, glium OpenGL context, [imgui]); tests substitute fakes.
///
/// All methods are called on the thread that created the backend. The call order every frame is
/// [drain_events](Backend::drain_events) → [begin_gui_frame](Backend::begin_gui_frame) → (host code) →
/// [render_gui](Backend::render_gui) → optionally [render_platform_windows](Backend::render_platform_windows) → [present](Backend::present)
pub trait Backend {
    /// Identity of a pressed key, as queued for the host
    type Key: Clone + Debug;
    /// Identity of a native window, used to tell the main window's close request apart from others
    type WindowId: Copy + Eq + Debug;
    /// Handle the host declares widgets through between `start_frame` and `end_frame`
    type Ui;

    fn main_window_id(&self) -> Self::WindowId;

    /// Drains every pending platform event in arrival order, without waiting for new ones.
    ///
    /// Each event must be handed to the GUI library *before* its translation is passed to `on_event`, whether or not the GUI consumes it
    fn drain_events(&mut self, on_event: &mut dyn FnMut(PlatformEvent<Self::Key, Self::WindowId>));

    /// Starts a new GUI frame and returns the handle to build it with
    fn begin_gui_frame(&mut self) -> eyre::Result<&mut Self::Ui>;

    /// Fonts loaded while bootstrapping the GUI
    fn font_handles(&self) -> FontHandles;

    /// Finalises the GUI draw data, clears the main window to `clear_colour` (premultiplied RGBA) and draws the GUI over it
    fn render_gui(&mut self, clear_colour: [f32; 4]) -> eyre::Result<()>;

    /// Updates and renders GUI windows that live in their own native windows.
    ///
    /// Must leave the main window's graphics context current when it returns
    fn render_platform_windows(&mut self) -> eyre::Result<()>;

    /// Swaps the main window's buffers. May block until the next vsync
    fn present(&mut self) -> eyre::Result<()>;

    /// Releases the GUI backends, GUI context, graphics context, window and platform library, in that order
    fn shutdown(self)
    where
        Self: Sized;
}
