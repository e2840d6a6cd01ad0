//! The frame/input bridge: the per-frame cycle a host drives, and the input it collects along the way
//!
//! ```no_run
//! # fn main() -> color_eyre::eyre::Result<()> {
//! use imgui_window::config::window_config::WindowConfig;
//! use imgui_window::window::Window;
//!
//! let mut window = Window::init(&WindowConfig::default())?;
//! while !window.is_exiting() {
//!     let frame = window.start_frame()?;
//!     frame.heading("Hello");
//!     frame.text(&format!("{} keys pressed this frame", frame.keyboard_input().len()));
//!     window.end_frame()?;
//! }
//! window.destroy();
//! # Ok(())
//! # }
//! ```
use std::collections::VecDeque;
use std::ops::Deref;

use color_eyre::eyre::{self, bail, WrapErr};
use tracing::{debug, info, instrument, trace, trace_span, warn};

use crate::backend::GliumBackend;
use crate::config::gui_config::FontRole;
use crate::config::window_config::WindowConfig;
use crate::gui::fonts::FontHandles;
use crate::helper::logging::event_targets::{UI_PERFRAME_SPAMMY, UI_USER_EVENT};

pub mod backend;
pub mod error;
pub mod input;

pub use backend::Backend;
pub use error::InitError;
pub use input::{InputQueues, PlatformEvent};

/// Per-frame behaviour fixed at initialisation
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameSettings {
    /// Premultiplied RGBA the main window is cleared to each frame
    pub clear_colour: [f32; 4],
    /// Whether detached GUI windows are rendered each frame
    pub viewports: bool,
    /// Whether committed text is collected into the text buffer
    pub text_input: bool,
}

impl From<&WindowConfig> for FrameSettings {
    fn from(config: &WindowConfig) -> Self {
        Self {
            clear_colour: config.premultiplied_clear_colour(),
            viewports: config.gui.viewports,
            text_input: config.gui.text_input,
        }
    }
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self::from(&WindowConfig::default())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum FramePhase {
    Idle,
    InFrame,
}

/// A window with a GUI on it, and the input collected for the current frame.
///
/// # Lifecycle
/// [init](Window::init) (or [with_backend](Window::with_backend)) → any number of [start_frame](Window::start_frame)/[end_frame](Window::end_frame) pairs → [destroy](Window::destroy).
///
/// The window never stops itself: once [is_exiting](Window::is_exiting) returns `true` it is up to the host to leave its loop and call [destroy](Window::destroy)
pub struct Window<B: Backend> {
    backend: B,
    main_window: B::WindowId,
    settings: FrameSettings,
    /// Set once a quit or main-window close is seen, never cleared
    exiting: bool,
    input: InputQueues<B::Key>,
    phase: FramePhase,
    frame_number: u64,
}

impl Window<GliumBackend> {
    /// Opens the native window, creates its OpenGL context and bootstraps the GUI on it
    #[instrument(skip_all, fields(title = %config.title))]
    pub fn init(config: &WindowConfig) -> Result<Self, InitError> {
        let backend = GliumBackend::init(config)?;
        Ok(Self::with_backend(backend, FrameSettings::from(config)))
    }
}

impl<B: Backend> Window<B> {
    /// Wraps an already initialised backend
    pub fn with_backend(backend: B, settings: FrameSettings) -> Self {
        let main_window = backend.main_window_id();
        debug!(?main_window, ?settings, "window ready");
        Self {
            backend,
            main_window,
            settings,
            exiting: false,
            input: InputQueues::default(),
            phase: FramePhase::Idle,
            frame_number: 0,
        }
    }

    /// Whether a quit or close of the main window has been seen. Once `true`, stays `true`
    pub fn is_exiting(&self) -> bool {
        self.exiting
    }

    /// Keys pressed before the current frame started, oldest first. Empty outside of a frame
    pub fn keyboard_input(&self) -> &VecDeque<B::Key> {
        self.input.keyboard()
    }

    /// Text committed before the current frame started. Empty outside of a frame
    pub fn text_input(&self) -> &str {
        self.input.text()
    }

    pub fn settings(&self) -> &FrameSettings {
        &self.settings
    }

    /// Number of frames completed so far
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Drains pending input and starts a new GUI frame.
    ///
    /// Every pending event is forwarded to the GUI; quit/close requests set the exit flag, key presses and committed text are queued for the host.
    /// Never waits for events. Must be followed by [end_frame](Window::end_frame) before it's called again
    pub fn start_frame(&mut self) -> eyre::Result<Frame<'_, B>> {
        if self.phase == FramePhase::InFrame {
            bail!("start_frame called twice without end_frame (frame {})", self.frame_number);
        }
        let frame_number = self.frame_number;
        let _span =
            trace_span!(target: UI_PERFRAME_SPAMMY, "start_frame", frame = frame_number).entered();

        let Self {
            backend,
            main_window,
            settings,
            exiting,
            input,
            ..
        } = self;
        let mut event_count = 0_usize;
        backend.drain_events(&mut |event| {
            event_count += 1;
            apply_event(event, *main_window, settings.text_input, exiting, input);
        });
        trace!(
            target: UI_PERFRAME_SPAMMY,
            event_count,
            keys = self.input.keyboard().len(),
            "drained events"
        );

        let fonts = self.backend.font_handles();
        let ui = match self.backend.begin_gui_frame() {
            Ok(ui) => ui,
            Err(report) => {
                // The host never gets to see this input, and it mustn't leak into the next frame
                self.input.clear();
                return Err(report.wrap_err(format!("could not begin gui frame {frame_number}")));
            }
        };
        self.phase = FramePhase::InFrame;

        Ok(Frame {
            ui,
            input: &self.input,
            fonts,
            exiting: self.exiting,
            frame_number,
        })
    }

    /// Clears the input queues, renders the GUI (including detached viewports, if enabled) and presents the frame
    pub fn end_frame(&mut self) -> eyre::Result<()> {
        if self.phase != FramePhase::InFrame {
            bail!("end_frame called without a matching start_frame (frame {})", self.frame_number);
        }
        let frame = self.frame_number;
        let _span = trace_span!(target: UI_PERFRAME_SPAMMY, "end_frame", frame).entered();

        self.input.clear();
        self.phase = FramePhase::Idle;

        self.backend
            .render_gui(self.settings.clear_colour)
            .wrap_err("failed to render gui")?;
        if self.settings.viewports {
            self.backend
                .render_platform_windows()
                .wrap_err("failed to render platform windows")?;
        }
        self.backend.present().wrap_err("failed to present frame")?;

        self.frame_number += 1;
        Ok(())
    }

    /// Releases the GUI, graphics context, window and platform library. Consumes the window, so it can only happen once
    #[instrument(skip_all, fields(frames = self.frame_number))]
    pub fn destroy(self) {
        if self.phase == FramePhase::InFrame {
            warn!("destroying window in the middle of frame {}", self.frame_number);
        }
        self.backend.shutdown();
        info!("window destroyed");
    }
}

/// Updates the bridge state for a single event
fn apply_event<K: std::fmt::Debug, W: Copy + Eq + std::fmt::Debug>(
    event: PlatformEvent<K, W>,
    main_window: W,
    collect_text: bool,
    exiting: &mut bool,
    input: &mut InputQueues<K>,
) {
    match event {
        PlatformEvent::Quit => {
            if !*exiting {
                info!("quit requested");
            }
            *exiting = true;
        }
        PlatformEvent::CloseRequested { window } if window == main_window => {
            if !*exiting {
                info!(?window, "main window close requested");
            }
            *exiting = true;
        }
        PlatformEvent::CloseRequested { window } => {
            trace!(target: UI_USER_EVENT, ?window, "ignoring close request for a non-main window");
        }
        PlatformEvent::KeyDown(key) => {
            trace!(target: UI_USER_EVENT, ?key, "key pressed");
            input.push_key(key);
        }
        PlatformEvent::TextInput(text) if collect_text => {
            trace!(target: UI_USER_EVENT, ?text, "text input");
            input.push_text(&text);
        }
        PlatformEvent::TextInput(_) | PlatformEvent::Other => {}
    }
}

/// Everything the host needs while declaring widgets for one frame
///
/// Derefs to the backend's [Ui](Backend::Ui); drop it before calling [Window::end_frame]
pub struct Frame<'a, B: Backend> {
    ui: &'a mut B::Ui,
    input: &'a InputQueues<B::Key>,
    fonts: FontHandles,
    exiting: bool,
    frame_number: u64,
}

impl<'a, B: Backend> Frame<'a, B> {
    pub fn ui(&self) -> &B::Ui {
        &*self.ui
    }

    pub fn ui_mut(&mut self) -> &mut B::Ui {
        &mut *self.ui
    }

    /// Keys pressed since the previous frame, oldest first
    pub fn keyboard_input(&self) -> &VecDeque<B::Key> {
        self.input.keyboard()
    }

    /// Text committed since the previous frame
    pub fn text_input(&self) -> &str {
        self.input.text()
    }

    pub fn is_exiting(&self) -> bool {
        self.exiting
    }

    pub fn fonts(&self) -> FontHandles {
        self.fonts
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}

impl<'a, B: Backend<Ui = imgui::Ui>> Frame<'a, B> {
    /// Draws a line of text in the heading font
    pub fn heading(&self, text: &str) {
        let _font = self.fonts.push(&*self.ui, FontRole::Heading);
        self.ui.text(text);
    }

    /// Draws a line of text in the normal (body) font
    pub fn text(&self, text: &str) {
        let _font = self.fonts.push(&*self.ui, FontRole::Normal);
        self.ui.text(text);
    }
}

impl<'a, B: Backend> Deref for Frame<'a, B> {
    type Target = B::Ui;

    fn deref(&self) -> &Self::Target {
        &*self.ui
    }
}
