//! The real [Backend]: a [winit](glium::glutin) window with a [glium] OpenGL context, and [imgui] on top
use std::panic;
use std::time::Instant;

use color_eyre::eyre::{self, eyre};
use glium::glutin::dpi::{LogicalSize, PhysicalPosition};
use glium::glutin::event::Event;
use glium::glutin::event_loop::{ControlFlow, EventLoop};
use glium::glutin::platform::run_return::EventLoopExtRunReturn;
use glium::glutin::window::{Window as OsWindow, WindowBuilder, WindowId};
use glium::{glutin, Display, Surface};
use imgui::{Context, Ui};
use imgui_glium_renderer::Renderer;
use imgui_winit_support::{HiDpiMode, WinitPlatform};
use tracing::{debug, debug_span, instrument, trace, warn};

use crate::backend::events::{EventTranslator, KeyStroke};
use crate::backend::gl_loader::{GlLoader, SelectedLoader};
use crate::backend::gl_profile::GlProfile;
use crate::config::window_config::WindowConfig;
use crate::gui;
use crate::gui::clipboard_integration::clipboard_init;
use crate::gui::fonts::FontHandles;
use crate::helper::logging::event_targets::{BACKEND_INIT, UI_PERFRAME_SPAMMY};
use crate::helper::panic_payload::panic_payload_message;
use crate::log_expr_val;
use crate::window::{Backend, InitError, PlatformEvent};

pub mod events;
pub mod gl_loader;
pub mod gl_profile;

/// Struct that encapsulates the window, GL context and GUI components
///
/// Fields are declared in the order they have to be torn down in
pub struct GliumBackend {
    /// The frame currently being drawn, between [render_gui](Backend::render_gui) and [present](Backend::present)
    frame: Option<glium::Frame>,
    /// The renderer that draws the GUI with OpenGL
    renderer: Renderer,
    platform: WinitPlatform,
    imgui: Context,
    display: Display,
    event_loop: EventLoop<()>,
    translator: EventTranslator,
    fonts: FontHandles,
    last_frame: Instant,
}

impl GliumBackend {
    /// Creates the window + GL context, loads OpenGL, and bootstraps the GUI
    #[instrument(skip_all)]
    pub fn init(config: &WindowConfig) -> Result<Self, InitError> {
        let started = Instant::now();

        let event_loop;
        let display;
        {
            let _span =
                debug_span!(target: BACKEND_INIT, "creating window and GL context").entered();
            // winit panics instead of returning errors when the platform can't give us an event loop
            trace!(target: BACKEND_INIT, "creating [winit] event loop");
            event_loop = panic::catch_unwind(EventLoop::new)
                .map_err(|payload| InitError::Platform(panic_payload_message(&payload)))?;

            let profile = log_expr_val!(GlProfile::for_target());
            trace!(target: BACKEND_INIT, "creating [glutin] context builder");
            let mut context_builder = glutin::ContextBuilder::new()
                .with_gl(profile.gl_request())
                .with_double_buffer(Some(true))
                .with_depth_buffer(24)
                .with_stencil_buffer(8)
                .with_vsync(config.vsync);
            if let Some(gl_profile) = profile.glutin_profile() {
                context_builder = context_builder.with_gl_profile(gl_profile);
            }

            trace!(target: BACKEND_INIT, "creating [winit] window builder");
            let [width, height] = log_expr_val!(config.size);
            let window_builder = WindowBuilder::new()
                .with_title(config.title.clone())
                .with_inner_size(LogicalSize::new(width, height))
                .with_resizable(config.resizable);

            trace!(target: BACKEND_INIT, "creating GL context");
            let gl_window = context_builder
                .build_windowed(window_builder, &event_loop)
                .map_err(|error| {
                    InitError::Platform(format!("could not create window with GL context: {error}"))
                })?;
            // SAFETY: the context was just created on this thread and isn't current anywhere else
            let gl_window = unsafe { gl_window.make_current() }.map_err(|(_, error)| {
                InitError::Platform(format!("could not make GL context current: {error}"))
            })?;

            trace!(target: BACKEND_INIT, loader = SelectedLoader::NAME, "loading OpenGL");
            display = SelectedLoader::load(gl_window).map_err(|error| InitError::GlLoader {
                loader: SelectedLoader::NAME,
                reason: error.to_string(),
            })?;
            let gl_version = display.get_opengl_version();
            debug!(
                target: BACKEND_INIT,
                loader = SelectedLoader::NAME,
                version = ?gl_version,
                glsl = profile.glsl_version,
                "OpenGL ready"
            );

            let gl_window = display.gl_window();
            let window = gl_window.window();
            if config.centred {
                centre_window(window);
            }
            window.set_ime_allowed(config.gui.text_input);
        }

        let mut imgui;
        let fonts;
        let mut platform;
        {
            let _span = debug_span!(target: BACKEND_INIT, "bootstrapping gui").entered();
            trace!(target: BACKEND_INIT, "creating [imgui] context");
            imgui = Context::create();
            fonts = gui::bootstrap(&mut imgui, &config.gui)?;

            match clipboard_init() {
                Ok(clipboard_backend) => {
                    trace!(target: BACKEND_INIT, "have clipboard support: {clipboard_backend:?}");
                    imgui.set_clipboard_backend(clipboard_backend);
                }
                Err(error) => {
                    warn!("could not initialise clipboard: {error}")
                }
            }

            trace!(target: BACKEND_INIT, "creating [winit] platform");
            platform = WinitPlatform::init(&mut imgui);
            let gl_window = display.gl_window();
            platform.attach_window(imgui.io_mut(), gl_window.window(), HiDpiMode::Default);
        }

        trace!(target: BACKEND_INIT, "creating [glium] renderer");
        let renderer = Renderer::init(&mut imgui, &display)
            .map_err(|error| InitError::Renderer(error.to_string()))?;

        let main_window = display.gl_window().window().id();
        debug!(
            target: BACKEND_INIT,
            "backend initialised in {}",
            humantime::format_duration(started.elapsed())
        );
        Ok(Self {
            frame: None,
            renderer,
            platform,
            imgui,
            display,
            event_loop,
            translator: EventTranslator::new(main_window, config.gui.text_input),
            fonts,
            last_frame: Instant::now(),
        })
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn imgui(&self) -> &Context {
        &self.imgui
    }
}

/// Moves `window` to the middle of the monitor it's on
fn centre_window(window: &OsWindow) {
    let Some(monitor) = window.current_monitor() else {
        trace!(target: BACKEND_INIT, "window has no monitor, not centring");
        return;
    };
    let monitor_size = monitor.size();
    let monitor_position = monitor.position();
    let window_size = window.outer_size();
    let position = PhysicalPosition::new(
        monitor_position.x + (monitor_size.width.saturating_sub(window_size.width) / 2) as i32,
        monitor_position.y + (monitor_size.height.saturating_sub(window_size.height) / 2) as i32,
    );
    trace!(target: BACKEND_INIT, ?position, "centring window");
    window.set_outer_position(position);
}

impl Backend for GliumBackend {
    type Key = KeyStroke;
    type WindowId = WindowId;
    type Ui = Ui;

    fn main_window_id(&self) -> WindowId {
        self.display.gl_window().window().id()
    }

    fn drain_events(&mut self, on_event: &mut dyn FnMut(PlatformEvent<KeyStroke, WindowId>)) {
        // Pulling out the separate fields is the only way to use them all from inside the event loop closure
        let Self {
            event_loop,
            display,
            imgui,
            platform,
            translator,
            ..
        } = self;

        // Runs the loop just long enough to see everything that's already queued
        let _exit_code = event_loop.run_return(|event, _window_target, control_flow| {
            *control_flow = ControlFlow::Poll;
            if let Event::MainEventsCleared = event {
                *control_flow = ControlFlow::Exit;
                return;
            }

            let gl_window = display.gl_window();
            platform.handle_event(imgui.io_mut(), gl_window.window(), &event);
            on_event(translator.translate(&event));
        });
    }

    fn begin_gui_frame(&mut self) -> eyre::Result<&mut Ui> {
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;
        self.imgui.io_mut().update_delta_time(delta);
        trace!(target: UI_PERFRAME_SPAMMY, "updated deltaT: {}", humantime::format_duration(delta));

        {
            let gl_window = self.display.gl_window();
            let prepared = self.platform.prepare_frame(self.imgui.io_mut(), gl_window.window());
            if let Err(error) = prepared {
                // Only fails when the cursor can't be moved, which doesn't stop us drawing
                warn!("failed to prepare frame: {error}");
            }
        }

        Ok(self.imgui.new_frame())
    }

    fn font_handles(&self) -> FontHandles {
        self.fonts
    }

    fn render_gui(&mut self, clear_colour: [f32; 4]) -> eyre::Result<()> {
        if self.frame.is_some() {
            return Err(eyre!("previous frame was never presented"));
        }

        let draw_data = self.imgui.render();
        // The frame is sized to the window, so the viewport always covers the whole display
        let mut target = self.display.draw();
        let [red, green, blue, alpha] = clear_colour;
        target.clear_color(red, green, blue, alpha);

        if let Err(error) = self.renderer.render(&mut target, draw_data) {
            // glium panics if a frame is dropped without being finished
            if let Err(swap_error) = target.finish() {
                warn!("could not finish frame after render failure: {swap_error:?}");
            }
            return Err(eyre!("gui rendering failed: {error}"));
        }
        self.frame = Some(target);
        Ok(())
    }

    fn render_platform_windows(&mut self) -> eyre::Result<()> {
        // Dear ImGui turns the flag back off if the platform/renderer backends can't create extra windows
        if !gui::viewports_enabled(&self.imgui) {
            return Ok(());
        }

        let was_current = self.display.gl_window().is_current();
        // SAFETY: called after `render()` for this frame, on the thread that owns the imgui context
        unsafe {
            imgui::sys::igUpdatePlatformWindows();
            imgui::sys::igRenderPlatformWindowsDefault(std::ptr::null_mut(), std::ptr::null_mut());
        }
        // Platform windows may have made their own context current. glium makes its context current again on its next GL call, flushing forces that now
        if was_current && !self.display.gl_window().is_current() {
            trace!(target: UI_PERFRAME_SPAMMY, "restoring main GL context");
            self.display.flush();
        }
        Ok(())
    }

    fn present(&mut self) -> eyre::Result<()> {
        let frame = self.frame.take().ok_or_else(|| eyre!("no frame was rendered to present"))?;
        frame.finish().map_err(|error| eyre!("failed to swap buffers: {error:?}"))
    }

    #[instrument(skip_all)]
    fn shutdown(mut self) {
        if let Some(frame) = self.frame.take() {
            if let Err(error) = frame.finish() {
                warn!("could not finish pending frame during shutdown: {error:?}");
            }
        }

        let Self {
            renderer,
            platform,
            imgui,
            display,
            event_loop,
            ..
        } = self;
        trace!("dropping [glium] renderer");
        drop(renderer);
        trace!("dropping [winit] platform");
        drop(platform);
        trace!("destroying [imgui] context");
        drop(imgui);
        trace!("destroying GL context and window");
        drop(display);
        trace!("dropping [winit] event loop");
        drop(event_loop);
    }
}
