//! A scriptable [Backend] that records what the bridge asks of it, so the frame cycle can be tested without a display
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use color_eyre::eyre;
use imgui_window::gui::fonts::FontHandles;
use imgui_window::window::{Backend, FrameSettings, PlatformEvent, Window};

pub const MAIN_WINDOW: u32 = 1;
pub const OTHER_WINDOW: u32 = 2;

pub type FakeEvent = PlatformEvent<char, u32>;

/// Stands in for [imgui::Ui]; just counts the widgets "drawn" on it
#[derive(Debug, Default)]
pub struct FakeUi {
    pub widgets: Vec<String>,
}

impl FakeUi {
    pub fn label(&mut self, text: &str) {
        self.widgets.push(text.to_owned());
    }
}

/// Observations shared between a [FakeBackend] and the test that made it, so they outlive [Backend::shutdown]
#[derive(Debug, Default)]
pub struct Recorder {
    /// Backend method calls, in order
    pub calls: RefCell<Vec<&'static str>>,
    /// Events handed to the GUI before being translated
    pub gui_events: Cell<usize>,
    /// Resources acquired but not yet released
    pub open_handles: Cell<i64>,
    pub clear_colours: RefCell<Vec<[f32; 4]>>,
}

impl Recorder {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn forget_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: &'static str) {
        self.calls.borrow_mut().push(call);
    }
}

/// Everything a real backend acquires: platform, window, GL context, GUI context, GUI platform backend, renderer
const HANDLES_PER_BACKEND: i64 = 6;

#[derive(Debug)]
pub struct FakeBackend {
    pending: VecDeque<FakeEvent>,
    ui: FakeUi,
    recorder: Rc<Recorder>,
    pub fail_render: bool,
    pub fail_begin: bool,
}

impl FakeBackend {
    pub fn new(recorder: Rc<Recorder>) -> Self {
        recorder.open_handles.set(recorder.open_handles.get() + HANDLES_PER_BACKEND);
        Self {
            pending: VecDeque::new(),
            ui: FakeUi::default(),
            recorder,
            fail_render: false,
            fail_begin: false,
        }
    }

    /// Queues events to be seen on the next drain, as if the platform had produced them
    pub fn inject(&mut self, events: impl IntoIterator<Item = FakeEvent>) {
        self.pending.extend(events);
    }
}

impl Backend for FakeBackend {
    type Key = char;
    type WindowId = u32;
    type Ui = FakeUi;

    fn main_window_id(&self) -> u32 {
        MAIN_WINDOW
    }

    fn drain_events(&mut self, on_event: &mut dyn FnMut(FakeEvent)) {
        self.recorder.record("drain_events");
        while let Some(event) = self.pending.pop_front() {
            self.recorder.gui_events.set(self.recorder.gui_events.get() + 1);
            on_event(event);
        }
    }

    fn begin_gui_frame(&mut self) -> eyre::Result<&mut FakeUi> {
        self.recorder.record("begin_gui_frame");
        if self.fail_begin {
            eyre::bail!("gui context is gone");
        }
        self.ui.widgets.clear();
        Ok(&mut self.ui)
    }

    fn font_handles(&self) -> FontHandles {
        FontHandles::default()
    }

    fn render_gui(&mut self, clear_colour: [f32; 4]) -> eyre::Result<()> {
        self.recorder.record("render_gui");
        self.recorder.clear_colours.borrow_mut().push(clear_colour);
        if self.fail_render {
            eyre::bail!("renderer lost its device");
        }
        Ok(())
    }

    fn render_platform_windows(&mut self) -> eyre::Result<()> {
        self.recorder.record("render_platform_windows");
        Ok(())
    }

    fn present(&mut self) -> eyre::Result<()> {
        self.recorder.record("present");
        Ok(())
    }

    fn shutdown(self) {
        self.recorder.record("shutdown");
        self.recorder.open_handles.set(self.recorder.open_handles.get() - HANDLES_PER_BACKEND);
    }
}

/// Settings with viewports on and text collection on, and an obvious clear colour
pub fn settings() -> FrameSettings {
    FrameSettings {
        clear_colour: [0.25, 0.5, 0.75, 1.0],
        viewports: true,
        text_input: true,
    }
}

pub fn window_with(settings: FrameSettings) -> (Window<FakeBackend>, Rc<Recorder>) {
    let recorder = Rc::new(Recorder::default());
    let window = Window::with_backend(FakeBackend::new(Rc::clone(&recorder)), settings);
    (window, recorder)
}

pub fn window() -> (Window<FakeBackend>, Rc<Recorder>) {
    window_with(settings())
}

/// Injects `events`, runs one full frame and returns the keys and text the host saw during it
pub fn run_frame(
    window: &mut Window<FakeBackend>,
    events: Vec<FakeEvent>,
) -> eyre::Result<(Vec<char>, String)> {
    window.backend_mut().inject(events);
    let frame = window.start_frame()?;
    let seen = (frame.keyboard_input().iter().copied().collect(), frame.text_input().to_owned());
    drop(frame);
    window.end_frame()?;
    Ok(seen)
}
