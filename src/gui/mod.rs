//! Bootstraps the [imgui] context: config flags, theme and fonts
use imgui::{sys, ConfigFlags, Context};
use tracing::{instrument, trace};

use crate::config::gui_config::GuiConfig;
use crate::gui::fonts::FontHandles;
use crate::helper::logging::event_targets::BACKEND_INIT;
use crate::window::InitError;

pub mod clipboard_integration;
pub mod fonts;
pub mod theme;

/// Configures a freshly created [Context] according to `config`, and returns handles to the fonts it loaded
///
/// Doesn't need a window or renderer, only the context. The font atlas is built later, when the renderer is created
#[instrument(skip_all)]
pub fn bootstrap(imgui: &mut Context, config: &GuiConfig) -> Result<FontHandles, InitError> {
    if config.docking {
        trace!(target: BACKEND_INIT, "enabling docking config flag");
        imgui.io_mut().config_flags |= ConfigFlags::DOCKING_ENABLE;
    }
    if config.viewports {
        trace!(target: BACKEND_INIT, "enabling multi-viewport config flag");
        set_viewports_enabled(imgui, true);
    }

    trace!(target: BACKEND_INIT, "applying theme");
    theme::apply_theme(imgui.style_mut(), config.viewports);

    fonts::load_fonts(&mut *imgui.fonts(), &config.fonts)
}

/// The viewport flag isn't part of [ConfigFlags], so it's set on the raw IO struct
pub fn set_viewports_enabled(imgui: &mut Context, enabled: bool) {
    let flag = sys::ImGuiConfigFlags_ViewportsEnable as sys::ImGuiConfigFlags;
    // SAFETY: `imgui` is the current context (only one can exist), so `igGetIO` points at its IO.
    // We hold it mutably, so nothing else is touching the IO
    unsafe {
        let io = &mut *sys::igGetIO();
        if enabled {
            io.ConfigFlags |= flag;
        } else {
            io.ConfigFlags &= !flag;
        }
    }
}

/// Whether multi-viewport is on.
///
/// Dear ImGui clears the flag on the next frame if the backends can't create platform windows
pub fn viewports_enabled(_imgui: &Context) -> bool {
    let flag = sys::ImGuiConfigFlags_ViewportsEnable as sys::ImGuiConfigFlags;
    // SAFETY: the borrowed context is the current one, and nothing holds a mutable borrow of it
    unsafe { (*sys::igGetIO()).ConfigFlags & flag != 0 }
}
