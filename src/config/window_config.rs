use serde::{Deserialize, Serialize};

use crate::config::gui_config::GuiConfig;

/// Type alias for the colour type used in config files (converted to `[f32; 4]` for [imgui] and [glium])
pub type Colour = mint::Vector4<f32>;

/// Configures the native window, its OpenGL context, and the GUI bootstrapped on top of it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Title of the main OS window
    pub title: String,
    /// Initial inner size of the window, in logical pixels
    pub size: [u32; 2],
    pub resizable: bool,
    /// Whether the window should be moved to the centre of the monitor it opens on
    pub centred: bool,
    /// flag for if the GL context should sync buffer swaps to the display refresh
    pub vsync: bool,
    /// Colour the main window is cleared to before the GUI is drawn.
    ///
    /// Not premultiplied; the alpha is applied to the RGB channels when clearing
    pub clear_colour: Colour,
    pub gui: GuiConfig,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Application".to_owned(),
            size: [1280, 720],
            resizable: true,
            centred: true,
            vsync: true,
            clear_colour: [1.0, 1.0, 1.0, 1.0].into(), // Opaque white
            gui: GuiConfig::default(),
        }
    }
}

impl WindowConfig {
    /// [clear_colour](Self::clear_colour) with its alpha premultiplied into the colour channels
    pub fn premultiplied_clear_colour(&self) -> [f32; 4] {
        let Colour { x, y, z, w } = self.clear_colour;
        [x * w, y * w, z * w, w]
    }
}
