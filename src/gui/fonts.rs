//! Loads fonts into the GUI's font atlas, and keeps track of which loaded font plays which [FontRole]
use std::fs;

use imgui::{FontAtlas, FontConfig, FontId, FontSource as ImguiFontSource, FontStackToken, Ui};
use tracing::{instrument, trace, warn};

use crate::config::gui_config::{FontRole, FontSource, FontSpec};
use crate::helper::logging::event_targets::{BACKEND_INIT, DATA_DUMP};
use crate::window::InitError;

/// Handles to the fonts loaded for each role. A role is [None] if no font was configured for it, in which case the GUI's current font is used
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FontHandles {
    pub default: Option<FontId>,
    pub heading: Option<FontId>,
    pub normal: Option<FontId>,
}

impl FontHandles {
    pub fn get(&self, role: FontRole) -> Option<FontId> {
        match role {
            FontRole::Default => self.default,
            FontRole::Heading => self.heading,
            FontRole::Normal => self.normal,
        }
    }

    fn slot(&mut self, role: FontRole) -> &mut Option<FontId> {
        match role {
            FontRole::Default => &mut self.default,
            FontRole::Heading => &mut self.heading,
            FontRole::Normal => &mut self.normal,
        }
    }

    /// Pushes the font for `role` onto the font stack. It gets popped again when the returned token is dropped
    pub fn push<'ui>(&self, ui: &'ui Ui, role: FontRole) -> Option<FontStackToken<'ui>> {
        self.get(role).map(|id| ui.push_font(id))
    }
}

/// Settings shared by every font we load
fn base_font_config(name: String, size_pixels: f32) -> FontConfig {
    FontConfig {
        name: Some(name),
        size_pixels,
        // Oversampling font helps improve text rendering at
        // expense of larger font atlas texture.
        oversample_h: 4,
        oversample_v: 4,
        // imgui-glium-renderer isn't gamma-correct, so make the font a bit "heavier"
        rasterizer_multiply: 1.5,
        ..FontConfig::default()
    }
}

/// Adds every font in `specs` to `atlas`, in order. The first font added becomes the GUI's default font.
///
/// If two specs share a role, the later one wins. Font files are read here, and a read failure aborts initialisation
#[instrument(skip_all, fields(count = specs.len()))]
pub fn load_fonts(atlas: &mut FontAtlas, specs: &[FontSpec]) -> Result<FontHandles, InitError> {
    let mut handles = FontHandles::default();
    if specs.is_empty() {
        warn!(target: BACKEND_INIT, "no fonts configured, the GUI will use its built-in default");
    }

    for spec in specs {
        let name = format!("{:?} ({}px)", spec.role, spec.size_pixels);
        let config = base_font_config(name.clone(), spec.size_pixels);
        let id = match &spec.source {
            FontSource::BuiltIn => {
                trace!(target: BACKEND_INIT, "adding built-in font {name}");
                atlas.add_font(&[ImguiFontSource::DefaultFontData { config: Some(config) }])
            }
            FontSource::Embedded(font) => {
                trace!(target: BACKEND_INIT, "adding embedded font {name} ({font:?})");
                atlas.add_font(&[ImguiFontSource::TtfData {
                    data: font.data(),
                    size_pixels: spec.size_pixels,
                    config: Some(config),
                }])
            }
            FontSource::File(path) => {
                trace!(target: BACKEND_INIT, "adding font {name} from {path:?}");
                let data = fs::read(path).map_err(|source| InitError::Font {
                    path: path.clone(),
                    source,
                })?;
                trace!(target: DATA_DUMP, "read {} bytes of font data", data.len());
                atlas.add_font(&[ImguiFontSource::TtfData {
                    data: &data,
                    size_pixels: spec.size_pixels,
                    config: Some(config),
                }])
            }
        };
        if handles.slot(spec.role).replace(id).is_some() {
            warn!(
                target: BACKEND_INIT,
                "font role {:?} configured more than once, using the last one", spec.role
            );
        }
    }

    Ok(handles)
}
