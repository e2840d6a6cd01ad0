use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options applied while bootstrapping the [imgui] context
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GuiConfig {
    /// Lets GUI windows be docked into each other
    pub docking: bool,
    /// Lets GUI windows be dragged outside the main window and become their own native windows
    pub viewports: bool,
    /// Whether committed text input is collected into the per-frame text buffer
    pub text_input: bool,
    /// Fonts to load, in order. The first one becomes the GUI's default font
    pub fonts: Vec<FontSpec>,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            docking: true,
            viewports: true,
            text_input: true,
            fonts: vec![
                FontSpec::new(FontRole::Default, 16.0, EmbeddedFont::DejaVuSansMono.into()),
                FontSpec::new(FontRole::Heading, 22.0, EmbeddedFont::FiraSans.into()),
                FontSpec::new(FontRole::Normal, 18.0, EmbeddedFont::FiraSans.into()),
            ],
        }
    }
}

/// A font face to rasterise at a fixed pixel size
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FontSpec {
    pub role: FontRole,
    pub size_pixels: f32,
    pub source: FontSource,
}

impl FontSpec {
    pub fn new(role: FontRole, size_pixels: f32, source: FontSource) -> Self {
        Self { role, size_pixels, source }
    }
}

/// What a loaded font is used for. The host picks fonts by role, not by index
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Eq, PartialEq, Hash)]
pub enum FontRole {
    /// Used for everything not wrapped in a font push
    Default,
    /// Section headings
    Heading,
    /// Body text
    Normal,
}

/// Where the font's data comes from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FontSource {
    /// The compressed bitmap font embedded in Dear ImGui itself
    BuiltIn,
    /// One of the TTF faces compiled into this crate
    Embedded(EmbeddedFont),
    /// A TTF/OTF file read from disk during initialisation
    File(PathBuf),
}

/// Font faces shipped in `src/resources/fonts` and compiled into the binary
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Eq, PartialEq, Hash)]
pub enum EmbeddedFont {
    /// Monospace, used for the default font
    DejaVuSansMono,
    /// Proportional, used for headings and body text
    FiraSans,
}

impl From<EmbeddedFont> for FontSource {
    fn from(font: EmbeddedFont) -> Self {
        FontSource::Embedded(font)
    }
}

impl EmbeddedFont {
    /// The face's TTF data
    pub fn data(self) -> &'static [u8] {
        match self {
            EmbeddedFont::DejaVuSansMono => include_bytes!("../resources/fonts/DejaVuSansMono.ttf"),
            EmbeddedFont::FiraSans => include_bytes!("../resources/fonts/FiraSans-Regular.ttf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_faces_are_truetype() {
        for font in [EmbeddedFont::DejaVuSansMono, EmbeddedFont::FiraSans] {
            // TrueType outlines start with version 1.0
            assert_eq!(&font.data()[..4], &[0, 1, 0, 0], "{font:?}");
        }
    }

    #[test]
    fn default_fonts_use_distinct_faces_for_code_and_prose() {
        let fonts = GuiConfig::default().fonts;
        assert_eq!(fonts[0].source, FontSource::Embedded(EmbeddedFont::DejaVuSansMono));
        assert_eq!(fonts[1].source, FontSource::Embedded(EmbeddedFont::FiraSans));
        assert_eq!(fonts[2].source, FontSource::Embedded(EmbeddedFont::FiraSans));
    }
}
