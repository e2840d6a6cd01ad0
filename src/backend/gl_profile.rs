//! OpenGL version/profile negotiation. The profile is picked at compile time from the target and the `gles2` feature
use glium::glutin;

/// Which flavour of OpenGL to ask for
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GlApi {
    OpenGl,
    OpenGlEs,
}

/// The OpenGL context we request, and the matching shading language version
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GlProfile {
    pub api: GlApi,
    /// `(major, minor)`
    pub version: (u8, u8),
    /// Core profile (no deprecated fixed-function API). Ignored for GL ES
    pub core: bool,
    /// Whether the context ends up forward-compatible. Informational only: glutin has no switch for it, and
    /// on macOS every 3.2+ core context it creates is forward-compatible anyway
    pub forward_compatible: bool,
    /// `#version` line shaders for this context should start with
    pub glsl_version: &'static str,
}

impl GlProfile {
    /// GL 3.0 + GLSL 130
    pub const DESKTOP: GlProfile = GlProfile {
        api: GlApi::OpenGl,
        version: (3, 0),
        core: true,
        forward_compatible: false,
        glsl_version: "#version 130",
    };

    /// GL 3.2 Core + GLSL 150
    pub const APPLE: GlProfile = GlProfile {
        api: GlApi::OpenGl,
        version: (3, 2),
        core: true,
        forward_compatible: true,
        glsl_version: "#version 150",
    };

    /// GL ES 2.0 + GLSL 100
    pub const EMBEDDED: GlProfile = GlProfile {
        api: GlApi::OpenGlEs,
        version: (2, 0),
        core: false,
        forward_compatible: false,
        glsl_version: "#version 100",
    };

    /// The profile for the platform this crate was compiled for
    pub const fn for_target() -> GlProfile {
        if cfg!(feature = "gles2") {
            Self::EMBEDDED
        } else if cfg!(target_os = "macos") {
            Self::APPLE
        } else {
            Self::DESKTOP
        }
    }

    pub fn gl_request(&self) -> glutin::GlRequest {
        let api = match self.api {
            GlApi::OpenGl => glutin::Api::OpenGl,
            GlApi::OpenGlEs => glutin::Api::OpenGlEs,
        };
        glutin::GlRequest::Specific(api, self.version)
    }

    /// Profile to pass to glutin. [None] lets glutin choose, which is what GL ES needs
    pub fn glutin_profile(&self) -> Option<glutin::GlProfile> {
        match (self.api, self.core) {
            (GlApi::OpenGlEs, _) => None,
            (GlApi::OpenGl, true) => Some(glutin::GlProfile::Core),
            (GlApi::OpenGl, false) => Some(glutin::GlProfile::Compatibility),
        }
    }
}
