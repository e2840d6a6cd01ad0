//! The fixed visual theme: a light grey look with yellow accents, layered over Dear ImGui's dark colours
use imgui::{Direction, Style, StyleColor};

/// Spacing and shape constants applied on top of the base style
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StyleGeometry {
    pub window_menu_button_position: Direction,
    pub tab_rounding: f32,
    pub window_rounding: f32,
    pub window_border_size: f32,
    pub frame_border_size: f32,
    pub frame_padding: [f32; 2],
    pub indent_spacing: f32,
}

pub const STYLE_GEOMETRY: StyleGeometry = StyleGeometry {
    // No collapse button in window title bars
    window_menu_button_position: Direction::None,
    tab_rounding: 0.0,
    window_rounding: 8.0,
    window_border_size: 1.0,
    frame_border_size: 1.0,
    frame_padding: [12.0, 12.0],
    indent_spacing: 12.0,
};

/// RGBA value for every colour role the theme overrides
#[rustfmt::skip]
pub const COLOUR_OVERRIDES: &[(StyleColor, [f32; 4])] = &[
    (StyleColor::BorderShadow,          [0.75, 0.75, 0.75, 0.00]),
    (StyleColor::Border,                [0.85, 0.85, 0.85, 1.00]),
    (StyleColor::ButtonActive,          [0.68, 0.68, 0.68, 1.00]),
    (StyleColor::ButtonHovered,         [0.76, 0.76, 0.76, 1.00]),
    (StyleColor::Button,                [0.82, 0.82, 0.82, 1.00]),
    (StyleColor::CheckMark,             [1.00, 0.92, 0.00, 1.00]),
    (StyleColor::ChildBg,               [1.00, 1.00, 1.00, 0.00]),
    (StyleColor::DockingEmptyBg,        [1.00, 1.00, 1.00, 1.00]),
    (StyleColor::DockingPreview,        [1.00, 0.91, 0.00, 1.00]),
    (StyleColor::DragDropTarget,        [1.00, 0.91, 0.00, 1.00]),
    (StyleColor::FrameBgActive,         [0.79, 0.79, 0.79, 0.67]),
    (StyleColor::FrameBgHovered,        [0.87, 0.87, 0.87, 1.00]),
    (StyleColor::FrameBg,               [0.92, 0.92, 0.92, 1.00]),
    (StyleColor::HeaderActive,          [1.00, 0.91, 0.00, 1.00]),
    (StyleColor::HeaderHovered,         [0.90, 0.90, 0.90, 1.00]),
    (StyleColor::Header,                [0.90, 0.90, 0.90, 1.00]),
    (StyleColor::MenuBarBg,             [0.86, 0.86, 0.86, 1.00]),
    (StyleColor::ModalWindowDimBg,      [0.00, 0.00, 0.00, 0.28]),
    (StyleColor::NavHighlight,          [0.79, 0.79, 0.79, 1.00]),
    (StyleColor::NavWindowingDimBg,     [0.80, 0.80, 0.80, 0.20]),
    (StyleColor::NavWindowingHighlight, [1.00, 1.00, 1.00, 0.70]),
    (StyleColor::PlotHistogramHovered,  [1.00, 0.60, 0.00, 1.00]),
    (StyleColor::PlotHistogram,         [0.90, 0.70, 0.00, 1.00]),
    (StyleColor::PlotLinesHovered,      [1.00, 0.43, 0.35, 1.00]),
    (StyleColor::PlotLines,             [0.61, 0.61, 0.61, 1.00]),
    (StyleColor::PopupBg,               [1.00, 1.00, 1.00, 0.94]),
    (StyleColor::ResizeGripActive,      [0.80, 0.80, 0.80, 0.95]),
    (StyleColor::ResizeGripHovered,     [0.79, 0.79, 0.79, 0.67]),
    (StyleColor::ResizeGrip,            [0.78, 0.78, 0.78, 0.20]),
    (StyleColor::ScrollbarBg,           [0.78, 0.78, 0.78, 0.53]),
    (StyleColor::ScrollbarGrabActive,   [0.51, 0.51, 0.51, 1.00]),
    (StyleColor::ScrollbarGrabHovered,  [0.71, 0.71, 0.71, 1.00]),
    (StyleColor::ScrollbarGrab,         [0.75, 0.75, 0.75, 1.00]),
    (StyleColor::SeparatorActive,       [1.00, 0.91, 0.00, 1.00]),
    (StyleColor::SeparatorHovered,      [0.63, 0.63, 0.63, 0.78]),
    (StyleColor::Separator,             [0.90, 0.90, 0.90, 1.00]),
    (StyleColor::SliderGrabActive,      [1.00, 0.91, 0.00, 1.00]),
    (StyleColor::SliderGrab,            [1.00, 0.91, 0.00, 1.00]),
    (StyleColor::TabActive,             [1.00, 0.91, 0.00, 1.00]),
    (StyleColor::TabHovered,            [1.00, 0.91, 0.00, 1.00]),
    (StyleColor::TabUnfocusedActive,    [0.81, 0.81, 0.81, 1.00]),
    (StyleColor::TabUnfocused,          [0.93, 0.93, 0.93, 1.00]),
    (StyleColor::Tab,                   [0.93, 0.93, 0.93, 1.00]),
    (StyleColor::TableBorderLight,      [0.23, 0.23, 0.25, 1.00]),
    (StyleColor::TableBorderStrong,     [0.31, 0.31, 0.35, 1.00]),
    (StyleColor::TableHeaderBg,         [0.85, 0.85, 0.85, 1.00]),
    (StyleColor::TableRowBgAlt,         [1.00, 1.00, 1.00, 0.06]),
    (StyleColor::TableRowBg,            [0.00, 0.00, 0.00, 0.00]),
    (StyleColor::TextDisabled,          [0.76, 0.76, 0.76, 1.00]),
    (StyleColor::TextSelectedBg,        [0.54, 0.54, 0.54, 0.35]),
    (StyleColor::Text,                  [0.00, 0.00, 0.00, 1.00]),
    (StyleColor::TitleBgActive,         [1.00, 1.00, 1.00, 1.00]),
    (StyleColor::TitleBgCollapsed,      [1.00, 1.00, 1.00, 0.51]),
    (StyleColor::TitleBg,               [1.00, 1.00, 1.00, 1.00]),
    (StyleColor::WindowBg,              [1.00, 1.00, 1.00, 1.00]),
];

/// Applies the theme to `style`: dark colours as a base, the viewport tweaks (if enabled), then [STYLE_GEOMETRY] and [COLOUR_OVERRIDES]
pub fn apply_theme(style: &mut Style, viewports: bool) {
    style.use_dark_colors();

    // Detached platform windows should look the same as ones inside the main window
    if viewports {
        style.window_rounding = 0.0;
        style[StyleColor::WindowBg][3] = 1.0;
    }

    let geometry = STYLE_GEOMETRY;
    style.window_menu_button_position = geometry.window_menu_button_position;
    style.tab_rounding = geometry.tab_rounding;
    style.window_rounding = geometry.window_rounding;
    style.window_border_size = geometry.window_border_size;
    style.frame_border_size = geometry.frame_border_size;
    style.frame_padding = geometry.frame_padding;
    style.indent_spacing = geometry.indent_spacing;

    for &(role, colour) in COLOUR_OVERRIDES {
        style[role] = colour;
    }
}
