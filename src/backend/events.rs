//! Translation of [winit](glium::glutin) events into [PlatformEvent]s
use glium::glutin::event::{
    ElementState, Event, Ime, KeyboardInput, ModifiersState, VirtualKeyCode, WindowEvent,
};
use glium::glutin::window::WindowId;

use crate::window::PlatformEvent;

/// A key press, as queued for the host
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct KeyStroke {
    /// Hardware-dependent scancode, stable across keyboard layouts
    pub scancode: u32,
    /// Layout-dependent key, if winit knows what it is
    pub key: Option<VirtualKeyCode>,
    /// Modifiers held when the key went down
    pub modifiers: ModifiersState,
}

impl KeyStroke {
    /// Whether this is `key` pressed with no modifiers held
    pub fn is(&self, key: VirtualKeyCode) -> bool {
        self.key == Some(key) && self.modifiers.is_empty()
    }
}

pub type WinitPlatformEvent = PlatformEvent<KeyStroke, WindowId>;

/// Tracks state that winit spreads across events (currently just the modifier keys)
#[derive(Debug, Default)]
pub struct EventTranslator {
    modifiers: ModifiersState,
    main_window: Option<WindowId>,
    collect_text: bool,
}

impl EventTranslator {
    pub fn new(main_window: WindowId, collect_text: bool) -> Self {
        Self {
            modifiers: ModifiersState::empty(),
            main_window: Some(main_window),
            collect_text,
        }
    }

    pub fn translate<T>(&mut self, event: &Event<'_, T>) -> WinitPlatformEvent {
        let Event::WindowEvent { window_id, event } = event else {
            return PlatformEvent::Other;
        };

        match event {
            WindowEvent::CloseRequested => PlatformEvent::CloseRequested { window: *window_id },
            // The OS tore the main window down without asking (no close request), so the whole app has to go
            WindowEvent::Destroyed if self.main_window == Some(*window_id) => PlatformEvent::Quit,
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = *modifiers;
                PlatformEvent::Other
            }
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state: ElementState::Pressed,
                        scancode,
                        virtual_keycode,
                        ..
                    },
                ..
            } => PlatformEvent::KeyDown(KeyStroke {
                scancode: *scancode,
                key: *virtual_keycode,
                modifiers: self.modifiers,
            }),
            // Control characters (backspace, enter, escape...) arrive as key presses already
            WindowEvent::ReceivedCharacter(character)
                if self.collect_text && !character.is_control() =>
            {
                PlatformEvent::TextInput(character.to_string())
            }
            WindowEvent::Ime(Ime::Commit(text)) if self.collect_text => {
                PlatformEvent::TextInput(text.clone())
            }
            _ => PlatformEvent::Other,
        }
    }
}
