use std::collections::VecDeque;

/// A platform event, already handed to the GUI library, translated into the few kinds the frame bridge cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent<K, W> {
    /// The application as a whole was asked to quit
    Quit,
    /// The user asked for a window to close (e.g. clicked its close button)
    CloseRequested { window: W },
    /// A key was pressed. Key repeats arrive as separate presses
    KeyDown(K),
    /// Text was committed (typed, or confirmed through an IME)
    TextInput(String),
    /// Anything else (mouse movement, resizes, focus changes...). The GUI has already seen it
    Other,
}

/// Keyboard and text input collected during the current frame
///
/// Filled by [Window::start_frame](crate::window::Window::start_frame) and cleared by [Window::end_frame](crate::window::Window::end_frame), so the host only ever sees the current frame's input
#[derive(Debug, Clone)]
pub struct InputQueues<K> {
    keyboard: VecDeque<K>,
    text: String,
}

impl<K> Default for InputQueues<K> {
    fn default() -> Self {
        Self {
            keyboard: VecDeque::new(),
            text: String::new(),
        }
    }
}

impl<K> InputQueues<K> {
    pub fn push_key(&mut self, key: K) {
        self.keyboard.push_back(key);
    }

    pub fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Key presses in the order they arrived, oldest first
    pub fn keyboard(&self) -> &VecDeque<K> {
        &self.keyboard
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.keyboard.is_empty() && self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.keyboard.clear();
        self.text.clear();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn keys_keep_arrival_order_and_repeats() {
        let mut queues = InputQueues::default();
        for key in ['a', 'b', 'b', 'a'] {
            queues.push_key(key);
        }
        assert_eq!(queues.keyboard().iter().copied().collect::<String>(), "abba");
    }

    #[test]
    fn text_accumulates_until_cleared() {
        let mut queues = InputQueues::<char>::default();
        queues.push_text("héllo");
        queues.push_text(" wörld");
        assert_eq!(queues.text(), "héllo wörld");
        assert!(!queues.is_empty());

        queues.clear();
        assert!(queues.is_empty());
        assert_eq!(queues.text(), "");
    }
}
