use std::error::Error;
use std::fmt::{Debug, Formatter};

use clipboard::{ClipboardContext, ClipboardProvider};
use imgui::ClipboardBackend;
use nameof::name_of_type;
use tracing::*;

/// Wrapper struct for [ClipboardContext] that lets [imgui] copy and paste through the OS clipboard
pub struct GuiClipboard {
    /// The wrapped [ClipboardContext] object that the operations are passed to
    backing_context: ClipboardContext,
}

impl Debug for GuiClipboard {
    /// The [ClipboardContext] type is just an alias and exposes no internals, so this only prints the type name
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", name_of_type!(GuiClipboard))
    }
}

/// (Tries to) connect to the OS clipboard
#[instrument(level = "trace")]
pub fn clipboard_init() -> Result<GuiClipboard, Box<dyn Error>> {
    ClipboardContext::new().map(|backing_context| GuiClipboard { backing_context })
}

impl ClipboardBackend for GuiClipboard {
    fn get(&mut self) -> Option<String> {
        let contents = self.backing_context.get_contents().ok();
        trace!("got clipboard: {contents:?}");
        contents
    }

    fn set(&mut self, text: &str) {
        if let Err(error) = self.backing_context.set_contents(text.to_owned()) {
            warn!("could not set clipboard due to error: {error}")
        } else {
            trace!("set clipboard: {text:?}");
        }
    }
}
