use std::any::Any;

/// Converts a caught panic payload (`Box<dyn Any + Send>`) into a readable message
///
/// Panics raised through `panic!("...")` carry either a `&'static str` or a [String]; anything else is reported as an unknown payload
#[allow(clippy::borrowed_box)] // Matches the payload type handed out by `catch_unwind`
pub fn panic_payload_message(payload: &Box<dyn Any + Send>) -> String {
    if let Some(message) = (**payload).downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = (**payload).downcast_ref::<String>() {
        message.clone()
    } else {
        "<unable to convert panic, payload is not a string>".to_owned()
    }
}
