//! This file contains event targets used to indicate what system/section an event is part of
//! For example, [UI_PERFRAME_SPAMMY] indicates that the event comes from the frame bridge, in a hot-path (i.e. called each frame, maybe multiple times), and will probably spam the logs

macro_rules! target {
    ($name:ident, $docs:literal) => {
        #[doc=$docs]
        #[allow(dead_code)]
        pub const $name: &str = stringify!(imgui_window::$name);
    };
}
target!(
    UI_PERFRAME_SPAMMY,
    r"High-frequency (i.e. every frame) logs from the frame bridge and backend"
);
target!(
    UI_USER_EVENT,
    r"Input from the user that the bridge queued for the host (key presses, typed text)"
);
target!(
    BACKEND_INIT,
    r"Step-by-step logs of window, GL context and GUI context creation"
);
target!(
    DATA_DUMP,
    r"A log call that dumps the value of some data, such as a whole config struct"
);

/// Every target declared above, used when building log filters
pub const ALL_TARGETS: &[&str] = &[UI_PERFRAME_SPAMMY, UI_USER_EVENT, BACKEND_INIT, DATA_DUMP];
