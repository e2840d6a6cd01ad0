use color_eyre::eyre::{self, WrapErr};
use imgui::Condition;
use imgui_window::backend::events::KeyStroke;
use imgui_window::backend::GliumBackend;
use imgui_window::config::{AppConfig, BASE_CONFIG_PATH};
use imgui_window::helper::logging::event_targets::DATA_DUMP;
use imgui_window::helper::logging::{format_error, init_tracing};
use imgui_window::window::{Frame, Window};
use shadow_rs::shadow;
use tracing::{debug, error, info, instrument, trace};
use winit::event::VirtualKeyCode;

shadow!(build); //Required for shadow-rs to work

/// State the demo keeps between frames
#[derive(Debug, Default)]
struct Demo {
    demo_window_opened: bool,
    /// Everything typed so far, so there's something to look at after the per-frame buffer is cleared
    typed: String,
    keys_seen: u64,
    quit_requested: bool,
}

#[instrument(ret)]
fn main() -> eyre::Result<()> {
    color_eyre::install()?; //Set up eyre (with colours) for error handling

    let mut config = AppConfig::load_or_default(BASE_CONFIG_PATH);
    init_tracing(&config.tracing).wrap_err("failed to initialise tracing")?;
    debug!(target: DATA_DUMP, ?config, "loaded config");

    config.window.title = format!(
        "{} v{} - {}",
        build::PROJECT_NAME,
        build::PKG_VERSION,
        build::BUILD_TARGET
    );
    let mut window = Window::init(&config.window).wrap_err("failed to initialise window")?;

    let mut demo = Demo {
        demo_window_opened: true,
        ..Demo::default()
    };
    let result = run(&mut window, &mut demo);
    if let Err(report) = &result {
        error!(error = format_error(report, config.tracing.error_style), "frame loop failed");
    }

    info!(frames = window.frame_number(), keys = demo.keys_seen, "exiting");
    // Always tear down, even when a frame failed
    window.destroy();
    result
}

/// Runs frames until the window wants to exit, or the user pressed escape
fn run(window: &mut Window<GliumBackend>, demo: &mut Demo) -> eyre::Result<()> {
    while !window.is_exiting() && !demo.quit_requested {
        let frame = window.start_frame()?;
        render(demo, &frame);
        drop(frame);
        window.end_frame()?;
    }
    Ok(())
}

/// Called every frame, only place where rendering can occur
fn render(demo: &mut Demo, frame: &Frame<'_, GliumBackend>) {
    for key in frame.keyboard_input() {
        trace!(?key, "demo saw key");
        demo.keys_seen += 1;
        if key.is(VirtualKeyCode::Escape) {
            demo.quit_requested = true;
        }
    }
    demo.typed.push_str(frame.text_input());

    if demo.demo_window_opened {
        frame.show_demo_window(&mut demo.demo_window_opened);
    }

    frame
        .window("Input")
        .size([360.0, 240.0], Condition::FirstUseEver)
        .build(|| {
            frame.heading("Input");
            frame.text(&format!("frame {}", frame.frame_number()));
            frame.text(&format!("{} keys so far (Esc quits)", demo.keys_seen));
            frame.separator();
            frame.text("This frame:");
            for key in frame.keyboard_input() {
                frame.text(&describe_key(key));
            }
            frame.separator();
            frame.text_wrapped(format!("Typed: {}", demo.typed));
            if frame.button("Clear") {
                demo.typed.clear();
            }
        });
}

fn describe_key(key: &KeyStroke) -> String {
    match key.key {
        Some(virtual_key) if key.modifiers.is_empty() => format!("{virtual_key:?}"),
        Some(virtual_key) => format!("{:?} + {virtual_key:?}", key.modifiers),
        None => format!("scancode {}", key.scancode),
    }
}
