mod common;

use common::{run_frame, settings, window, window_with, FakeEvent, MAIN_WINDOW, OTHER_WINDOW};
use imgui_window::window::{FrameSettings, PlatformEvent};
use pretty_assertions::assert_eq;

fn keys(keys: &str) -> Vec<FakeEvent> {
    keys.chars().map(PlatformEvent::KeyDown).collect()
}

#[test]
fn keys_before_quit_are_still_delivered() -> color_eyre::Result<()> {
    let (mut window, _recorder) = window();
    let mut events = keys("ab");
    events.push(PlatformEvent::Quit);

    window.backend_mut().inject(events);
    let frame = window.start_frame()?;
    assert!(frame.is_exiting());
    assert_eq!(frame.keyboard_input().iter().copied().collect::<String>(), "ab");
    drop(frame);
    assert!(window.is_exiting());
    window.end_frame()?;
    Ok(())
}

#[test]
fn only_the_main_window_closing_exits() -> color_eyre::Result<()> {
    let (mut window, _recorder) = window();

    run_frame(&mut window, vec![PlatformEvent::CloseRequested { window: OTHER_WINDOW }])?;
    assert!(!window.is_exiting(), "closing a detached window must not exit");

    run_frame(&mut window, vec![PlatformEvent::CloseRequested { window: MAIN_WINDOW }])?;
    assert!(window.is_exiting());
    Ok(())
}

#[test]
fn exit_flag_never_resets() -> color_eyre::Result<()> {
    let (mut window, _recorder) = window();
    run_frame(&mut window, vec![PlatformEvent::Quit])?;
    for _ in 0..3 {
        run_frame(&mut window, keys("x"))?;
        assert!(window.is_exiting());
    }
    run_frame(&mut window, vec![PlatformEvent::Quit, PlatformEvent::Quit])?;
    assert!(window.is_exiting());
    Ok(())
}

#[test]
fn idle_frames_do_nothing_but_draw() -> color_eyre::Result<()> {
    let (mut window, recorder) = window();
    for _ in 0..5 {
        assert_eq!(run_frame(&mut window, vec![])?, (vec![], String::new()));
    }
    assert!(!window.is_exiting());
    assert_eq!(window.frame_number(), 5);
    assert_eq!(recorder.gui_events.get(), 0);
    Ok(())
}

#[test]
fn input_is_cleared_at_the_end_of_each_frame() -> color_eyre::Result<()> {
    let (mut window, _recorder) = window();
    let mut events = keys("hi");
    events.push(PlatformEvent::TextInput("hi".to_owned()));

    window.backend_mut().inject(events);
    drop(window.start_frame()?);
    assert_eq!(window.keyboard_input().len(), 2);
    assert_eq!(window.text_input(), "hi");
    window.end_frame()?;

    assert!(window.keyboard_input().is_empty());
    assert_eq!(window.text_input(), "");
    assert_eq!(run_frame(&mut window, vec![])?, (vec![], String::new()));
    Ok(())
}

#[test]
fn repeated_keys_are_kept_in_order() -> color_eyre::Result<()> {
    let (mut window, _recorder) = window();
    let (seen, _) = run_frame(&mut window, keys("aaba"))?;
    assert_eq!(seen, vec!['a', 'a', 'b', 'a']);
    Ok(())
}

#[test]
fn text_fragments_are_concatenated() -> color_eyre::Result<()> {
    let (mut window, _recorder) = window();
    let events = ["ça ", "va", "?"].map(|text| PlatformEvent::TextInput(text.to_owned())).to_vec();
    let (_, text) = run_frame(&mut window, events)?;
    assert_eq!(text, "ça va?");
    Ok(())
}

#[test]
fn text_is_ignored_when_text_input_is_off() -> color_eyre::Result<()> {
    let (mut window, _recorder) = window_with(FrameSettings {
        text_input: false,
        ..settings()
    });
    let (seen, text) = run_frame(
        &mut window,
        vec![PlatformEvent::KeyDown('k'), PlatformEvent::TextInput("k".to_owned())],
    )?;
    assert_eq!(seen, vec!['k']);
    assert_eq!(text, "");
    Ok(())
}

#[test]
fn every_event_reaches_the_gui() -> color_eyre::Result<()> {
    let (mut window, recorder) = window();
    let mut events = keys("abc");
    events.extend([
        PlatformEvent::Other,
        PlatformEvent::Other,
        PlatformEvent::TextInput("x".to_owned()),
        PlatformEvent::CloseRequested { window: OTHER_WINDOW },
        PlatformEvent::Quit,
    ]);
    let count = events.len();
    run_frame(&mut window, events)?;
    assert_eq!(recorder.gui_events.get(), count);
    Ok(())
}

#[test]
fn frame_calls_happen_in_order() -> color_eyre::Result<()> {
    let (mut window, recorder) = window();
    run_frame(&mut window, vec![])?;
    assert_eq!(
        recorder.calls(),
        vec!["drain_events", "begin_gui_frame", "render_gui", "render_platform_windows", "present"]
    );

    let (mut window, recorder) = window_with(FrameSettings {
        viewports: false,
        ..settings()
    });
    run_frame(&mut window, vec![])?;
    assert_eq!(recorder.calls(), vec!["drain_events", "begin_gui_frame", "render_gui", "present"]);
    Ok(())
}

#[test]
fn clear_colour_is_passed_to_the_renderer() -> color_eyre::Result<()> {
    let (mut window, recorder) = window();
    run_frame(&mut window, vec![])?;
    run_frame(&mut window, vec![])?;
    assert_eq!(*recorder.clear_colours.borrow(), vec![settings().clear_colour; 2]);
    Ok(())
}

#[test]
fn host_draws_through_the_frame() -> color_eyre::Result<()> {
    let (mut window, _recorder) = window();
    let mut frame = window.start_frame()?;
    frame.ui_mut().label("hello");
    assert_eq!(frame.frame_number(), 0);
    assert_eq!(frame.widgets, vec!["hello".to_owned()]);
    drop(frame);
    window.end_frame()?;
    Ok(())
}

#[test]
fn misordered_calls_are_errors() -> color_eyre::Result<()> {
    let (mut window, recorder) = window();
    assert!(window.end_frame().is_err(), "end_frame before any start_frame");

    drop(window.start_frame()?);
    assert!(window.start_frame().is_err(), "start_frame twice");
    window.end_frame()?;
    assert!(window.end_frame().is_err(), "end_frame twice");

    assert_eq!(window.frame_number(), 1);
    assert_eq!(recorder.calls().iter().filter(|call| **call == "present").count(), 1);
    Ok(())
}

#[test]
fn render_failures_are_reported_and_the_cycle_recovers() -> color_eyre::Result<()> {
    let (mut window, _recorder) = window();
    window.backend_mut().fail_render = true;
    drop(window.start_frame()?);
    let error = window.end_frame().expect_err("render should fail");
    assert!(format!("{error:?}").contains("renderer lost its device"));
    assert_eq!(window.frame_number(), 0);

    window.backend_mut().fail_render = false;
    run_frame(&mut window, vec![])?;
    assert_eq!(window.frame_number(), 1);
    Ok(())
}

#[test]
fn input_from_a_frame_that_failed_to_start_is_dropped() -> color_eyre::Result<()> {
    let (mut window, _recorder) = window();
    window.backend_mut().fail_begin = true;
    window.backend_mut().inject(keys("a"));
    window.backend_mut().inject([PlatformEvent::TextInput("lost".to_owned())]);
    assert!(window.start_frame().is_err());
    assert!(window.keyboard_input().is_empty());
    assert_eq!(window.text_input(), "");

    window.backend_mut().fail_begin = false;
    let (seen, text) = run_frame(&mut window, keys("b"))?;
    assert_eq!(seen, vec!['b']);
    assert_eq!(text, "");
    Ok(())
}

#[test]
fn destroy_releases_everything() {
    let (window, recorder) = window();
    assert!(recorder.open_handles.get() > 0);
    window.destroy();
    assert_eq!(recorder.open_handles.get(), 0);
    assert_eq!(recorder.calls().last(), Some(&"shutdown"));
}

#[test]
fn init_and_destroy_balance_across_cycles() -> color_eyre::Result<()> {
    for _ in 0..3 {
        let (mut window, recorder) = window();
        run_frame(&mut window, keys("q"))?;
        window.destroy();
        assert_eq!(recorder.open_handles.get(), 0);
    }
    Ok(())
}

#[test]
fn destroying_mid_frame_still_shuts_down() -> color_eyre::Result<()> {
    let (mut window, recorder) = window();
    drop(window.start_frame()?);
    window.destroy();
    assert_eq!(recorder.open_handles.get(), 0);
    Ok(())
}
