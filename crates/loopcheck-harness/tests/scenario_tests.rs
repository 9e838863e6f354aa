use loopcheck_engine::SimLooper;
use loopcheck_harness::ScenarioRunner;
use loopcheck_model::scenario::{off_baseline, off_muted_baseline};

fn runner() -> ScenarioRunner<fn() -> SimLooper> {
    ScenarioRunner::new(SimLooper::looper)
}

#[test]
fn test_initial_state_is_off() {
    runner().run_script(&[], "Off").unwrap();
}

#[test]
fn test_undo_after_record_cancels() {
    runner().run_script(&["RECORD", "UNDO"], "Off").unwrap();
}

#[test]
fn test_undo_all_after_record_cancels() {
    runner().run_script(&["RECORD", "UNDO_ALL"], "Off").unwrap();
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    runner().run_script(&["UNDO"], "Off").unwrap();
}

#[test]
fn test_mute_on_from_off() {
    runner().run_script(&["MUTE_ON"], "OffMuted").unwrap();
}

#[test]
fn test_delay_from_off() {
    runner().run_script(&["DELAY"], "Delay").unwrap();
}

#[test]
fn test_pause_is_idempotent_when_not_recording() {
    runner().run_script(&["PAUSE"], "Off").unwrap();
}

#[test]
fn test_record_record_plays() {
    runner().run_script(&["RECORD", "RECORD"], "Playing").unwrap();
}

#[test]
fn test_overdub_cycle() {
    let mut runner = runner();
    runner
        .run_script(&["RECORD", "RECORD", "OVERDUB"], "Overdubbing")
        .unwrap();
    runner
        .run_script(&["RECORD", "RECORD", "OVERDUB", "OVERDUB"], "Playing")
        .unwrap();
}

#[test]
fn test_mute_toggle() {
    let mut runner = runner();
    runner.run_script(&["MUTE"], "OffMuted").unwrap();
    runner.run_script(&["MUTE", "MUTE"], "Off").unwrap();
}

#[test]
fn test_offmuted_record() {
    runner().run_script(&["MUTE", "RECORD"], "Recording").unwrap();
}

#[test]
fn test_offmuted_undo_returns_to_muted_baseline() {
    let mut runner = runner();
    runner
        .run_script(&["MUTE", "RECORD", "UNDO"], "OffMuted")
        .unwrap();
    runner
        .run_script(&["MUTE", "RECORD", "UNDO_ALL"], "OffMuted")
        .unwrap();
}

#[test]
fn test_offmuted_pause_is_noop() {
    runner().run_script(&["MUTE", "PAUSE"], "OffMuted").unwrap();
}

#[test]
fn test_offmuted_mute_off_unmutes() {
    runner().run_script(&["MUTE", "MUTE_OFF"], "Off").unwrap();
}

#[test]
fn test_delay_overrides_muted_baseline() {
    runner().run_script(&["MUTE", "DELAY"], "Delay").unwrap();
}

#[test]
fn test_script_failure_reports_both_names() {
    let failure = runner().run_script(&["RECORD"], "Off").unwrap_err();
    let message = failure.to_string();
    assert!(message.contains("Off"), "{message}");
    assert!(message.contains("Recording"), "{message}");
}

#[test]
fn test_all_commands_from_off_stay_off() {
    let failures = runner().run_baseline(&off_baseline()).unwrap();
    assert!(failures.is_empty(), "{failures:?}");
}

#[test]
fn test_all_commands_from_off_muted_stay_off_muted() {
    let failures = runner().run_baseline(&off_muted_baseline()).unwrap();
    assert!(failures.is_empty(), "{failures:?}");
}

#[test]
fn test_baseline_sweep_collects_failures() {
    // Sweeping Off without its ignore list must fail exactly on the four
    // commands that genuinely leave Off, and still run every other case.
    let scenario = loopcheck_model::BaselineScenario::new("Off", &[], &[]);
    let failures = runner().run_baseline(&scenario).unwrap();
    assert_eq!(failures.len(), 4, "{failures:?}");
}
