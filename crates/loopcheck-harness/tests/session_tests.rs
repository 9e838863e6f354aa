use loopcheck_adapter::AdapterConfig;
use loopcheck_engine::SimLooper;
use loopcheck_explore::{DriverConfig, RunOutcome};
use loopcheck_harness::{AssertionError, HarnessError, TestSession};

fn session() -> TestSession<SimLooper> {
    TestSession::new(SimLooper::looper(), AdapterConfig::default()).unwrap()
}

#[test]
fn test_setup_builds_vocabulary_and_model() {
    let mut session = session();
    assert_eq!(session.catalog().len(), 24);
    assert_eq!(session.state_name().unwrap(), "Off");
}

#[test]
fn test_request_by_name() {
    let mut session = session();
    session.request("RECORD").unwrap();
    assert_eq!(session.state_name().unwrap(), "Recording");
}

#[test]
fn test_request_unknown_command_is_config_error() {
    let mut session = session();
    assert!(matches!(
        session.request("HALT"),
        Err(HarnessError::Catalog(_))
    ));
}

#[test]
fn test_request_checked_agrees_with_model() {
    let mut session = session();
    // RECORD is constrained to Recording and the engine obliges.
    session.request_checked("RECORD").unwrap();
}

#[test]
fn test_request_checked_reports_model_disagreement() {
    let mut session = session();
    // With no loop recorded, MUTE parks the engine in OffMuted while the
    // model's typical outcome says Muted.
    let failure = session.request_checked("MUTE").unwrap_err();
    match failure {
        HarnessError::Assertion(AssertionError::TransitionMismatch {
            command,
            expected,
            observed,
        }) => {
            assert_eq!(command, "MUTE");
            assert_eq!(expected, "Muted");
            assert_eq!(observed, "OffMuted");
        }
        other => panic!("unexpected failure: {other:?}"),
    }
}

#[test]
fn test_explore_from_session() {
    let mut session = session();
    let report = session
        .explore(DriverConfig {
            seed: 42,
            max_steps: Some(200_000),
        })
        .unwrap();
    assert_eq!(report.outcome, RunOutcome::FullCoverage);
    assert!(session.adapter().handle().overlaps().is_empty());
}

#[test]
fn test_teardown_releases_handle() {
    let mut session = session();
    session.request("MUTE").unwrap();
    let engine = session.into_handle();
    assert_eq!(engine.state_code(), 20);
}
