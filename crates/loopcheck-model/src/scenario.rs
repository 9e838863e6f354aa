use serde::{Deserialize, Serialize};

/// A baseline scenario: after `setup`, the engine sits in `baseline`, and
/// every catalog command not listed in `ignore` must leave it there.
///
/// This is the literal data contract of the exhaustive per-state suites:
/// the ignore list names the commands that legitimately move the engine
/// somewhere else from that baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineScenario {
    /// State name the engine settles in once `setup` has run.
    pub baseline: String,
    /// Commands issued from a fresh engine to establish the baseline.
    #[serde(default)]
    pub setup: Vec<String>,
    /// Commands excluded from the all-commands sweep.
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl BaselineScenario {
    pub fn new(baseline: &str, setup: &[&str], ignore: &[&str]) -> Self {
        Self {
            baseline: baseline.to_string(),
            setup: setup.iter().map(|s| s.to_string()).collect(),
            ignore: ignore.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn ignores(&self, command: &str) -> bool {
        self.ignore.iter().any(|c| c == command)
    }
}

/// Every command from a fresh engine leaves it Off, except the four that
/// genuinely start something.
pub fn off_baseline() -> BaselineScenario {
    BaselineScenario::new("Off", &[], &["RECORD", "DELAY", "MUTE_ON", "MUTE"])
}

/// Same sweep from the muted-while-off baseline, established by one MUTE.
pub fn off_muted_baseline() -> BaselineScenario {
    BaselineScenario::new(
        "OffMuted",
        &["MUTE"],
        &["RECORD", "DELAY", "MUTE_OFF", "MUTE"],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_baseline_table() {
        let scenario = off_baseline();
        assert_eq!(scenario.baseline, "Off");
        assert!(scenario.setup.is_empty());
        assert!(scenario.ignores("RECORD"));
        assert!(scenario.ignores("MUTE_ON"));
        assert!(!scenario.ignores("MUTE_OFF"));
        assert!(!scenario.ignores("PAUSE"));
    }

    #[test]
    fn test_off_muted_baseline_table() {
        let scenario = off_muted_baseline();
        assert_eq!(scenario.baseline, "OffMuted");
        assert_eq!(scenario.setup, vec!["MUTE".to_string()]);
        assert!(scenario.ignores("MUTE_OFF"));
        assert!(!scenario.ignores("MUTE_ON"));
    }

    #[test]
    fn test_scenario_json_round_trip() {
        let scenario = off_muted_baseline();
        let json = serde_json::to_string(&scenario).unwrap();
        let back: BaselineScenario = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scenario);
    }

    #[test]
    fn test_setup_defaults_when_absent() {
        let scenario: BaselineScenario =
            serde_json::from_str(r#"{ "baseline": "Off" }"#).unwrap();
        assert!(scenario.setup.is_empty());
        assert!(scenario.ignore.is_empty());
    }
}
