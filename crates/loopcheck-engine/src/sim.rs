//! Simulated looper engine.
//!
//! A deterministic stand-in for the real engine, faithful to its
//! observable control behavior: commands are acknowledged after a
//! configurable number of `request_pending` polls, and the transition
//! function reproduces the engine's settled outcomes for the scenario
//! suites (record/overdub cycle, mute toggle, undo on empty history,
//! pause idempotence).
//!
//! Instrumented for the tester's own invariants: it logs every issued
//! command and records any request that arrives while another is still
//! pending, which the no-overlap tests assert never happens.

use loopcheck_catalog::CommandCatalog;
use serde::{Deserialize, Serialize};

use crate::handle::{LooperHandle, OutputControl};

// Engine wire codes for the states the simulation can settle in.
const OFF: i32 = 0;
const RECORDING: i32 = 2;
const PLAYING: i32 = 4;
const OVERDUBBING: i32 = 5;
const MULTIPLYING: i32 = 6;
const INSERTING: i32 = 7;
const REPLACING: i32 = 8;
const DELAY: i32 = 9;
const MUTED: i32 = 10;
const SCRATCHING: i32 = 11;
const SUBSTITUTE: i32 = 13;
const PAUSED: i32 = 14;
const OFF_MUTED: i32 = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of `request_pending` polls a request stays pending before
    /// it is applied. Zero means the first poll observes it applied.
    pub ack_latency_polls: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ack_latency_polls: 2,
        }
    }
}

/// In-process simulated engine implementing [`LooperHandle`].
#[derive(Debug)]
pub struct SimLooper {
    catalog: CommandCatalog,
    config: SimConfig,
    state: i32,
    has_loop: bool,
    baseline_muted: bool,
    pending: Option<usize>,
    polls_left: u32,
    issued: Vec<usize>,
    overlaps: Vec<usize>,
}

impl SimLooper {
    pub fn new(catalog: CommandCatalog, config: SimConfig) -> Self {
        Self {
            catalog,
            config,
            state: OFF,
            has_loop: false,
            baseline_muted: false,
            pending: None,
            polls_left: 0,
            issued: Vec::new(),
            overlaps: Vec::new(),
        }
    }

    /// A fresh engine with the default looper command set.
    pub fn looper() -> Self {
        Self::new(CommandCatalog::looper(), SimConfig::default())
    }

    /// Settled state code, for instrumentation. The tester itself reads
    /// state through the control surface.
    pub fn state_code(&self) -> i32 {
        self.state
    }

    /// Every command index received, in arrival order.
    pub fn issued(&self) -> &[usize] {
        &self.issued
    }

    /// Commands that arrived while a previous request was still pending.
    /// Non-empty means the caller broke the one-in-flight invariant.
    pub fn overlaps(&self) -> &[usize] {
        &self.overlaps
    }

    /// The idle state a cancel or undo falls back to.
    fn baseline(&self) -> i32 {
        if self.baseline_muted {
            OFF_MUTED
        } else {
            OFF
        }
    }

    /// Close an in-progress recording, as any mode command does.
    fn close_pending_record(&mut self) {
        if self.state == RECORDING {
            self.has_loop = true;
            self.state = PLAYING;
        }
    }

    /// Enter `mode` if a loop exists, or back to Playing if already there.
    fn toggle_mode(&mut self, mode: i32) {
        self.close_pending_record();
        if !self.has_loop {
            return;
        }
        self.state = if self.state == mode { PLAYING } else { mode };
    }

    fn apply(&mut self, index: usize) {
        let name = match self.catalog.name_of(index) {
            Ok(n) => n.to_string(),
            // The real engine ignores indices it does not understand.
            Err(_) => return,
        };

        // Remember which idle variant we left, so cancels land back on it.
        match self.state {
            OFF => self.baseline_muted = false,
            OFF_MUTED => self.baseline_muted = true,
            _ => {}
        }

        match name.as_str() {
            "RECORD" => {
                if self.state == RECORDING {
                    self.has_loop = true;
                    self.state = PLAYING;
                } else {
                    self.state = RECORDING;
                }
            }
            "OVERDUB" => self.toggle_mode(OVERDUBBING),
            "MULTIPLY" => self.toggle_mode(MULTIPLYING),
            "INSERT" => self.toggle_mode(INSERTING),
            "REPLACE" => self.toggle_mode(REPLACING),
            "SUBSTITUTE" => self.toggle_mode(SUBSTITUTE),
            "SCRATCH" => self.toggle_mode(SCRATCHING),
            "DELAY" => {
                self.close_pending_record();
                self.state = DELAY;
            }
            "MUTE" => {
                self.close_pending_record();
                if self.has_loop {
                    self.state = if self.state == MUTED { PLAYING } else { MUTED };
                } else {
                    self.state = if self.state == OFF_MUTED { OFF } else { OFF_MUTED };
                }
            }
            "MUTE_ON" => {
                self.close_pending_record();
                self.state = if self.has_loop { MUTED } else { OFF_MUTED };
            }
            "MUTE_OFF" => {
                self.close_pending_record();
                self.state = if self.has_loop { PLAYING } else { OFF };
            }
            "PAUSE" => {
                self.close_pending_record();
                if self.has_loop {
                    self.state = if self.state == PAUSED { PLAYING } else { PAUSED };
                }
            }
            "PAUSE_ON" => {
                self.close_pending_record();
                if self.has_loop {
                    self.state = PAUSED;
                }
            }
            "PAUSE_OFF" => {
                self.close_pending_record();
                if self.has_loop {
                    self.state = PLAYING;
                }
            }
            "TRIGGER" | "ONESHOT" | "REVERSE" | "REDO" | "REDO_ALL" => {
                self.close_pending_record();
                if self.has_loop {
                    self.state = PLAYING;
                }
            }
            "UNDO" | "UNDO_ALL" => {
                if self.state == RECORDING {
                    // Cancel the recording; no loop was created.
                    self.state = self.baseline();
                } else if self.has_loop {
                    self.has_loop = false;
                    self.state = self.baseline();
                }
                // Nothing recorded: undo is a no-op, not an error.
            }
            // Settings toggles leave the play state untouched.
            "REDO_TOG" | "QUANT_TOG" | "ROUND_TOG" => {}
            _ => {}
        }
    }
}

impl LooperHandle for SimLooper {
    fn request_command(&mut self, index: usize) {
        if self.pending.is_some() {
            self.overlaps.push(index);
        }
        self.pending = Some(index);
        self.polls_left = self.config.ack_latency_polls;
        self.issued.push(index);
    }

    fn request_pending(&mut self) -> bool {
        match self.pending {
            None => false,
            Some(index) => {
                if self.polls_left == 0 {
                    self.apply(index);
                    self.pending = None;
                    false
                } else {
                    self.polls_left -= 1;
                    true
                }
            }
        }
    }

    fn read_control_value(&mut self, control: OutputControl) -> f32 {
        match control {
            OutputControl::State => self.state as f32,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(sim: &mut SimLooper, name: &str) {
        let index = sim.catalog.index_of(name).unwrap();
        sim.request_command(index);
        while sim.request_pending() {}
    }

    #[test]
    fn test_starts_off() {
        let mut sim = SimLooper::looper();
        assert_eq!(sim.read_control_value(OutputControl::State), 0.0);
    }

    #[test]
    fn test_ack_latency_polls() {
        let mut sim = SimLooper::new(
            CommandCatalog::looper(),
            SimConfig {
                ack_latency_polls: 3,
            },
        );
        let record = sim.catalog.index_of("RECORD").unwrap();
        sim.request_command(record);
        assert!(sim.request_pending());
        assert!(sim.request_pending());
        assert!(sim.request_pending());
        assert!(!sim.request_pending());
        assert_eq!(sim.state_code(), 2);
    }

    #[test]
    fn test_command_applied_only_once_acknowledged() {
        let mut sim = SimLooper::new(
            CommandCatalog::looper(),
            SimConfig {
                ack_latency_polls: 5,
            },
        );
        let record = sim.catalog.index_of("RECORD").unwrap();
        sim.request_command(record);
        sim.request_pending();
        // Still pending: the state control must read the old state.
        assert_eq!(sim.read_control_value(OutputControl::State), 0.0);
    }

    #[test]
    fn test_overlap_recorded() {
        let mut sim = SimLooper::looper();
        let record = sim.catalog.index_of("RECORD").unwrap();
        let mute = sim.catalog.index_of("MUTE").unwrap();
        sim.request_command(record);
        sim.request_command(mute);
        assert_eq!(sim.overlaps(), &[mute]);
    }

    #[test]
    fn test_record_twice_plays() {
        let mut sim = SimLooper::looper();
        issue(&mut sim, "RECORD");
        assert_eq!(sim.state_code(), 2);
        issue(&mut sim, "RECORD");
        assert_eq!(sim.state_code(), 4);
    }

    #[test]
    fn test_overdub_toggles_from_playing() {
        let mut sim = SimLooper::looper();
        issue(&mut sim, "RECORD");
        issue(&mut sim, "RECORD");
        issue(&mut sim, "OVERDUB");
        assert_eq!(sim.state_code(), 5);
        issue(&mut sim, "OVERDUB");
        assert_eq!(sim.state_code(), 4);
    }

    #[test]
    fn test_mute_toggles_off_variants() {
        let mut sim = SimLooper::looper();
        issue(&mut sim, "MUTE");
        assert_eq!(sim.state_code(), 20);
        issue(&mut sim, "MUTE");
        assert_eq!(sim.state_code(), 0);
    }

    #[test]
    fn test_undo_cancels_recording_back_to_muted_baseline() {
        let mut sim = SimLooper::looper();
        issue(&mut sim, "MUTE");
        issue(&mut sim, "RECORD");
        issue(&mut sim, "UNDO");
        assert_eq!(sim.state_code(), 20);
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut sim = SimLooper::looper();
        issue(&mut sim, "UNDO");
        assert_eq!(sim.state_code(), 0);
        issue(&mut sim, "UNDO_ALL");
        assert_eq!(sim.state_code(), 0);
    }

    #[test]
    fn test_pause_without_loop_is_noop() {
        let mut sim = SimLooper::looper();
        issue(&mut sim, "PAUSE");
        assert_eq!(sim.state_code(), 0);
    }

    #[test]
    fn test_pause_toggles_with_loop() {
        let mut sim = SimLooper::looper();
        issue(&mut sim, "RECORD");
        issue(&mut sim, "RECORD");
        issue(&mut sim, "PAUSE");
        assert_eq!(sim.state_code(), 14);
        issue(&mut sim, "PAUSE");
        assert_eq!(sim.state_code(), 4);
    }

    #[test]
    fn test_issued_log() {
        let mut sim = SimLooper::looper();
        issue(&mut sim, "MUTE");
        issue(&mut sim, "MUTE");
        let mute = sim.catalog.index_of("MUTE").unwrap();
        assert_eq!(sim.issued(), &[mute, mute]);
        assert!(sim.overlaps().is_empty());
    }
}
