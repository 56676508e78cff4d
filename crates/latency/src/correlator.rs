//! Per-frame state machine pairing screen toggles with sensor samples.
//!
//! Every wall-clock second the correlator flips the level it wants painted and
//! marks the change as [`ToggleState::Requested`]. Because the frame painted
//! during that tick only reaches the screen once the buffers swap, the commit
//! is recorded on the following tick. The first sensor sample drained after a
//! commit is paired with it and reported as a latency; any other sample is an
//! orphan.

use std::fmt;

use chrono::{TimeDelta, Timelike};
use crossbeam_channel::Receiver;

use crate::clock::Timestamp;
use crate::format::{format_latency, format_timestamp};
use crate::sample::{Level, Sample};

/// Progress of the toggle currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Idle,
    /// A new level was selected; the swap is not yet confirmed.
    Requested,
    /// The swap is confirmed; latencies are measured from `at`.
    Committed { at: Timestamp },
}

/// Observable outcome of a tick, one per measurement line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Committed { at: Timestamp, level: Level },
    Matched { sample: Sample, latency: TimeDelta },
    Orphan { sample: Sample },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Committed { at, level } => {
                write!(f, "{}: -> {level}", format_timestamp(at))
            }
            Event::Matched { sample, latency } => write!(
                f,
                "{}: <- {} ({})",
                format_timestamp(&sample.arrival),
                sample.level,
                format_latency(*latency)
            ),
            Event::Orphan { sample } => write!(
                f,
                "{}: <- {} (?)",
                format_timestamp(&sample.arrival),
                sample.level
            ),
        }
    }
}

/// Owns the toggle schedule and the consuming end of the sample channel.
pub struct Correlator {
    samples: Receiver<Sample>,
    current_level: Level,
    last_toggle_second: Option<u32>,
    toggle: ToggleState,
}

impl Correlator {
    /// Starts idle on a black screen with no toggle scheduled yet, so the
    /// first tick requests one.
    pub fn new(samples: Receiver<Sample>) -> Self {
        Self {
            samples,
            current_level: Level::Black,
            last_toggle_second: None,
            toggle: ToggleState::Idle,
        }
    }

    /// Advances the state machine by one frame.
    ///
    /// Commit detection runs before the drain, and the drain before
    /// scheduling, so samples drained here are never compared against a
    /// request issued in the same tick.
    pub fn tick(&mut self, now: Timestamp) -> Vec<Event> {
        let mut events = Vec::new();

        if self.toggle == ToggleState::Requested {
            self.toggle = ToggleState::Committed { at: now };
            events.push(Event::Committed {
                at: now,
                level: self.current_level,
            });
        }

        let toggle = &mut self.toggle;
        for sample in self.samples.try_iter() {
            events.push(pair_sample(toggle, sample));
        }

        let second = now.second();
        if self.last_toggle_second != Some(second) {
            self.current_level = self.current_level.flipped();
            self.last_toggle_second = Some(second);
            self.toggle = ToggleState::Requested;
            tracing::trace!(level = %self.current_level, "toggle requested");
        }

        events
    }

    /// Level the render sink should paint this frame.
    pub fn current_level(&self) -> Level {
        self.current_level
    }

    pub fn toggle_state(&self) -> ToggleState {
        self.toggle
    }

    pub fn last_toggle_second(&self) -> Option<u32> {
        self.last_toggle_second
    }
}

fn pair_sample(toggle: &mut ToggleState, sample: Sample) -> Event {
    match *toggle {
        ToggleState::Committed { at } => {
            *toggle = ToggleState::Idle;
            Event::Matched {
                sample,
                latency: sample.arrival - at,
            }
        }
        ToggleState::Idle | ToggleState::Requested => Event::Orphan { sample },
    }
}
