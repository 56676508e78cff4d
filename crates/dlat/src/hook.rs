use std::io::Write;

use anyhow::{Context, Result};
use latency::{Clock, Correlator, Level};
use renderer::{FillColor, FrameHook};

/// Bridges the correlator into the renderer's frame loop.
///
/// Each frame reads the clock, ticks the correlator, writes its events as
/// measurement lines to `out`, and paints the level it asks for.
pub struct MeasurementHook<C, W> {
    correlator: Correlator,
    clock: C,
    out: W,
}

impl<C, W> MeasurementHook<C, W>
where
    C: Clock,
    W: Write,
{
    pub fn new(correlator: Correlator, clock: C, out: W) -> Self {
        Self {
            correlator,
            clock,
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

impl<C, W> FrameHook for MeasurementHook<C, W>
where
    C: Clock,
    W: Write,
{
    fn update(&mut self) -> Result<()> {
        let now = self.clock.now();
        let events = self.correlator.tick(now);
        for event in &events {
            tracing::debug!(?event, "measurement event");
            writeln!(self.out, "{event}").context("failed to write measurement line")?;
        }
        if !events.is_empty() {
            self.out.flush().context("failed to flush measurement output")?;
        }
        Ok(())
    }

    fn fill(&self) -> FillColor {
        fill_for(self.correlator.current_level())
    }
}

fn fill_for(level: Level) -> FillColor {
    match level {
        Level::Black => FillColor::BLACK,
        Level::White => FillColor::WHITE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{Local, TimeDelta, TimeZone};
    use crossbeam_channel::unbounded;
    use latency::{Sample, Timestamp};

    fn at(millis: i64) -> Timestamp {
        Local
            .with_ymd_and_hms(2024, 3, 1, 10, 0, 0)
            .single()
            .expect("unambiguous local time")
            + TimeDelta::milliseconds(millis)
    }

    #[test]
    fn frames_print_lines_and_follow_the_level() {
        let (tx, rx) = unbounded();
        let mut frames = vec![at(100), at(116)].into_iter();
        let mut hook = MeasurementHook::new(
            Correlator::new(rx),
            move || frames.next().expect("one timestamp per frame"),
            Vec::new(),
        );
        assert_eq!(hook.fill(), FillColor::BLACK);

        hook.update().unwrap();
        assert_eq!(hook.fill(), FillColor::WHITE);

        tx.send(Sample::new(at(130), Level::White)).unwrap();
        hook.update().unwrap();

        let output = String::from_utf8(hook.into_output()).unwrap();
        assert_eq!(output, "10:00:00.116: -> 1\n10:00:00.130: <- 1 (14ms)\n");
    }
}
