//! Background reader turning the sensor byte stream into [`Sample`]s.

use std::io::{self, ErrorKind, Read};
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;

use crate::clock::Clock;
use crate::sample::{Level, Sample};

/// Why the reader loop stopped. The loop never stops successfully.
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    #[error("sensor stream ended")]
    EndOfStream,
    #[error("failed to read from sensor: {0}")]
    Io(#[from] io::Error),
    #[error("sample channel closed")]
    Disconnected,
}

/// Reads one byte at a time, stamping each with `clock`, until the source fails.
///
/// Timeouts are the serial driver's way of reporting that no byte arrived yet,
/// so they are retried; every other failure ends the loop.
pub fn read_samples<R, C>(mut source: R, samples: Sender<Sample>, mut clock: C) -> ReaderError
where
    R: Read,
    C: Clock,
{
    let mut byte = [0u8; 1];
    loop {
        match source.read(&mut byte) {
            Ok(0) => return ReaderError::EndOfStream,
            Ok(_) => {
                let sample = Sample::new(clock.now(), Level::from_byte(byte[0]));
                tracing::trace!(level = %sample.level, "sensor sample");
                if samples.send(sample).is_err() {
                    return ReaderError::Disconnected;
                }
            }
            Err(err) if matches!(err.kind(), ErrorKind::TimedOut | ErrorKind::Interrupted) => {}
            Err(err) => return ReaderError::Io(err),
        }
    }
}

/// Runs [`read_samples`] on a dedicated thread and hands its terminal error to
/// `on_failure`.
pub fn spawn<R, C, F>(
    source: R,
    samples: Sender<Sample>,
    clock: C,
    on_failure: F,
) -> io::Result<JoinHandle<()>>
where
    R: Read + Send + 'static,
    C: Clock + 'static,
    F: FnOnce(ReaderError) + Send + 'static,
{
    thread::Builder::new()
        .name("dlat-sensor".into())
        .spawn(move || {
            let err = read_samples(source, samples, clock);
            on_failure(err);
        })
}
