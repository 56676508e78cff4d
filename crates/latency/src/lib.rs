//! Display latency correlation for `dlat`.
//!
//! A photosensor taped to the monitor reports one byte per brightness change
//! over a serial line. The pieces in this crate turn that byte stream into
//! latency figures:
//!
//! ```text
//!   serial port ──▶ sensor::read_samples ──(unbounded channel)──▶ Correlator::tick
//!                      (reader thread)                              (frame loop)
//!                                                                       │
//!                                                     Event lines ◀─────┘
//! ```
//!
//! The frame loop asks the [`Correlator`] which [`Level`] to paint, calls
//! [`Correlator::tick`] once per presented frame and prints the returned
//! [`Event`]s.

pub mod clock;
pub mod correlator;
pub mod format;
pub mod sample;
pub mod sensor;
pub mod serial;

pub use clock::{Clock, SystemClock, Timestamp};
pub use correlator::{Correlator, Event, ToggleState};
pub use sample::{Level, Sample};
pub use sensor::ReaderError;
pub use serial::{LineSettings, SerialError};
