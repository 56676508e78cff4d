use std::io::Cursor;

use chrono::{Local, TimeDelta, TimeZone};
use crossbeam_channel::unbounded;
use latency::{sensor, Correlator, Event, Level, ReaderError, Timestamp, ToggleState};

fn at(second: u32, millis: i64) -> Timestamp {
    Local
        .with_ymd_and_hms(2024, 3, 1, 10, 0, second)
        .single()
        .expect("unambiguous local time")
        + TimeDelta::milliseconds(millis)
}

#[test]
fn sensor_bytes_flow_into_latency_lines() {
    let (tx, rx) = unbounded();
    let mut correlator = Correlator::new(rx);

    assert!(correlator.tick(at(0, 100)).is_empty());
    assert_eq!(correlator.current_level(), Level::White);

    // The sensor sees the screen go white 10ms after the next frame.
    let mut arrivals = vec![at(0, 126)].into_iter();
    let err = sensor::read_samples(Cursor::new(vec![1]), tx.clone(), move || {
        arrivals.next().expect("one arrival per byte")
    });
    assert!(matches!(err, ReaderError::EndOfStream));

    let lines: Vec<String> = correlator
        .tick(at(0, 116))
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        lines,
        vec![
            "10:00:00.116: -> 1".to_string(),
            "10:00:00.126: <- 1 (10ms)".to_string(),
        ]
    );
    assert_eq!(correlator.toggle_state(), ToggleState::Idle);

    // A second later the screen flips back to black.
    assert!(correlator.tick(at(1, 3)).is_empty());
    assert_eq!(correlator.current_level(), Level::Black);

    let mut arrivals = vec![at(1, 40), at(1, 41)].into_iter();
    sensor::read_samples(Cursor::new(vec![0, 0]), tx, move || {
        arrivals.next().expect("one arrival per byte")
    });

    let events = correlator.tick(at(1, 20));
    assert_eq!(events.len(), 3);
    assert!(matches!(
        events[0],
        Event::Committed {
            level: Level::Black,
            ..
        }
    ));
    match &events[1] {
        Event::Matched { sample, latency } => {
            assert_eq!(sample.level, Level::Black);
            assert_eq!(*latency, TimeDelta::milliseconds(20));
        }
        other => panic!("expected a matched sample, got {other:?}"),
    }
    assert_eq!(events[2].to_string(), "10:00:01.041: <- 0 (?)");
}
