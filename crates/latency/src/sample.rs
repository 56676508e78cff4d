use std::fmt;

use crate::clock::Timestamp;

/// One-bit brightness value shared by the screen and the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    #[default]
    Black,
    White,
}

impl Level {
    /// Interprets a sensor byte; zero is dark, anything else is lit.
    pub fn from_byte(byte: u8) -> Self {
        if byte == 0 {
            Level::Black
        } else {
            Level::White
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Level::Black => Level::White,
            Level::White => Level::Black,
        }
    }

    pub fn as_bit(self) -> u8 {
        match self {
            Level::Black => 0,
            Level::White => 1,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_bit())
    }
}

/// A timestamped brightness reading from the photosensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// When the reader thread received the byte.
    pub arrival: Timestamp,
    pub level: Level,
}

impl Sample {
    pub fn new(arrival: Timestamp, level: Level) -> Self {
        Self { arrival, level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonzero_bytes_read_as_white() {
        assert_eq!(Level::from_byte(0), Level::Black);
        assert_eq!(Level::from_byte(1), Level::White);
        assert_eq!(Level::from_byte(0xff), Level::White);
    }

    #[test]
    fn flipping_alternates_and_displays_as_bit() {
        assert_eq!(Level::Black.flipped(), Level::White);
        assert_eq!(Level::White.flipped().flipped(), Level::White);
        assert_eq!(Level::White.to_string(), "1");
        assert_eq!(Level::default().to_string(), "0");
    }
}
