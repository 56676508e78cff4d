//! Serial transport for the photosensor.
//!
//! The sensor speaks a fixed line format and draws power from DTR, so the
//! settings are not user-configurable; [`LineSettings::default`] is what the
//! binary uses.

use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};

#[derive(Debug, thiserror::Error)]
pub enum SerialError {
    #[error("failed to open serial port {port}: {source}")]
    Open {
        port: String,
        #[source]
        source: serialport::Error,
    },
    #[error("failed to configure serial port {port}: {source}")]
    Configure {
        port: String,
        #[source]
        source: serialport::Error,
    },
}

/// Line parameters applied when opening the sensor port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSettings {
    pub baud_rate: u32,
    pub data_bits: DataBits,
    pub parity: Parity,
    pub stop_bits: StopBits,
    pub flow_control: FlowControl,
    /// Drive DTR high; the sensor is powered from it.
    pub assert_dtr: bool,
    /// How long a single read may block before the driver reports a timeout.
    pub read_timeout: Duration,
}

impl Default for LineSettings {
    fn default() -> Self {
        Self {
            baud_rate: 38_400,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
            flow_control: FlowControl::None,
            assert_dtr: true,
            read_timeout: Duration::from_secs(60),
        }
    }
}

/// Opens `port` and applies `settings`, returning a handle ready for reading.
pub fn open(port: &str, settings: &LineSettings) -> Result<Box<dyn SerialPort>, SerialError> {
    let mut handle = serialport::new(port, settings.baud_rate)
        .data_bits(settings.data_bits)
        .parity(settings.parity)
        .stop_bits(settings.stop_bits)
        .flow_control(settings.flow_control)
        .timeout(settings.read_timeout)
        .open()
        .map_err(|source| SerialError::Open {
            port: port.to_string(),
            source,
        })?;

    handle
        .write_data_terminal_ready(settings.assert_dtr)
        .map_err(|source| SerialError::Configure {
            port: port.to_string(),
            source,
        })?;

    tracing::info!(
        port,
        baud = settings.baud_rate,
        dtr = settings.assert_dtr,
        "opened sensor port"
    );
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_line_matches_sensor_firmware() {
        let settings = LineSettings::default();
        assert_eq!(settings.baud_rate, 38_400);
        assert_eq!(settings.data_bits, DataBits::Eight);
        assert_eq!(settings.flow_control, FlowControl::None);
        assert!(settings.assert_dtr);
    }

    #[test]
    fn missing_device_reports_open_failure() {
        let err = open("/nonexistent/dlat-sensor", &LineSettings::default())
            .err()
            .expect("opening a missing device must fail");
        assert!(matches!(err, SerialError::Open { .. }));
        assert!(err.to_string().contains("/nonexistent/dlat-sensor"));
    }
}
