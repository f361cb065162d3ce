//! Cayenne Low Power Payload (LPP) decoder.
//!
//! An LPP payload is a sequence of readings, each encoded as one channel
//! byte, one type byte, and a type-sized big-endian value. The standard
//! registry decoded here:
//!
//! | Type | Name           | Size | Scaling          |
//! |------|----------------|------|------------------|
//! | 0    | digital_input  | 1    | raw              |
//! | 1    | digital_output | 1    | raw              |
//! | 2    | analog_input   | 2    | signed, / 100    |
//! | 3    | analog_output  | 2    | signed, / 100    |
//! | 101  | illuminance    | 2    | unsigned, lux    |
//! | 102  | presence       | 1    | raw              |
//! | 103  | temperature    | 2    | signed, / 10 C   |
//! | 104  | humidity       | 1    | unsigned, / 2 %  |
//! | 113  | accelerometer  | 6    | 3 x i16, / 1000  |
//! | 115  | barometer      | 2    | unsigned, / 10   |
//! | 134  | gyrometer      | 6    | 3 x i16, / 100   |
//! | 136  | gps            | 9    | 3 x i24, see below |
//!
//! GPS latitude and longitude are scaled by 1/10000, altitude by 1/100.
//! Decoded readings are keyed `"{type_name}_{channel}"`.

use crate::error::{PayloadError, Result};
use crate::{DecodedPayload, PayloadDecoder};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Three-axis reading (accelerometer in g, gyrometer in deg/s)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisReading {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// GPS position reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsReading {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

/// Standard LPP sensor types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SensorType {
    DigitalInput,
    DigitalOutput,
    AnalogInput,
    AnalogOutput,
    Illuminance,
    Presence,
    Temperature,
    Humidity,
    Accelerometer,
    Barometer,
    Gyrometer,
    Gps,
}

impl SensorType {
    fn from_id(id: u8) -> Result<Self> {
        match id {
            0 => Ok(Self::DigitalInput),
            1 => Ok(Self::DigitalOutput),
            2 => Ok(Self::AnalogInput),
            3 => Ok(Self::AnalogOutput),
            101 => Ok(Self::Illuminance),
            102 => Ok(Self::Presence),
            103 => Ok(Self::Temperature),
            104 => Ok(Self::Humidity),
            113 => Ok(Self::Accelerometer),
            115 => Ok(Self::Barometer),
            134 => Ok(Self::Gyrometer),
            136 => Ok(Self::Gps),
            other => Err(PayloadError::UnsupportedType(other)),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::DigitalInput => "digital_input",
            Self::DigitalOutput => "digital_output",
            Self::AnalogInput => "analog_input",
            Self::AnalogOutput => "analog_output",
            Self::Illuminance => "illuminance",
            Self::Presence => "presence",
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Accelerometer => "accelerometer",
            Self::Barometer => "barometer",
            Self::Gyrometer => "gyrometer",
            Self::Gps => "gps",
        }
    }

    /// Value size in bytes, excluding the channel and type bytes
    fn data_size(self) -> usize {
        match self {
            Self::DigitalInput | Self::DigitalOutput | Self::Presence | Self::Humidity => 1,
            Self::AnalogInput
            | Self::AnalogOutput
            | Self::Illuminance
            | Self::Temperature
            | Self::Barometer => 2,
            Self::Accelerometer | Self::Gyrometer => 6,
            Self::Gps => 9,
        }
    }

    /// Decode `data_size` bytes into the JSON value for this type
    fn decode_value(self, data: &[u8]) -> Value {
        match self {
            Self::DigitalInput | Self::DigitalOutput | Self::Presence => json!(data[0]),
            Self::AnalogInput | Self::AnalogOutput => {
                json!(f64::from(read_i16_be(data)) / 100.0)
            }
            Self::Illuminance => json!(read_u16_be(data)),
            Self::Temperature => json!(f64::from(read_i16_be(data)) / 10.0),
            Self::Humidity => json!(f64::from(data[0]) / 2.0),
            Self::Accelerometer => json!(read_axes(data, 1000.0)),
            Self::Barometer => json!(f64::from(read_u16_be(data)) / 10.0),
            Self::Gyrometer => json!(read_axes(data, 100.0)),
            Self::Gps => json!(GpsReading {
                latitude: f64::from(read_i24_be(&data[0..3])) / 10000.0,
                longitude: f64::from(read_i24_be(&data[3..6])) / 10000.0,
                altitude: f64::from(read_i24_be(&data[6..9])) / 100.0,
            }),
        }
    }
}

fn read_u16_be(data: &[u8]) -> u16 {
    u16::from_be_bytes([data[0], data[1]])
}

fn read_i16_be(data: &[u8]) -> i16 {
    i16::from_be_bytes([data[0], data[1]])
}

fn read_i24_be(data: &[u8]) -> i32 {
    // Sign-extend 24-bit to 32-bit
    ((i32::from(data[0]) << 24) | (i32::from(data[1]) << 16) | (i32::from(data[2]) << 8)) >> 8
}

fn read_axes(data: &[u8], scale: f64) -> AxisReading {
    AxisReading {
        x: f64::from(read_i16_be(&data[0..2])) / scale,
        y: f64::from(read_i16_be(&data[2..4])) / scale,
        z: f64::from(read_i16_be(&data[4..6])) / scale,
    }
}

/// Decoder for Cayenne LPP payloads
#[derive(Debug, Default, Clone, Copy)]
pub struct CayenneLppDecoder;

impl CayenneLppDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl PayloadDecoder for CayenneLppDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedPayload> {
        let mut channels = Map::new();
        let mut offset = 0;

        while offset < bytes.len() {
            // Need at least 2 bytes for channel + type
            if offset + 2 > bytes.len() {
                return Err(PayloadError::InsufficientData {
                    expected: 2,
                    actual: bytes.len() - offset,
                });
            }

            let channel = bytes[offset];
            let sensor = SensorType::from_id(bytes[offset + 1])?;
            offset += 2;

            let size = sensor.data_size();
            if offset + size > bytes.len() {
                return Err(PayloadError::InsufficientData {
                    expected: size,
                    actual: bytes.len() - offset,
                });
            }

            let value = sensor.decode_value(&bytes[offset..offset + size]);
            offset += size;

            channels.insert(format!("{}_{}", sensor.name(), channel), value);
        }

        Ok(DecodedPayload::Channels(channels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_channels(bytes: &[u8]) -> Map<String, Value> {
        match CayenneLppDecoder::new().decode(bytes).unwrap() {
            DecodedPayload::Channels(channels) => channels,
            other => panic!("expected Channels, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_empty_payload() {
        let channels = decode_channels(&[]);

        assert!(channels.is_empty());
    }

    #[test]
    fn test_decode_temperature() {
        // channel 3, type 103, 0x0110 = 272 -> 27.2 C
        let channels = decode_channels(&[0x03, 0x67, 0x01, 0x10]);

        assert_eq!(channels.len(), 1);
        assert_eq!(channels["temperature_3"], json!(27.2));
    }

    #[test]
    fn test_decode_negative_temperature() {
        // 0xFFD7 = -41 -> -4.1 C
        let channels = decode_channels(&[0x01, 0x67, 0xFF, 0xD7]);

        assert_eq!(channels["temperature_1"], json!(-4.1));
    }

    #[test]
    fn test_decode_humidity() {
        // 0x64 = 100 half-percent steps -> 50.0 %
        let channels = decode_channels(&[0x05, 0x68, 0x64]);

        assert_eq!(channels["humidity_5"], json!(50.0));
    }

    #[test]
    fn test_decode_digital_and_analog() {
        let channels = decode_channels(&[
            0x00, 0x00, 0x01, // digital input, channel 0, on
            0x01, 0x02, 0xFF, 0xA7, // analog input, channel 1, -0.89
            0x04, 0x66, 0x01, // presence, channel 4
        ]);

        assert_eq!(channels.len(), 3);
        assert_eq!(channels["digital_input_0"], json!(1));
        assert_eq!(channels["analog_input_1"], json!(-0.89));
        assert_eq!(channels["presence_4"], json!(1));
    }

    #[test]
    fn test_decode_digital_output() {
        let channels = decode_channels(&[0x02, 0x01, 0x00]);

        assert_eq!(channels["digital_output_2"], json!(0));
    }

    #[test]
    fn test_decode_analog_output() {
        // 0xFF6A = -150 -> -1.5
        let channels = decode_channels(&[0x07, 0x03, 0xFF, 0x6A]);

        assert_eq!(channels["analog_output_7"], json!(-1.5));
    }

    #[test]
    fn test_decode_illuminance() {
        // 0x01F4 = 500 lux
        let channels = decode_channels(&[0x02, 0x65, 0x01, 0xF4]);

        assert_eq!(channels["illuminance_2"], json!(500));
    }

    #[test]
    fn test_decode_barometer() {
        // 0x2794 = 10132 -> 1013.2 hPa
        let channels = decode_channels(&[0x0A, 0x73, 0x27, 0x94]);

        assert_eq!(channels["barometer_10"], json!(1013.2));
    }

    #[test]
    fn test_decode_accelerometer() {
        let channels = decode_channels(&[0x06, 0x71, 0x04, 0xD2, 0xFB, 0x2E, 0x00, 0x00]);

        assert_eq!(
            channels["accelerometer_6"],
            json!({"x": 1.234, "y": -1.234, "z": 0.0})
        );
    }

    #[test]
    fn test_decode_gyrometer() {
        let channels = decode_channels(&[0x07, 0x86, 0x02, 0x1E, 0xFE, 0x0C, 0x00, 0x64]);

        assert_eq!(
            channels["gyrometer_7"],
            json!({"x": 5.42, "y": -5.0, "z": 1.0})
        );
    }

    #[test]
    fn test_decode_gps_with_negative_coordinates() {
        let channels = decode_channels(&[
            0x02, 0x88, 0xFE, 0x79, 0x60, 0x03, 0x20, 0xC8, 0xFF, 0xFA, 0x0B,
        ]);

        assert_eq!(
            channels["gps_2"],
            json!({"latitude": -10.0, "longitude": 20.5, "altitude": -15.25})
        );
    }

    #[test]
    fn test_decode_unsupported_type() {
        let result = CayenneLppDecoder::new().decode(&[0x01, 0x63, 0x00]);

        assert!(matches!(result, Err(PayloadError::UnsupportedType(99))));
    }

    #[test]
    fn test_decode_truncated_header() {
        let result = CayenneLppDecoder::new().decode(&[0x03]);

        assert!(matches!(
            result,
            Err(PayloadError::InsufficientData {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_decode_truncated_value() {
        // temperature needs 2 data bytes, only 1 present
        let result = CayenneLppDecoder::new().decode(&[0x03, 0x67, 0x01]);

        assert!(matches!(
            result,
            Err(PayloadError::InsufficientData {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_duplicate_channel_and_type_keeps_last() {
        let channels = decode_channels(&[0x01, 0x67, 0x01, 0x10, 0x01, 0x67, 0x00, 0xFA]);

        assert_eq!(channels.len(), 1);
        assert_eq!(channels["temperature_1"], json!(25.0));
    }

    #[test]
    fn test_decode_base64_multi_sensor() {
        let decoded = CayenneLppDecoder::new().decode_base64("A2cBEAVoZA==");

        match decoded {
            DecodedPayload::Channels(channels) => {
                assert_eq!(channels["temperature_3"], json!(27.2));
                assert_eq!(channels["humidity_5"], json!(50.0));
            }
            other => panic!("expected Channels, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_base64_unsupported_type_fails_total() {
        let decoded = CayenneLppDecoder::new().decode_base64("AWMA");

        assert_eq!(
            decoded,
            DecodedPayload::Failed {
                raw: "AWMA".to_string(),
                error: "unsupported sensor type: 99".to_string(),
            }
        );
    }
}
