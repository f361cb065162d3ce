pub mod cayenne_lpp;
pub mod error;
pub mod feather;
pub mod format;

pub use cayenne_lpp::CayenneLppDecoder;
pub use error::{PayloadError, Result};
pub use feather::{FeatherDecoder, FeatherFrame};
pub use format::PayloadFormat;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Decoded sensor fields, one variant per codec outcome.
///
/// `Failed` keeps the original base64 text next to the error message so a
/// record is produced for every uplink, decodable or not.
// Failed must precede Channels: deserialization of the untagged enum tries
// variants in order, and any JSON object matches the channel map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DecodedPayload {
    Feather(FeatherFrame),
    Failed { raw: String, error: String },
    Channels(Map<String, Value>),
}

/// Trait for decoding binary payload formats
pub trait PayloadDecoder {
    /// Decode a raw frame into sensor fields
    fn decode(&self, bytes: &[u8]) -> Result<DecodedPayload>;

    /// Decode a base64 payload, folding base64 and frame errors into
    /// [`DecodedPayload::Failed`] instead of returning them.
    fn decode_base64(&self, payload: &str) -> DecodedPayload {
        let frame = STANDARD
            .decode(payload)
            .map_err(PayloadError::from)
            .and_then(|bytes| self.decode(&bytes));

        match frame {
            Ok(decoded) => decoded,
            Err(e) => DecodedPayload::Failed {
                raw: payload.to_string(),
                error: e.to_string(),
            },
        }
    }
}
