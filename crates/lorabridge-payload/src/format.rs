use crate::{CayenneLppDecoder, FeatherDecoder, PayloadDecoder};
use serde::{Deserialize, Serialize};

/// Payload codec selection. The codec is fixed per deployment through
/// configuration, never negotiated per message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadFormat {
    #[default]
    Feather,
    CayenneLpp,
}

impl PayloadFormat {
    /// Build the decoder for this format
    pub fn decoder(&self) -> Box<dyn PayloadDecoder + Send + Sync> {
        match self {
            PayloadFormat::Feather => Box::new(FeatherDecoder::new()),
            PayloadFormat::CayenneLpp => Box::new(CayenneLppDecoder::new()),
        }
    }
}
