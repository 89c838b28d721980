use crate::error::{EncojiError, Result};
use std::path::PathBuf;

/// Which transform is applied to each input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}

/// Where the bytes to hide come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    Text(String),
    File(PathBuf),
}

impl PayloadSource {
    pub fn load(&self) -> Result<Vec<u8>> {
        match self {
            Self::Text(text) => Ok(text.as_bytes().to_vec()),
            Self::File(path) => Ok(std::fs::read(path)?),
        }
    }
}

/// Validated driver configuration
#[derive(Debug, Clone)]
pub struct SmugglerConfig {
    pub mode: Mode,
    pub payload: Vec<u8>,
}

impl SmugglerConfig {
    /// Build a config, reading the payload when one is given
    ///
    /// Encode mode needs a payload source. Decode mode ignores it. An empty
    /// payload is only rejected once a line is encoded.
    pub fn new(mode: Mode, payload: Option<&PayloadSource>) -> Result<Self> {
        let payload = match (mode, payload) {
            (Mode::Encode, None) => return Err(EncojiError::MissingPayload),
            (Mode::Encode, Some(source)) => source.load()?,
            (Mode::Decode, _) => Vec::new(),
        };

        Ok(Self { mode, payload })
    }

    pub fn encode(payload: &PayloadSource) -> Result<Self> {
        Self::new(Mode::Encode, Some(payload))
    }

    pub fn decode() -> Self {
        Self {
            mode: Mode::Decode,
            payload: Vec::new(),
        }
    }
}
