//! Value encodings for stored snapshots

use crate::{storage::backend::KeyValueStore, Error, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Byte encoding used for every value written to a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Codec {
    /// Plain JSON, readable and compatible with browser-written data
    #[default]
    Json,
    /// CBOR (more compact)
    Cbor,
}

impl Codec {
    /// Encode a value into bytes
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        match self {
            Codec::Json => Ok(serde_json::to_vec(value)?),
            Codec::Cbor => serde_cbor::to_vec(&value)
                .map_err(|e| Error::Codec(format!("Failed to encode CBOR: {}", e))),
        }
    }

    /// Decode bytes previously produced by [`Codec::encode`]
    ///
    /// Malformed input is an error; nothing is coerced.
    pub fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        match self {
            Codec::Json => serde_json::from_slice(bytes)
                .map_err(|e| Error::Codec(format!("Failed to decode JSON: {}", e))),
            Codec::Cbor => serde_cbor::from_slice(bytes)
                .map_err(|e| Error::Codec(format!("Failed to decode CBOR: {}", e))),
        }
    }
}

/// Read and decode the value under `key`
pub fn read_value<T, S>(store: &S, codec: Codec, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(bytes) => {
            tracing::debug!("Loaded {} ({} bytes)", key, bytes.len());
            codec.decode(&bytes).map(Some)
        }
        None => Ok(None),
    }
}

/// Encode `value` and overwrite the slot under `key`
pub fn write_value<T, S>(store: &mut S, codec: Codec, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let bytes = codec.encode(value)?;
    tracing::debug!("Saving {} ({} bytes)", key, bytes.len());
    store.set(key, bytes)
}
