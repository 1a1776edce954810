//! JSON text entry points for `Nullable` values.
//!
//! NULL encodes as `null`; anything else encodes as the contained value would.

use log::debug;
use serde::{de::DeserializeOwned, Serialize};
use crate::{null::Nullable, Result};

pub fn to_string<T: Serialize>(value: &Nullable<T>) -> Result<String> {
    let text = serde_json::to_string(value)?;
    debug!("Encoded JSON: {}", text);
    Ok(text)
}

pub fn to_string_pretty<T: Serialize>(value: &Nullable<T>) -> Result<String> {
    let text = serde_json::to_string_pretty(value)?;
    debug!("Encoded JSON: {}", text);
    Ok(text)
}

pub fn from_str<T>(text: &str) -> Result<Nullable<T>>
where
    T: DeserializeOwned + Default
{
    Ok(serde_json::from_str(text)?)
}

/// Decodes `text` into `target`. On error `target` keeps its previous state.
pub fn decode_into<T>(text: &str, target: &mut Nullable<T>) -> Result<()>
where
    T: DeserializeOwned + Default
{
    *target = from_str(text)?;
    Ok(())
}
