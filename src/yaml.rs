//! YAML text entry points for `Nullable` values.

use log::debug;
use serde::{de::DeserializeOwned, Serialize};
use crate::{null::Nullable, Result};

pub fn to_string<T: Serialize>(value: &Nullable<T>) -> Result<String> {
    let text = serde_yaml::to_string(value)?;
    debug!("Encoded YAML: {}", text.trim_end());
    Ok(text)
}

pub fn from_str<T>(text: &str) -> Result<Nullable<T>>
where
    T: DeserializeOwned + Default
{
    Ok(serde_yaml::from_str(text)?)
}

/// Decodes `text` into `target`. On error `target` keeps its previous state.
pub fn decode_into<T>(text: &str, target: &mut Nullable<T>) -> Result<()>
where
    T: DeserializeOwned + Default
{
    *target = from_str(text)?;
    Ok(())
}
