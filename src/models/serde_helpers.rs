//! Serde helpers for quirky wire values.

use serde::{Deserialize, Deserializer};

/// Decodes JSON `null` as the type's default value.
///
/// The API emits explicit nulls for unset optional fields (e.g., an
/// address without a callback URL), which must decode the same as an
/// absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
