//! # Wire Records and Normalization
//!
//! Raw server records may carry their identifier under either `id` or `_id`
//! (document stores surface the latter). [`WireRecord`] accepts both and
//! maps whichever is present onto the canonical `id`, deterministically,
//! before the record enters a cache. All other fields pass through unchanged.
//!
//! The mapping is an explicit, typed boundary: a record with no identifier
//! (or an empty one) is rejected here instead of producing a half-formed
//! entity downstream.

use crate::errors::NormalizeError;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A raw record as returned by the server, prior to identifier
/// canonicalization.
///
/// `F` is the entity's domain-field struct (everything except the
/// identifier).
#[derive(Debug, Clone, Deserialize)]
pub struct WireRecord<F> {
    /// Canonical identifier field.
    #[serde(default)]
    id: Option<String>,
    /// Alternate identifier field used by document-store backends.
    #[serde(default, rename = "_id")]
    object_id: Option<String>,
    /// Remaining domain fields, passed through unchanged.
    #[serde(flatten)]
    fields: F,
}

impl<F> WireRecord<F> {
    /// Resolve the canonical identifier and split off the domain fields.
    ///
    /// When both identifier fields are present, `id` wins. A missing or
    /// empty identifier is a boundary violation.
    pub fn canonicalize(self) -> Result<(String, F), NormalizeError> {
        match self.id.or(self.object_id) {
            Some(id) if !id.is_empty() => Ok((id, self.fields)),
            Some(_) => Err(NormalizeError::EmptyIdentifier),
            None => Err(NormalizeError::MissingIdentifier),
        }
    }

    /// Normalize into a domain entity.
    pub fn normalize<E>(self) -> Result<E, NormalizeError>
    where
        E: FromWire<Fields = F>,
    {
        let (id, fields) = self.canonicalize()?;
        Ok(E::assemble(id, fields))
    }
}

/// Conversion from a canonicalized wire record into a domain entity.
pub trait FromWire: Sized {
    /// Domain-field struct deserialized from the record body.
    type Fields: DeserializeOwned + Send;

    /// Assemble the entity from its canonical identifier and domain fields.
    fn assemble(id: String, fields: Self::Fields) -> Self;
}

/// Normalize a whole collection, failing on the first malformed record.
pub fn normalize_all<E: FromWire>(
    records: Vec<WireRecord<E::Fields>>,
) -> Result<Vec<E>, NormalizeError> {
    records.into_iter().map(WireRecord::normalize).collect()
}
