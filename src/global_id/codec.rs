use super::types::{
    DELIMITER, GlobalId, Identify, InternalId, NodeDescriptor, TypeName, check_type_name,
};
use crate::error::{RelayError, Result};
use base64::{
    Engine as _,
    engine::{
        GeneralPurpose,
        general_purpose::{STANDARD, URL_SAFE_NO_PAD},
    },
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Binary-to-text transformation applied to `type:id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IdFormat {
    /// URL-safe alphabet, no padding.
    #[default]
    UrlSafe,
    /// Classic alphabet with `=` padding, as issued by most Relay servers.
    Standard,
}

impl IdFormat {
    fn engine(self) -> &'static GeneralPurpose {
        match self {
            IdFormat::UrlSafe => &URL_SAFE_NO_PAD,
            IdFormat::Standard => &STANDARD,
        }
    }
}

impl fmt::Display for IdFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdFormat::UrlSafe => write!(f, "url-safe"),
            IdFormat::Standard => write!(f, "standard"),
        }
    }
}

impl FromStr for IdFormat {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "url-safe" | "urlsafe" | "url_safe" => Ok(IdFormat::UrlSafe),
            "standard" | "classic" => Ok(IdFormat::Standard),
            _ => Err(RelayError::Config(format!("Invalid ID format: {}", s))),
        }
    }
}

/// Encodes and decodes global IDs.
///
/// New IDs are always issued in the primary format. Decoding tries the primary
/// format first and then every accepted format in order, so a format can be
/// rotated without invalidating IDs clients already hold. Only canonical
/// encodings are accepted, which keeps `decode` the exact inverse of `encode`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdCodec {
    primary: IdFormat,
    accepted: Vec<IdFormat>,
}

impl IdCodec {
    pub fn new(primary: IdFormat) -> Self {
        Self {
            primary,
            accepted: Vec::new(),
        }
    }

    /// Also decode IDs issued in `format`.
    pub fn accepting(mut self, format: IdFormat) -> Self {
        if format != self.primary && !self.accepted.contains(&format) {
            self.accepted.push(format);
        }
        self
    }

    pub fn primary(&self) -> IdFormat {
        self.primary
    }

    pub fn accepted(&self) -> &[IdFormat] {
        &self.accepted
    }

    fn formats(&self) -> impl Iterator<Item = IdFormat> + '_ {
        std::iter::once(self.primary).chain(self.accepted.iter().copied())
    }

    pub fn encode(&self, type_name: &str, internal_id: impl Into<InternalId>) -> Result<GlobalId> {
        let internal_id = internal_id.into();
        check_type_name(type_name)
            .map_err(|reason| RelayError::Encoding(format!("'{}': {}", type_name, reason)))?;
        if internal_id.is_empty() {
            return Err(RelayError::Encoding(format!(
                "internal id for {} is empty",
                type_name
            )));
        }

        let raw = format!("{}{}{}", type_name, DELIMITER, internal_id);
        Ok(GlobalId::from(self.primary.engine().encode(raw)))
    }

    /// Encodes the ID of a resolved value through its [`Identify`] hooks.
    pub fn global_id_of<T: Identify + ?Sized>(&self, value: &T) -> Result<GlobalId> {
        self.encode(value.type_name(), value.internal_id())
    }

    /// Splits a token back into its type name and internal id.
    ///
    /// Registration of the decoded type is not checked here.
    pub fn decode(&self, global_id: &str) -> Result<NodeDescriptor> {
        let bytes = self
            .formats()
            .find_map(|format| format.engine().decode(global_id).ok())
            .ok_or_else(|| malformed(global_id, "not a valid encoded token"))?;
        let raw =
            String::from_utf8(bytes).map_err(|_| malformed(global_id, "payload is not UTF-8"))?;

        // First delimiter only: the id half may contain more of them.
        let (type_part, id_part) = raw
            .split_once(DELIMITER)
            .ok_or_else(|| malformed(global_id, "missing type delimiter"))?;
        check_type_name(type_part).map_err(|reason| malformed(global_id, reason))?;
        if id_part.is_empty() {
            return Err(malformed(global_id, "internal id is empty"));
        }

        Ok(NodeDescriptor::new(
            TypeName::from_checked(type_part),
            InternalId::from(id_part),
        ))
    }

    /// Decodes and insists the token names `expected_type_name`.
    ///
    /// Resolvers taking a reference to a node of a known type should use this
    /// rather than [`IdCodec::decode`].
    pub fn decode_with_expected_type(
        &self,
        global_id: &str,
        expected_type_name: &str,
    ) -> Result<InternalId> {
        let descriptor = self.decode(global_id)?;
        if descriptor.type_name != expected_type_name {
            return Err(RelayError::TypeMismatch {
                expected: expected_type_name.to_string(),
                actual: descriptor.type_name.to_string(),
            });
        }
        Ok(descriptor.internal_id)
    }
}

fn malformed(global_id: &str, reason: &str) -> RelayError {
    tracing::debug!(global_id, reason, "Rejected global ID");
    RelayError::MalformedId(format!("'{}': {}", global_id, reason))
}

/// [`IdCodec::encode`] with the default codec.
pub fn encode(type_name: &str, internal_id: impl Into<InternalId>) -> Result<GlobalId> {
    IdCodec::default().encode(type_name, internal_id)
}

/// [`IdCodec::decode`] with the default codec.
pub fn decode(global_id: &str) -> Result<NodeDescriptor> {
    IdCodec::default().decode(global_id)
}

/// [`IdCodec::decode_with_expected_type`] with the default codec.
pub fn decode_with_expected_type(global_id: &str, expected_type_name: &str) -> Result<InternalId> {
    IdCodec::default().decode_with_expected_type(global_id, expected_type_name)
}
