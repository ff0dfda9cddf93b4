use crate::error::{RelayError, Result};
use serde::Serialize;
use std::{borrow::Borrow, fmt, str::FromStr};

/// Separator between the type name and the internal id inside a decoded token.
///
/// Type names are GraphQL names and can never contain it. Internal ids may.
pub const DELIMITER: char = ':';

/// Checks the GraphQL name grammar `[_A-Za-z][_0-9A-Za-z]*`.
pub(crate) fn check_type_name(name: &str) -> std::result::Result<(), &'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Err("type name is empty"),
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        Some(_) => return Err("type name must start with a letter or underscore"),
    }
    if chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err("type name may only contain letters, digits and underscores")
    }
}

/// Name of an object type that participates in global identification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        check_type_name(&name)
            .map_err(|reason| RelayError::InvalidTypeName(format!("'{}': {}", name, reason)))?;
        Ok(Self(name))
    }

    /// Caller guarantees `name` already passed `check_type_name`.
    pub(crate) fn from_checked(name: &str) -> Self {
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TypeName {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TypeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TypeName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TypeName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Backing-store key of a record, meaningful only within its own type.
///
/// Integer keys are carried in their decimal form; use [`InternalId::parse`]
/// to get them back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct InternalId(String);

impl InternalId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Parses the id into a typed key, e.g. `u64` for integer primary keys.
    pub fn parse<T: FromStr>(&self) -> Result<T> {
        self.0.parse::<T>().map_err(|_| {
            RelayError::MalformedId(format!(
                "internal id '{}' is not a valid {}",
                self.0,
                std::any::type_name::<T>()
            ))
        })
    }
}

impl fmt::Display for InternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for InternalId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for InternalId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<&String> for InternalId {
    fn from(id: &String) -> Self {
        Self(id.clone())
    }
}

macro_rules! internal_id_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for InternalId {
                fn from(id: $t) -> Self {
                    Self(id.to_string())
                }
            }
        )*
    };
}

internal_id_from_int!(i32, i64, u32, u64, usize);

impl PartialEq<str> for InternalId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for InternalId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Opaque token handed to clients in place of an internal id.
///
/// Holding a `GlobalId` says nothing about whether it decodes; it may have
/// come straight from a client argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GlobalId(String);

impl GlobalId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for GlobalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for GlobalId {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for GlobalId {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl AsRef<str> for GlobalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Decoded form of a [`GlobalId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NodeDescriptor {
    pub type_name: TypeName,
    pub internal_id: InternalId,
}

impl NodeDescriptor {
    pub fn new(type_name: TypeName, internal_id: InternalId) -> Self {
        Self {
            type_name,
            internal_id,
        }
    }
}

/// Registration hooks a node type supplies to the codec.
///
/// `type_name` plays the role of the type resolver and `internal_id` the
/// internal-id fetcher. Polymorphic values implement it with a `match` over
/// their variants.
pub trait Identify {
    fn type_name(&self) -> &'static str;

    fn internal_id(&self) -> InternalId;
}
