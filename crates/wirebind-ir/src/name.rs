//! Fully-qualified declaration names.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identity of a declared type or interface.
///
/// A name is a library name plus a declaration identifier, rendered as
/// `library/Ident`. Name equality is declaration identity: the memo caches
/// and model maps are keyed by it. Serializes as the rendered string so
/// name-keyed maps survive formats with string-only keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name {
    library: String,
    ident: String,
}

impl Name {
    pub fn new(library: impl Into<String>, ident: impl Into<String>) -> Self {
        Self {
            library: library.into(),
            ident: ident.into(),
        }
    }

    pub fn library(&self) -> &str {
        &self.library
    }

    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// Fully-qualified member name, e.g. `library/Interface.method`.
    ///
    /// This is the string the hash ordinal policy operates on, so its shape
    /// is part of wire compatibility and must not change.
    pub fn member(&self, member: &str) -> String {
        format!("{}/{}.{}", self.library, self.ident, member)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.library, self.ident)
    }
}

impl FromStr for Name {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (library, ident) = s
            .rsplit_once('/')
            .ok_or_else(|| format!("name {s:?} is missing a library qualifier"))?;
        Ok(Self::new(library, ident))
    }
}

impl Serialize for Name {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
