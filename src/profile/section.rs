// Copyright (c) 2025 - Cowboy AI, Inc.
//! Named node sections
//!
//! The `orderers`, `peers` and `certificateAuthorities` blocks are mappings
//! from node name to entry. When a block has no entries it is written as an
//! explicit empty list (`[]`) rather than left out, which is what profile
//! consumers expect.

use indexmap::IndexMap;
use serde::de::{self, Deserializer, IgnoredAny};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

/// Mapping from node name to entry, in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSection<T> {
    entries: IndexMap<String, T>,
}

impl<T> Default for NodeSection<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T> NodeSection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry
    ///
    /// A repeated name replaces the earlier entry but keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, entry: T) -> Option<T> {
        self.entries.insert(name.into(), entry)
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }
}

impl<T> FromIterator<(String, T)> for NodeSection<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<T: Serialize> Serialize for NodeSection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.entries.is_empty() {
            serializer.serialize_seq(Some(0))?.end()
        } else {
            self.entries.serialize(serializer)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SectionRepr<T> {
    Entries(IndexMap<String, T>),
    Empty(Vec<IgnoredAny>),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for NodeSection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match SectionRepr::<T>::deserialize(deserializer)? {
            SectionRepr::Entries(entries) => Ok(Self { entries }),
            SectionRepr::Empty(items) if items.is_empty() => Ok(Self::default()),
            SectionRepr::Empty(_) => Err(de::Error::custom(
                "expected a mapping of named entries or an empty list",
            )),
        }
    }
}
