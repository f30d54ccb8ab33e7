use std::collections::BTreeMap;

use serde::Serialize;

use super::ResourceType;

/// Resolved tags per managed object: `type -> id -> ["<prefix><category>:<tag>", ...]`.
///
/// Every [`ResourceType`] is present as a key, even when nothing is tagged.
/// Tag lists keep insertion order and are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResourceTagMap(BTreeMap<ResourceType, BTreeMap<String, Vec<String>>>);

impl ResourceTagMap {
    /// Create a map with an empty entry for every recognized type.
    pub fn new() -> Self {
        Self(
            ResourceType::ALL
                .into_iter()
                .map(|t| (t, BTreeMap::new()))
                .collect(),
        )
    }

    /// Append `tag` to the list of resource `id`, creating the list if needed.
    pub fn push<I, T>(&mut self, kind: ResourceType, id: I, tag: T)
    where
        I: Into<String>,
        T: Into<String>,
    {
        self.0
            .entry(kind)
            .or_default()
            .entry(id.into())
            .or_default()
            .push(tag.into());
    }

    /// Tags attached to a single resource, if it has any.
    pub fn get(&self, kind: ResourceType, id: &str) -> Option<&[String]> {
        self.0.get(&kind)?.get(id).map(Vec::as_slice)
    }

    /// All tagged resources of one type, ordered by id.
    pub fn resources(&self, kind: ResourceType) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .get(&kind)
            .into_iter()
            .flat_map(|m| m.iter().map(|(id, tags)| (id.as_str(), tags.as_slice())))
    }

    /// Number of tagged resources across all types.
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResourceType, &BTreeMap<String, Vec<String>>)> {
        self.0.iter().map(|(t, m)| (*t, m))
    }
}

impl Default for ResourceTagMap {
    fn default() -> Self {
        Self::new()
    }
}
