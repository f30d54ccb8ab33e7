use std::collections::HashMap;

use tracing::trace;
use vtag_model::{ResourceTagMap, ResourceType, wire::TagAssociation};

use crate::error::{ApiError, ApiResult};

/// Category name used when a tag points at a category that was not listed.
pub const UNKNOWN_CATEGORY: &str = "unknown_category";

/// `<prefix><category>:<tag>`, with [`UNKNOWN_CATEGORY`] standing in for a missing category.
pub fn tag_display(prefix: &str, category: Option<&str>, name: &str) -> String {
    format!("{prefix}{}:{name}", category.unwrap_or(UNKNOWN_CATEGORY))
}

/// Tag id -> display string, remembering the order tags were listed in.
#[derive(Debug, Default)]
pub(crate) struct TagTable {
    ids: Vec<String>,
    display: HashMap<String, String>,
}

impl TagTable {
    pub(crate) fn insert(&mut self, id: String, display: String) {
        if self.display.insert(id.clone(), display).is_none() {
            self.ids.push(id);
        }
    }

    pub(crate) fn ids(&self) -> &[String] {
        &self.ids
    }

    pub(crate) fn display(&self, id: &str) -> Option<&str> {
        self.display.get(id).map(String::as_str)
    }
}

/// Spread every association's tag over the recognized objects it is attached to.
///
/// Fails if an association names a tag that was not part of `tags`.
pub(crate) fn join_associations(
    tags: &TagTable,
    associations: &[TagAssociation],
) -> ApiResult<ResourceTagMap> {
    let mut map = ResourceTagMap::new();
    for asso in associations {
        let display = tags.display(&asso.tag_id).ok_or_else(|| {
            ApiError::Response(format!("unknown tag id in association: {}", asso.tag_id))
        })?;

        for object in &asso.object_ids {
            match ResourceType::from_wire(&object.kind) {
                Some(kind) => map.push(kind, object.id.as_str(), display),
                None => trace!(kind = %object.kind, id = %object.id, "skipping unsupported resource type"),
            }
        }
    }
    Ok(map)
}
