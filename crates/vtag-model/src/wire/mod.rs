//! Payloads exchanged with the vSphere CIS tagging endpoints.
//!
//! Every response from these endpoints is wrapped as `{"value": ...}`; the envelope is
//! stripped by the session layer, so the types below describe only the inner `value`.
//! Unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// `GET tagging/category/id:{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub name: String,
}

/// `GET tagging/tag/id:{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    pub name: String,
    pub category_id: String,
}

/// Managed object a tag is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRef {
    pub id: String,
    /// Managed-object type name, e.g. `VirtualMachine` or `Folder`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// One record of `list-attached-objects-on-tags`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagAssociation {
    pub tag_id: String,
    pub object_ids: Vec<ObjectRef>,
}

/// Request body of `list-attached-objects-on-tags`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagAssociationQuery {
    pub tag_ids: Vec<String>,
}
