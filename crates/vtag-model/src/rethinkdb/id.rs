//! Compound primary keys of `rethinkdb.stats` rows.
//!
//! On the wire each id is an array whose first element names the row kind,
//! e.g. `["server", "<server-id>"]`. Decoding checks both the literal and the arity.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

fn split_id(parts: Vec<String>, kind: &'static str, arity: usize) -> Result<Vec<String>, ModelError> {
    if parts.len() != arity || parts.first().map(String::as_str) != Some(kind) {
        return Err(ModelError::InvalidDocumentId(format!(
            "expected [\"{kind}\", ..] with {arity} elements, got {parts:?}"
        )));
    }
    Ok(parts.into_iter().skip(1).collect())
}

/// `["cluster"]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ClusterStatsId;

impl TryFrom<Vec<String>> for ClusterStatsId {
    type Error = ModelError;
    fn try_from(parts: Vec<String>) -> Result<Self, Self::Error> {
        split_id(parts, "cluster", 1).map(|_| ClusterStatsId)
    }
}

impl From<ClusterStatsId> for Vec<String> {
    fn from(_: ClusterStatsId) -> Self {
        vec!["cluster".to_string()]
    }
}

/// `["server", <server id>]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ServerStatsId {
    pub server: String,
}

impl TryFrom<Vec<String>> for ServerStatsId {
    type Error = ModelError;
    fn try_from(parts: Vec<String>) -> Result<Self, Self::Error> {
        let mut rest = split_id(parts, "server", 2)?.into_iter();
        Ok(Self {
            server: rest.next().unwrap_or_default(),
        })
    }
}

impl From<ServerStatsId> for Vec<String> {
    fn from(id: ServerStatsId) -> Self {
        vec!["server".to_string(), id.server]
    }
}

/// `["table", <table id>]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct TableStatsId {
    pub table: String,
}

impl TryFrom<Vec<String>> for TableStatsId {
    type Error = ModelError;
    fn try_from(parts: Vec<String>) -> Result<Self, Self::Error> {
        let mut rest = split_id(parts, "table", 2)?.into_iter();
        Ok(Self {
            table: rest.next().unwrap_or_default(),
        })
    }
}

impl From<TableStatsId> for Vec<String> {
    fn from(id: TableStatsId) -> Self {
        vec!["table".to_string(), id.table]
    }
}

/// `["table_server", <table id>, <server id>]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ReplicaStatsId {
    pub table: String,
    pub server: String,
}

impl TryFrom<Vec<String>> for ReplicaStatsId {
    type Error = ModelError;
    fn try_from(parts: Vec<String>) -> Result<Self, Self::Error> {
        let mut rest = split_id(parts, "table_server", 3)?.into_iter();
        Ok(Self {
            table: rest.next().unwrap_or_default(),
            server: rest.next().unwrap_or_default(),
        })
    }
}

impl From<ReplicaStatsId> for Vec<String> {
    fn from(id: ReplicaStatsId) -> Self {
        vec!["table_server".to_string(), id.table, id.server]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_each_kind() {
        let _: ClusterStatsId = serde_json::from_value(json!(["cluster"])).unwrap();

        let s: ServerStatsId = serde_json::from_value(json!(["server", "s-1"])).unwrap();
        assert_eq!(s.server, "s-1");

        let t: TableStatsId = serde_json::from_value(json!(["table", "t-1"])).unwrap();
        assert_eq!(t.table, "t-1");

        let r: ReplicaStatsId = serde_json::from_value(json!(["table_server", "t-1", "s-1"])).unwrap();
        assert_eq!(r.table, "t-1");
        assert_eq!(r.server, "s-1");
    }

    #[test]
    fn rejects_wrong_literal() {
        assert!(serde_json::from_value::<ServerStatsId>(json!(["table", "t-1"])).is_err());
        assert!(serde_json::from_value::<ClusterStatsId>(json!(["server"])).is_err());
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(serde_json::from_value::<ReplicaStatsId>(json!(["table_server", "t-1"])).is_err());
        assert!(serde_json::from_value::<ClusterStatsId>(json!(["cluster", "x"])).is_err());
    }

    #[test]
    fn encodes_back_to_array() {
        let id = ReplicaStatsId {
            table: "t".into(),
            server: "s".into(),
        };
        assert_eq!(serde_json::to_value(id).unwrap(), json!(["table_server", "t", "s"]));
        assert_eq!(serde_json::to_value(ClusterStatsId).unwrap(), json!(["cluster"]));
    }
}
