//! Rows of `rethinkdb.stats`.
//!
//! Rates (`*_per_sec`) are decoded as `f64` since the server reports them as fractional
//! values; totals, counts and byte sizes are `u64`.

use serde::{Deserialize, Serialize};

use super::id::{ClusterStatsId, ReplicaStatsId, ServerStatsId, TableStatsId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterQueryEngine {
    pub queries_per_sec: f64,
    pub read_docs_per_sec: f64,
    pub written_docs_per_sec: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterStats {
    pub id: ClusterStatsId,
    pub query_engine: ClusterQueryEngine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerQueryEngine {
    pub client_connections: u64,
    pub clients_active: u64,
    pub queries_per_sec: f64,
    pub queries_total: u64,
    pub read_docs_per_sec: f64,
    pub read_docs_total: u64,
    pub written_docs_per_sec: f64,
    pub written_docs_total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerStats {
    pub id: ServerStatsId,
    pub server: String,
    pub query_engine: ServerQueryEngine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableQueryEngine {
    pub read_docs_per_sec: f64,
    pub written_docs_per_sec: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableStats {
    pub id: TableStatsId,
    pub table: String,
    pub db: String,
    pub query_engine: TableQueryEngine,
}

/// Per-replica query counters.
///
/// The server spells the write rate `writen_docs_per_sec` (single `t`), unlike every
/// other query engine block. The field keeps that name so documents decode as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicaQueryEngine {
    pub read_docs_per_sec: f64,
    pub read_docs_total: u64,
    pub writen_docs_per_sec: f64,
    pub written_docs_total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicaCache {
    pub in_use_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicaDiskSpaceUsage {
    pub metadata_bytes: u64,
    pub data_bytes: u64,
    pub garbage_bytes: u64,
    pub preallocated_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicaDisk {
    pub read_bytes_per_sec: f64,
    pub read_bytes_total: u64,
    pub written_bytes_per_sec: f64,
    pub written_bytes_total: u64,
    pub space_usage: ReplicaDiskSpaceUsage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicaStorageEngine {
    pub cache: ReplicaCache,
    pub disk: ReplicaDisk,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicaStats {
    pub id: ReplicaStatsId,
    pub server: String,
    pub table: String,
    pub db: String,
    pub query_engine: ReplicaQueryEngine,
    pub storage_engine: ReplicaStorageEngine,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn replica_doc() -> serde_json::Value {
        json!({
            "id": ["table_server", "t-1", "s-1"],
            "server": "server0",
            "table": "heroes",
            "db": "marvel",
            "query_engine": {
                "read_docs_per_sec": 1.5,
                "read_docs_total": 120,
                "writen_docs_per_sec": 0,
                "written_docs_total": 40
            },
            "storage_engine": {
                "cache": {"in_use_bytes": 4096},
                "disk": {
                    "read_bytes_per_sec": 0,
                    "read_bytes_total": 2048,
                    "written_bytes_per_sec": 12.25,
                    "written_bytes_total": 8192,
                    "space_usage": {
                        "metadata_bytes": 1,
                        "data_bytes": 2,
                        "garbage_bytes": 3,
                        "preallocated_bytes": 4
                    }
                }
            }
        })
    }

    #[test]
    fn replica_keeps_upstream_field_spelling() {
        let stats: ReplicaStats = serde_json::from_value(replica_doc()).unwrap();
        assert_eq!(stats.id.server, "s-1");
        assert_eq!(stats.query_engine.written_docs_total, 40);
        assert_eq!(stats.storage_engine.disk.space_usage.preallocated_bytes, 4);

        let back = serde_json::to_value(&stats).unwrap();
        assert!(back["query_engine"].get("writen_docs_per_sec").is_some());
        assert!(back["query_engine"].get("written_docs_per_sec").is_none());
    }

    #[test]
    fn replica_with_corrected_spelling_is_rejected() {
        let mut doc = replica_doc();
        let qe = doc["query_engine"].as_object_mut().unwrap();
        let rate = qe.remove("writen_docs_per_sec").unwrap();
        qe.insert("written_docs_per_sec".into(), rate);

        assert!(serde_json::from_value::<ReplicaStats>(doc).is_err());
    }

    #[test]
    fn cluster_and_server_rows_decode() {
        let cluster: ClusterStats = serde_json::from_value(json!({
            "id": ["cluster"],
            "query_engine": {"queries_per_sec": 3, "read_docs_per_sec": 2.5, "written_docs_per_sec": 0}
        }))
        .unwrap();
        assert_eq!(cluster.query_engine.read_docs_per_sec, 2.5);

        let server: ServerStats = serde_json::from_value(json!({
            "id": ["server", "s-1"],
            "server": "server0",
            "query_engine": {
                "client_connections": 2,
                "clients_active": 1,
                "queries_per_sec": 0,
                "queries_total": 10,
                "read_docs_per_sec": 0,
                "read_docs_total": 5,
                "written_docs_per_sec": 0,
                "written_docs_total": 7
            }
        }))
        .unwrap();
        assert_eq!(server.id.server, "s-1");
        assert_eq!(server.query_engine.written_docs_total, 7);
    }

    #[test]
    fn table_row_rejects_foreign_id() {
        let raw = json!({
            "id": ["server", "s-1"],
            "table": "heroes",
            "db": "marvel",
            "query_engine": {"read_docs_per_sec": 0, "written_docs_per_sec": 0}
        });
        assert!(serde_json::from_value::<TableStats>(raw).is_err());
    }
}
