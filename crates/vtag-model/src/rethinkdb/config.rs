use serde::{Deserialize, Serialize};

/// Check instance settings; every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Instance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// Row of `rethinkdb.server_config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub id: String,
    pub name: String,
    pub cache_size_mb: String,
    pub tags: Vec<String>,
}

/// Row of `rethinkdb.table_config`.
// TODO: add shards, primary_key and write_acks once a collector needs them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    pub name: String,
    pub db: String,
}

/// Result of `conn.server()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionServer {
    pub id: String,
    pub name: String,
    pub proxy: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn instance_accepts_partial_documents() {
        let inst: Instance = serde_json::from_value(json!({"host": "localhost"})).unwrap();
        assert_eq!(inst.host.as_deref(), Some("localhost"));
        assert!(inst.port.is_none());

        let empty: Instance = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty, Instance::default());
    }

    #[test]
    fn server_config_row_decodes() {
        let raw = json!({
            "id": "de8b75d1-3184-48f0-b1ef-99a9c04e2be5",
            "name": "server0",
            "cache_size_mb": "auto",
            "tags": ["default", "us"]
        });
        let s: Server = serde_json::from_value(raw).unwrap();
        assert_eq!(s.name, "server0");
        assert_eq!(s.tags, ["default", "us"]);
    }

    #[test]
    fn connection_server_decodes() {
        let raw = json!({"id": "abc", "name": "server0", "proxy": false});
        let s: ConnectionServer = serde_json::from_value(raw).unwrap();
        assert!(!s.proxy);
    }
}
