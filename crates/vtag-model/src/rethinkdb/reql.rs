use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Row produced by `eq_join` / `inner_join`; both sides default to raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinRow<L = Value, R = Value> {
    pub left: L,
    pub right: R,
}
