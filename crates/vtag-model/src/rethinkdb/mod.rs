//! Documents returned by RethinkDB system tables and ReQL commands.
//!
//! Field names mirror the server's JSON output exactly.
//! See <https://rethinkdb.com/docs/system-tables/> and <https://rethinkdb.com/docs/system-stats/>.

mod config;
pub use config::{ConnectionServer, Instance, Server, Table};

mod id;
pub use id::{ClusterStatsId, ReplicaStatsId, ServerStatsId, TableStatsId};

mod metric;
pub use metric::{Metric, MetricType};

mod reql;
pub use reql::JoinRow;

mod stats;
pub use stats::{
    ClusterQueryEngine, ClusterStats, ReplicaCache, ReplicaDisk, ReplicaDiskSpaceUsage,
    ReplicaQueryEngine, ReplicaStats, ReplicaStorageEngine, ServerQueryEngine, ServerStats,
    TableQueryEngine, TableStats,
};
