use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::{ModelError, ModelResult};

/// Managed-object types whose tags are kept.
///
/// Association entries pointing at any other type (folders, resource pools, ...) are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    HostSystem,
    VirtualMachine,
    Datacenter,
    Datastore,
    ClusterComputeResource,
}

impl ResourceType {
    /// Every recognized type, in declaration order.
    pub const ALL: [ResourceType; 5] = [
        ResourceType::HostSystem,
        ResourceType::VirtualMachine,
        ResourceType::Datacenter,
        ResourceType::Datastore,
        ResourceType::ClusterComputeResource,
    ];

    /// Managed-object type name as sent by the tagging API.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ResourceType::HostSystem => "HostSystem",
            ResourceType::VirtualMachine => "VirtualMachine",
            ResourceType::Datacenter => "Datacenter",
            ResourceType::Datastore => "Datastore",
            ResourceType::ClusterComputeResource => "ClusterComputeResource",
        }
    }

    /// Exact, case-sensitive lookup of a wire type name.
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl FromStr for ResourceType {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        Self::from_wire(s).ok_or_else(|| ModelError::UnknownResourceType(s.to_string()))
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
