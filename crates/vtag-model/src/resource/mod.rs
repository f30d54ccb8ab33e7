mod kind;
pub use kind::ResourceType;

mod tags;
pub use tags::ResourceTagMap;
