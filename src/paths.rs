//! Resource base paths
//!
//! Each API resource lives under a fixed base path. Services build their
//! request paths from this table instead of hard-coding strings.

/// API resources with a base path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Batches,
    Devices,
    Projects,
}

impl Resource {
    /// Base path of the resource collection
    pub const fn base_path(self) -> &'static str {
        match self {
            Self::Batches => "/batches",
            Self::Devices => "/devices",
            Self::Projects => "/projects",
        }
    }
}

/// Path of a single resource: `/{resource}/{id}`
pub fn path_for(resource: Resource, id: &str) -> String {
    format!("{}/{}", resource.base_path(), id)
}

/// Path of a child collection: `/{parent}/{parent_id}/{child}`
pub fn nested_path(parent: Resource, parent_id: &str, child: Resource) -> String {
    format!("{}{}", path_for(parent, parent_id), child.base_path())
}
