//! Capability traits shared by compute resources.

use serde::{Deserialize, Serialize};

use super::image::{ImageKind, OperatingSystem, ResourceState};

/// A lightweight `{id, name}` handle to a resource, used wherever one
/// resource refers to another.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EntityReference {
    pub id: String,
    pub name: String,
}

/// A resource with a server-assigned identity.
pub trait Identifiable {
    fn id(&self) -> &str;
    fn name(&self) -> &str;

    /// Builds an [`EntityReference`] pointing at this resource.
    fn entity_reference(&self) -> EntityReference;
}

/// A resource with a lifecycle state.
pub trait Stateful {
    fn state(&self) -> ResourceState;
}

/// A resource carrying free-form descriptive text.
pub trait Describable {
    fn description(&self) -> &str;
}

/// A deployable machine image, regardless of which catalog it comes from.
pub trait Image: Identifiable + Stateful {
    fn kind(&self) -> ImageKind;
    fn datacenter_id(&self) -> &str;
    fn os(&self) -> &OperatingSystem;
}
