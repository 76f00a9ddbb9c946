//! Virtual machine image types: customer-built images and provider OS images.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::resource::{Describable, EntityReference, Identifiable, Image, Stateful};

/// A customer virtual machine image, captured from an existing server and
/// owned by the organization.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerImage {
    /// Unique image identifier.
    pub id: String,

    /// Image name. Unique only by convention; the API filters by name but
    /// does not key on it.
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// ID of the datacenter the image is stored in.
    pub datacenter_id: String,

    pub operating_system: OperatingSystem,

    pub cpu: VirtualMachineCpu,

    pub memory_gb: i64,

    /// Image disks, in SCSI unit order.
    #[serde(rename = "disk", default)]
    pub disks: Vec<VirtualMachineDisk>,

    pub create_time: DateTime<Utc>,

    /// Current lifecycle state. `PendingChange` while an export is running.
    pub state: ResourceState,
}

/// A page of customer image results.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerImagePage {
    /// The images in this page.
    #[serde(rename = "customerImage", default)]
    pub images: Vec<CustomerImage>,

    /// The current page number.
    pub page_number: i64,

    /// The number of images in this page, not the number of pages.
    pub page_count: i64,

    /// The total number of images matching the filter criteria.
    pub total_count: i64,

    /// The maximum number of images per page.
    pub page_size: i64,
}

/// A provider-supplied base operating system image.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OsImage {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    pub datacenter_id: String,

    /// Provider catalog key for the image (e.g. `UBUNTU2404/64`).
    pub os_image_key: String,

    pub operating_system: OperatingSystem,

    pub cpu: VirtualMachineCpu,

    pub memory_gb: i64,

    #[serde(rename = "disk", default)]
    pub disks: Vec<VirtualMachineDisk>,

    pub create_time: DateTime<Utc>,

    pub state: ResourceState,
}

/// A page of OS image results.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OsImagePage {
    #[serde(rename = "osImage", default)]
    pub images: Vec<OsImage>,

    pub page_number: i64,

    /// The number of images in this page, not the number of pages.
    pub page_count: i64,

    pub total_count: i64,

    pub page_size: i64,
}

/// Operating system installed on an image.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperatingSystem {
    /// Provider OS identifier (e.g. `UBUNTU2404/64`).
    pub id: String,

    pub display_name: String,

    /// OS family (e.g. `UNIX`, `WINDOWS`).
    pub family: String,
}

/// Virtual CPU allocation for an image.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineCpu {
    pub count: i64,

    /// CPU speed class (e.g. `STANDARD`, `HIGHPERFORMANCE`).
    pub speed: String,

    pub cores_per_socket: i64,
}

/// A virtual disk attached to an image.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineDisk {
    pub id: String,

    pub scsi_unit_id: i64,

    pub size_gb: i64,

    /// Disk speed class (e.g. `STANDARD`, `ECONOMY`, `HIGHPERFORMANCE`).
    pub speed: String,
}

/// Lifecycle state of a compute resource.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceState {
    /// The resource is ready for use.
    Normal,
    /// The resource is being created.
    PendingAdd,
    /// A change (e.g. an export) is in progress.
    PendingChange,
    /// The resource is being deleted.
    PendingDelete,
    /// Creation failed.
    FailedAdd,
    /// A change failed.
    FailedChange,
    /// Deletion failed.
    FailedDelete,
    /// A state this client does not know about.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ResourceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ResourceState::Normal => "NORMAL",
                ResourceState::PendingAdd => "PENDING_ADD",
                ResourceState::PendingChange => "PENDING_CHANGE",
                ResourceState::PendingDelete => "PENDING_DELETE",
                ResourceState::FailedAdd => "FAILED_ADD",
                ResourceState::FailedChange => "FAILED_CHANGE",
                ResourceState::FailedDelete => "FAILED_DELETE",
                ResourceState::Unknown => "UNKNOWN",
            }
        )
    }
}

/// Which catalog an image belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageKind {
    /// Provider-supplied base OS image.
    Os,
    /// Customer-built image.
    Customer,
}

impl std::fmt::Display for ImageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ImageKind::Os => "OS",
                ImageKind::Customer => "CUSTOMER",
            }
        )
    }
}

impl Identifiable for CustomerImage {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn entity_reference(&self) -> EntityReference {
        EntityReference {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

impl Stateful for CustomerImage {
    fn state(&self) -> ResourceState {
        self.state
    }
}

impl Describable for CustomerImage {
    fn description(&self) -> &str {
        &self.description
    }
}

impl Image for CustomerImage {
    fn kind(&self) -> ImageKind {
        ImageKind::Customer
    }
    fn datacenter_id(&self) -> &str {
        &self.datacenter_id
    }
    fn os(&self) -> &OperatingSystem {
        &self.operating_system
    }
}

impl Identifiable for OsImage {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn entity_reference(&self) -> EntityReference {
        EntityReference {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

impl Stateful for OsImage {
    fn state(&self) -> ResourceState {
        self.state
    }
}

impl Describable for OsImage {
    fn description(&self) -> &str {
        &self.description
    }
}

impl Image for OsImage {
    fn kind(&self) -> ImageKind {
        ImageKind::Os
    }
    fn datacenter_id(&self) -> &str {
        &self.datacenter_id
    }
    fn os(&self) -> &OperatingSystem {
        &self.operating_system
    }
}
