mod envelope;
pub use self::envelope::{
    ApiResponse, FieldMessage, RESPONSE_CODE_IN_PROGRESS, RESPONSE_CODE_RESOURCE_NOT_FOUND,
};

mod image;
pub use self::image::{
    CustomerImage, CustomerImagePage, ImageKind, OperatingSystem, OsImage, OsImagePage,
    ResourceState, VirtualMachineCpu, VirtualMachineDisk,
};

mod resource;
pub use self::resource::{Describable, EntityReference, Identifiable, Image, Stateful};
