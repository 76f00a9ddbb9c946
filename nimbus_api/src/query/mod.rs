mod common;
mod image;

pub use self::common::{Query, QueryCommon};
pub use self::image::ImageQuery;
