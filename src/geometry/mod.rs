pub mod normalize;
pub mod orientation;
pub mod rect;
pub mod view_map;

pub use normalize::{from_canonical, to_canonical};
pub use orientation::ImageOrientation;
pub use rect::Rect;
pub use view_map::{project, unproject, FitMode, ImageDescriptor, ViewDescriptor, ViewRect};
