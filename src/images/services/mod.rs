mod image_resolver;

pub use image_resolver::{component_image, ImageResolver};
