mod component;
mod defaults;
mod resolved_image;

pub use component::Component;
pub use defaults::{ComponentDefault, DefaultsTable, DEFAULT_REGISTRY};
pub use resolved_image::{ImageSource, ResolvedImage};
