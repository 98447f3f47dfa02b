//! Component images: the component model and the resolver.
pub mod domain;
pub mod services;

pub use services::component_image;
