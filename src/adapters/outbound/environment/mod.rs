/// Environment adapters for reading override variables
mod map_environment;
mod process_environment;

pub use map_environment::MapEnvironment;
pub use process_environment::ProcessEnvironment;
