/// Mock implementations for testing
mod mock_environment;

pub use mock_environment::MockEnvironment;
