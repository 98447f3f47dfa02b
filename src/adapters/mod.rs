/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports.
pub mod outbound;
