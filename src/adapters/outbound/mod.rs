/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod environment;
pub mod formatters;
