/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports describe what the resolver needs from the outside world
/// (environment access, output rendering).
pub mod outbound;
