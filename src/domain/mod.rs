// Feasibility scoring domain
pub mod feasibility;

// Market snapshot domain
pub mod market;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
