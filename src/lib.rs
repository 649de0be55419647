// Domain layer (business logic)
pub mod params;
pub mod template;

// Management API layer
pub mod ocm;

// Application layer
pub mod cli;

// Supporting modules
pub mod config;
pub mod error;
pub mod source;
