pub mod instance;

// Re-export main utilities
pub use instance::InstanceContainer;
