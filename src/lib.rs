pub mod cli;
pub mod domain;
pub mod repository;
pub mod services;

// Make test_helpers available for integration tests
pub mod test_helpers;
