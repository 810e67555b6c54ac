// Composition root for the mock server.
//
// Responsibilities
// - Read config from environment.
// - Build the entity catalog and the in-memory repository.
// - Seed sample data before the listener binds.
// - Wire handlers into the axum router.

pub mod config;
pub mod http;
pub mod seed;
pub mod state;
