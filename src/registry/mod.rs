// ABOUTME: Registry module holding tokenized queries for the process lifetime
// ABOUTME: Exports the immutable query registry

pub mod store;

pub use store::QueryRegistry;
