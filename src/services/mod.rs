// Service exports
pub mod openai;
pub mod seed;
pub mod store;

pub use openai::OpenAiBackend;
pub use seed::seed_candidates;
pub use store::{InMemoryStore, ProfileStore, StoreError};
