//! Idea storage: the repository, its on-disk snapshots, the chat
//! context, and read-only export projections.

pub mod chat;
pub mod export;
pub mod persist;
pub mod repository;

pub use chat::{ChatContext, ChatContextManager, PROMPT_WINDOW};
pub use persist::Persistence;
pub use repository::{Collection, IdeaStore, Stats};
