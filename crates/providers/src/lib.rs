//! Remote generation client: prompt templates, Gemini transport (via the
//! relay or direct), and strict parsing of model output.

pub mod client;
pub mod parse;
pub mod prompt;

pub use client::GenerationClient;
