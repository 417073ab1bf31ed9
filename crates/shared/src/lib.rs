pub mod error;
pub mod idea;

pub mod settings {
    use serde::{Deserialize, Serialize};

    /// How the generation client reaches the upstream model.
    ///
    /// The relay variant posts `{prompt}` to our forwarding server; the
    /// direct variant talks to the Gemini API itself (single-page-only
    /// deployments without a relay).
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct BackendSettings {
        /// Relay endpoint, e.g. `http://127.0.0.1:5000/api/gemini`.
        /// When `None`, the client goes directly upstream.
        pub relay_url: Option<String>,
        pub gemini_model: String, // e.g. "gemini-1.5-flash"
        /// API key for the direct variant. The relay holds its own key.
        pub api_key: Option<String>,
    }

    impl Default for BackendSettings {
        fn default() -> Self {
            Self {
                relay_url: Some("http://127.0.0.1:5000/api/gemini".into()),
                gemini_model: "gemini-1.5-flash".into(),
                api_key: None,
            }
        }
    }
}

pub mod chat_api {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct ChatMessage {
        pub role: String, // "user" | "assistant"
        pub content: String,
    }

    impl ChatMessage {
        pub fn user(content: impl Into<String>) -> Self {
            Self {
                role: "user".to_string(),
                content: content.into(),
            }
        }

        pub fn assistant(content: impl Into<String>) -> Self {
            Self {
                role: "assistant".to_string(),
                content: content.into(),
            }
        }
    }

    /// Snapshot of an idea taken when it is selected as chat context.
    /// Deliberately not live-linked to the history entry.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ContextSnapshot {
        pub industry: String,
        pub budget: String,
        pub narrative: String,
    }
}
