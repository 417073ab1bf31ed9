//! Chat context and transcript.
//!
//! The context is a three-state machine: no context, the current idea,
//! or a specific history idea. Selection always copies a snapshot of the
//! idea's fields; later edits to the idea never reach the context.

use shared::chat_api::{ChatMessage, ContextSnapshot};
use shared::idea::Idea;

/// How many transcript entries go into a follow-up prompt
/// (three user/assistant pairs).
pub const PROMPT_WINDOW: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub enum ChatContext {
    NoContext,
    CurrentIdea(ContextSnapshot),
    HistoryItem { id: u64, snapshot: ContextSnapshot },
}

pub struct ChatContextManager {
    context: ChatContext,
    transcript: Vec<ChatMessage>,
}

impl ChatContextManager {
    pub fn new() -> Self {
        Self {
            context: ChatContext::NoContext,
            transcript: Vec::new(),
        }
    }

    pub fn context(&self) -> &ChatContext {
        &self.context
    }

    pub fn snapshot(&self) -> Option<&ContextSnapshot> {
        match &self.context {
            ChatContext::NoContext => None,
            ChatContext::CurrentIdea(s) => Some(s),
            ChatContext::HistoryItem { snapshot, .. } => Some(snapshot),
        }
    }

    /// Scope follow-up questions to the not-yet-historical current idea.
    pub fn select_current(&mut self, idea: &Idea) {
        self.context = ChatContext::CurrentIdea(snapshot_of(idea));
    }

    /// Scope follow-up questions to a specific history idea.
    pub fn select_history(&mut self, idea: &Idea) {
        self.context = ChatContext::HistoryItem {
            id: idea.id,
            snapshot: snapshot_of(idea),
        };
    }

    /// Explicit deselection; also forced by a clear-all.
    pub fn deselect(&mut self) {
        self.context = ChatContext::NoContext;
    }

    /// One-line summary of the active context for display.
    pub fn describe(&self) -> String {
        match self.snapshot() {
            Some(s) => format!("Discussing: {} (${})", s.industry, s.budget),
            None => "Business Idea Assistant - select an idea to discuss".to_string(),
        }
    }

    /// Append-only transcript. Storage is unbounded; only the prompt
    /// window is bounded.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.transcript.push(ChatMessage::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.transcript.push(ChatMessage::assistant(content));
    }

    /// Record a user message and hand back the inputs for building the
    /// reply prompt. The tail is taken before the message is appended,
    /// so the new question never appears in the conversation context as
    /// well as in the question slot.
    pub fn begin_user_turn(
        &mut self,
        content: impl Into<String>,
    ) -> (Option<ContextSnapshot>, Vec<ChatMessage>) {
        let snapshot = self.snapshot().cloned();
        let tail = self.prompt_tail().to_vec();
        self.push_user(content);
        (snapshot, tail)
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// The last [`PROMPT_WINDOW`] entries, used to build follow-up prompts.
    pub fn prompt_tail(&self) -> &[ChatMessage] {
        let start = self.transcript.len().saturating_sub(PROMPT_WINDOW);
        &self.transcript[start..]
    }
}

impl Default for ChatContextManager {
    fn default() -> Self {
        Self::new()
    }
}

fn snapshot_of(idea: &Idea) -> ContextSnapshot {
    ContextSnapshot {
        industry: idea.industry.clone(),
        budget: idea.budget.clone(),
        narrative: idea.narrative.clone(),
    }
}
