//! Fixed prompt templates for idea generation and follow-up chat.

use shared::chat_api::{ChatMessage, ContextSnapshot};
use shared::idea::IdeaRequest;

/// Instructs the model to return exactly the four-field JSON object the
/// parser expects. The upstream generator is not contractually bound to
/// this shape; the parser validates it.
pub fn idea_prompt(request: &IdeaRequest) -> String {
    format!(
        r#"You are a creative business consultant. Generate a comprehensive business idea with the following details:
1. A detailed business idea paragraph for a {industry} business with a budget of ${budget}.
   Tone: {tone}.
   Include potential target market, unique selling points, and revenue streams.
2. Suggest 5 creative brand names that are memorable and relevant.
3. Create 3 engaging social media captions for promotion.
4. Identify 3-5 key tags that categorize this business (e.g., "eco-friendly", "tech", "subscription").
Return output in this JSON format:
{{
  "idea": "...",
  "names": ["...", "...", "...", "...", "..."],
  "captions": ["...", "...", "..."],
  "tags": ["...", "...", "..."]
}}
"#,
        industry = request.industry,
        budget = request.budget,
        tone = request.tone,
    )
}

/// Follow-up prompt embedding the optional context summary and the
/// bounded transcript tail. The caller passes at most the last six
/// entries (three exchanges).
pub fn chat_prompt(
    message: &str,
    context: Option<&ContextSnapshot>,
    transcript_tail: &[ChatMessage],
) -> String {
    let context_line = match context {
        Some(s) => format!(
            "Current business context: {}. Industry: {}. Budget: ${}.",
            s.narrative, s.industry, s.budget
        ),
        None => String::new(),
    };

    let history = transcript_tail
        .iter()
        .map(|m| {
            let speaker = if m.role == "user" { "User" } else { "Assistant" };
            format!("{}: {}", speaker, m.content)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are a business consultant assistant. The user is discussing a business idea.

{context_line}

Previous conversation context:
{history}

User's new question: {message}

Provide a helpful, concise response with practical advice. If the question relates to the business idea context, focus your answer specifically on that idea."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idea_prompt_carries_all_inputs() {
        let req = IdeaRequest::new("bakery", "5000", Some("playful")).unwrap();
        let p = idea_prompt(&req);
        assert!(p.contains("a bakery business"));
        assert!(p.contains("budget of $5000"));
        assert!(p.contains("Tone: playful."));
        assert!(p.contains(r#""idea""#));
        assert!(p.contains(r#""tags""#));
    }

    #[test]
    fn chat_prompt_embeds_context_and_tail() {
        let snapshot = ContextSnapshot {
            industry: "bakery".into(),
            budget: "5000".into(),
            narrative: "Sourdough club.".into(),
        };
        let tail = vec![
            ChatMessage::user("How do I price it?"),
            ChatMessage::assistant("Start with cost-plus."),
        ];
        let p = chat_prompt("What about marketing?", Some(&snapshot), &tail);
        assert!(p.contains("Current business context: Sourdough club."));
        assert!(p.contains("User: How do I price it?"));
        assert!(p.contains("Assistant: Start with cost-plus."));
        assert!(p.contains("User's new question: What about marketing?"));
    }

    #[test]
    fn chat_prompt_without_context_omits_the_summary() {
        let p = chat_prompt("Hello", None, &[]);
        assert!(!p.contains("Current business context"));
        assert!(p.contains("User's new question: Hello"));
    }
}
