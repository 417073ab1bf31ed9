//! Pure read projections of store state for the terminal.
//!
//! Rendering never mutates the store; it only formats what it is given.

use shared::idea::Idea;
use store::Stats;

/// Full card for one idea.
pub fn idea_card(idea: &Idea) -> String {
    let star = if idea.is_favorite { "⭐" } else { "☆" };
    let names = idea
        .names
        .iter()
        .map(|n| format!("  • {n}"))
        .collect::<Vec<_>>()
        .join("\n");
    let captions = idea
        .captions
        .iter()
        .map(|c| format!("  • \"{c}\""))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "{star} [{id}] {industry} (${budget}, {tone}) - {created}\n\
         {narrative}\n\
         Tags: {tags}\n\
         Brand names:\n{names}\n\
         Captions:\n{captions}",
        star = star,
        id = idea.id,
        industry = idea.industry,
        budget = idea.budget,
        tone = idea.tone,
        created = idea.created_at,
        narrative = idea.narrative,
        tags = idea.tags.join(", "),
        names = names,
        captions = captions,
    )
}

/// One-line summary for list views.
pub fn idea_line(idea: &Idea) -> String {
    let star = if idea.is_favorite { "⭐" } else { " " };
    let mut narrative: String = idea.narrative.chars().take(60).collect();
    if idea.narrative.chars().count() > 60 {
        narrative.push_str("...");
    }
    format!(
        "{star} [{}] {} (${}) - {}",
        idea.id, idea.industry, idea.budget, narrative
    )
}

pub fn idea_list(ideas: &[&Idea]) -> String {
    if ideas.is_empty() {
        return "No ideas here yet.".to_string();
    }
    ideas
        .iter()
        .map(|i| idea_line(i))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn stats_line(stats: Stats) -> String {
    format!(
        "{} generated, {} favorited",
        stats.generated, stats.favorited
    )
}
