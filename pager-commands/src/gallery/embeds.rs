use super::stories::{STORIES, Story};
use crate::COMMANDS;

/// Bullet list of every story key with its title.
pub fn stories_overview() -> String {
    STORIES
        .iter()
        .map(|story| format!("- `{}` {}", story.key, story.title))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per gallery command: name, usage and description.
pub fn commands_overview() -> String {
    COMMANDS
        .iter()
        .map(|command| format!("**{}** `{}` {}", command.name, command.usage, command.desc))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn unknown_story_message(raw: &str) -> String {
    let keys: Vec<&str> = STORIES.iter().map(|story| story.key).collect();
    format!("Unknown story `{raw}`. Available: {}", keys.join(", "))
}

/// Follow-up sent after a view was rendered on a different page than asked for.
pub fn page_corrected_message(story: &Story, requested: i64, shown: usize) -> String {
    format!(
        "Page {requested} is not available in `{}`; showing page {shown} instead.",
        story.key
    )
}
