//! Pagination stories shown by the gallery.

use pager_utils::pagination::{PageButtonSize, PaginationOptions, page_window};

/// Command family carried in every gallery button ID.
pub const COMMAND_FAMILY: &str = "pagination";

/// Rows listed per story page.
pub const ENTRIES_PER_PAGE: usize = 5;

/// One configuration of the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story {
    pub key: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub total_pages: i64,
    /// Page shown when the story is opened without an explicit page.
    pub initial_page: i64,
    /// `None` falls back to the configured default.
    pub sibling_count: Option<i64>,
    pub max_pages: Option<i64>,
    pub show_controls: bool,
    pub disable_controls: bool,
    pub page_button_size: PageButtonSize,
}

const BASE: Story = Story {
    key: "default",
    title: "Default",
    blurb: "Ten pages with previous and next controls.",
    total_pages: 10,
    initial_page: 1,
    sibling_count: None,
    max_pages: None,
    show_controls: true,
    disable_controls: false,
    page_button_size: PageButtonSize::Medium,
};

pub const STORIES: &[Story] = &[
    BASE,
    Story {
        key: "no-controls",
        title: "Without Controls",
        blurb: "Page buttons only, no previous or next.",
        show_controls: false,
        ..BASE
    },
    Story {
        key: "disabled-controls",
        title: "Disabled Controls",
        blurb: "Previous and next are rendered but never pressable.",
        initial_page: 5,
        disable_controls: true,
        ..BASE
    },
    Story {
        key: "large",
        title: "Large Page Count",
        blurb: "A hundred pages collapsed around the current one.",
        total_pages: 100,
        ..BASE
    },
    Story {
        key: "small-buttons",
        title: "Small Buttons",
        blurb: "Compact page buttons.",
        initial_page: 5,
        page_button_size: PageButtonSize::Small,
        ..BASE
    },
    Story {
        key: "large-buttons",
        title: "Large Buttons",
        blurb: "Wide page buttons.",
        initial_page: 5,
        page_button_size: PageButtonSize::Large,
        ..BASE
    },
    Story {
        key: "siblings-0",
        title: "No Siblings",
        blurb: "Only the current page between the ellipses.",
        total_pages: 20,
        initial_page: 10,
        sibling_count: Some(0),
        ..BASE
    },
    Story {
        key: "siblings-2",
        title: "Two Siblings",
        blurb: "Two neighbours on each side of the current page.",
        total_pages: 20,
        initial_page: 10,
        sibling_count: Some(2),
        ..BASE
    },
    Story {
        key: "max-pages",
        title: "Max Pages Limit",
        blurb: "Twenty pages of data, only the first ten reachable.",
        total_pages: 20,
        max_pages: Some(10),
        ..BASE
    },
    Story {
        key: "max-pages-short",
        title: "Max Pages Above Total",
        blurb: "A cap of ten on five pages changes nothing.",
        total_pages: 5,
        max_pages: Some(10),
        ..BASE
    },
];

impl Story {
    /// Look a story up by key, case-insensitively.
    pub fn find(key: &str) -> Option<&'static Story> {
        let key = key.trim().to_ascii_lowercase();
        STORIES.iter().find(|story| story.key == key)
    }

    /// Look a story up from a button command key such as `pagination|large`.
    pub fn from_command(command: &str) -> Option<&'static Story> {
        let key = command
            .strip_prefix(COMMAND_FAMILY)?
            .strip_prefix('|')?;
        Self::find(key)
    }

    pub fn command(&self) -> String {
        format!("{COMMAND_FAMILY}|{}", self.key)
    }

    pub fn options(&self, default_sibling_count: i64) -> PaginationOptions {
        PaginationOptions {
            sibling_count: self.sibling_count.unwrap_or(default_sibling_count),
            max_pages: self.max_pages,
            show_controls: self.show_controls,
            disable_controls: self.disable_controls,
            page_button_size: self.page_button_size,
        }
    }

    /// Embed description for one page of the story.
    pub fn description(&self, page: usize) -> String {
        let total_entries = usize::try_from(self.total_pages.max(0))
            .unwrap_or(0)
            .saturating_mul(ENTRIES_PER_PAGE);
        let (start, end) = page_window(total_entries, ENTRIES_PER_PAGE, page);

        let entries: Vec<String> = (start + 1..=end)
            .map(|index| format!("- Staking reward #{index}"))
            .collect();

        if entries.is_empty() {
            format!("{}\n\nNo entries.", self.blurb)
        } else {
            format!("{}\n\n{}", self.blurb, entries.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_keys_are_unique() {
        let mut keys: Vec<_> = STORIES.iter().map(|story| story.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), STORIES.len());
    }

    #[test]
    fn command_key_round_trips_to_story() {
        for story in STORIES {
            assert_eq!(Story::from_command(&story.command()), Some(story));
        }
        assert_eq!(Story::from_command("pagination"), None);
        assert_eq!(Story::from_command("pagination|nope"), None);
    }

    #[test]
    fn find_ignores_case() {
        assert_eq!(Story::find("LARGE").map(|story| story.key), Some("large"));
    }

    #[test]
    fn options_fall_back_to_default_siblings() {
        let default = Story::find("default").expect("story");
        assert_eq!(default.options(3).sibling_count, 3);

        let siblings = Story::find("siblings-0").expect("story");
        assert_eq!(siblings.options(3).sibling_count, 0);
    }

    #[test]
    fn description_lists_page_entries() {
        let story = Story::find("default").expect("story");
        let description = story.description(2);
        assert!(description.contains("Staking reward #6"));
        assert!(description.contains("Staking reward #10"));
        assert!(!description.contains("Staking reward #11"));
    }
}
