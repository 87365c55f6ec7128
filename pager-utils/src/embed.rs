use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFooterBuilder};

/// Default embed color used across the gallery UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x44_d6_2c;

/// Footer text for a paginated embed.
///
/// Single-page views only show the note, if any.
pub fn paginated_footer_text(page: usize, total_pages: usize, footer_note: Option<&str>) -> String {
    let note = footer_note.filter(|note| !note.is_empty());

    match (total_pages > 1, note) {
        (true, Some(note)) => format!("Page {}/{} • {}", page.max(1), total_pages, note),
        (true, None) => format!("Page {}/{}", page.max(1), total_pages),
        (false, Some(note)) => note.to_owned(),
        (false, None) => String::new(),
    }
}

/// Build a standard paginated embed with an optional footer suffix.
pub fn build_paginated_embed_with_footer_note(
    title: &str,
    description: impl Into<String>,
    page: usize,
    total_pages: usize,
    footer_note: Option<&str>,
) -> anyhow::Result<Embed> {
    let footer_text = paginated_footer_text(page, total_pages, footer_note);

    let builder = EmbedBuilder::new()
        .title(title)
        .color(DEFAULT_EMBED_COLOR)
        .description(description);

    let embed = if footer_text.is_empty() {
        builder.validate()?.build()
    } else {
        let footer = EmbedFooterBuilder::new(footer_text).build();
        builder.footer(footer).validate()?.build()
    };

    Ok(embed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_shows_position_for_multi_page_views() {
        assert_eq!(paginated_footer_text(3, 10, None), "Page 3/10");
        assert_eq!(
            paginated_footer_text(3, 10, Some("capped")),
            "Page 3/10 • capped"
        );
    }

    #[test]
    fn footer_hides_position_for_single_page_views() {
        assert_eq!(paginated_footer_text(1, 1, None), "");
        assert_eq!(paginated_footer_text(1, 0, Some("")), "");
        assert_eq!(paginated_footer_text(1, 1, Some("note")), "note");
    }
}
