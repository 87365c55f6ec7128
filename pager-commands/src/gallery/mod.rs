pub mod embeds;
pub mod pagination;
pub mod stories;
pub mod stories_list;
