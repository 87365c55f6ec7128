/// Embed builders shared by paginated views.
pub mod embed;
/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';
/// Page range computation, pagination controls and their Discord rendering.
pub mod pagination;
