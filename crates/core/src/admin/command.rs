//! Command text parsing.
//!
//! Pure functions over the raw text of an incoming message. Nothing here
//! touches storage, so a malformed command can never mutate the allow-list.

use super::{ParseError, UserId};

/// The privileged commands that manage the admin allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminCommand {
    Add,
    Remove,
    List,
}

impl AdminCommand {
    pub const ALL: [AdminCommand; 3] = [Self::Add, Self::Remove, Self::List];

    /// Command name without the leading slash.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add_admin",
            Self::Remove => "rm_admin",
            Self::List => "list_admin",
        }
    }

    /// Reply sent when the command arguments cannot be parsed.
    pub fn usage(self) -> &'static str {
        match self {
            Self::Add => "Usage: /add_admin <user_id>",
            Self::Remove => "Usage: /rm_admin <user_id>",
            Self::List => "Usage: /list_admin",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.name() == name)
    }
}

impl std::fmt::Display for AdminCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", self.name())
    }
}

/// Extracts the command name from message text.
///
/// Returns `None` when the text does not start with a `/command` token.
/// A `@botname` mention suffix is dropped, so `/add_admin@my_bot 2`
/// yields `add_admin`.
pub fn command_name(text: &str) -> Option<&str> {
    let token = text.split_whitespace().next()?;
    let name = token.strip_prefix('/')?;
    let name = match name.split_once('@') {
        Some((name, _mention)) => name,
        None => name,
    };

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Parses `<command> <user_id>` into the single user id argument.
///
/// The text must contain exactly two whitespace-separated tokens and the
/// second one must be a 64-bit integer literal.
pub fn parse_user_id_argument(text: &str) -> Result<UserId, ParseError> {
    let parts: Vec<&str> = text.split_whitespace().collect();

    match parts.as_slice() {
        [_command, argument] => argument
            .parse::<UserId>()
            .map_err(|_| ParseError::InvalidUserId((*argument).to_string())),
        _ => Err(ParseError::ArgumentCount(parts.len().saturating_sub(1))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_name_strips_slash() {
        assert_eq!(command_name("/list_admin"), Some("list_admin"));
        assert_eq!(command_name("  /add_admin 5"), Some("add_admin"));
    }

    #[test]
    fn command_name_strips_bot_mention() {
        assert_eq!(command_name("/add_admin@my_bot 2"), Some("add_admin"));
    }

    #[test]
    fn command_name_rejects_plain_text() {
        assert_eq!(command_name("hello there"), None);
        assert_eq!(command_name(""), None);
        assert_eq!(command_name("/"), None);
        assert_eq!(command_name("/@my_bot"), None);
    }

    #[test]
    fn parses_single_integer_argument() {
        assert_eq!(parse_user_id_argument("/add_admin 2"), Ok(UserId::new(2)));
        assert_eq!(
            parse_user_id_argument("/rm_admin   -77 "),
            Ok(UserId::new(-77))
        );
    }

    #[test]
    fn rejects_missing_argument() {
        assert_eq!(
            parse_user_id_argument("/add_admin"),
            Err(ParseError::ArgumentCount(0))
        );
    }

    #[test]
    fn rejects_extra_arguments() {
        assert_eq!(
            parse_user_id_argument("/add_admin 2 3"),
            Err(ParseError::ArgumentCount(2))
        );
    }

    #[test]
    fn rejects_non_integer_argument() {
        assert_eq!(
            parse_user_id_argument("/add_admin bob"),
            Err(ParseError::InvalidUserId("bob".to_string()))
        );
        assert!(parse_user_id_argument("/add_admin 2.5").is_err());
    }

    #[test]
    fn empty_text_has_no_arguments() {
        assert_eq!(parse_user_id_argument(""), Err(ParseError::ArgumentCount(0)));
    }

    #[test]
    fn from_name_round_trips_every_command() {
        for cmd in AdminCommand::ALL {
            assert_eq!(AdminCommand::from_name(cmd.name()), Some(cmd));
        }
        assert_eq!(AdminCommand::from_name("start"), None);
    }

    #[test]
    fn usage_strings_match_commands() {
        assert_eq!(AdminCommand::Add.usage(), "Usage: /add_admin <user_id>");
        assert_eq!(AdminCommand::Remove.usage(), "Usage: /rm_admin <user_id>");
    }
}
