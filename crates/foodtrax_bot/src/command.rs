//! Chat command parsing.

use derive_more::Display;

/// Reply to anything the bot does not recognise.
pub const USAGE: &str = "FoodTrax commands:\n\
    help - show this message\n\
    all - list every truck being tracked\n\
    near - show how far each truck is from metro\n\
    checkin <name> - check in at a truck";

/// A command parsed from webhook text.
///
/// Parsing never fails: text that matches no known prefix becomes `Help`.
///
/// # Examples
///
/// ```
/// use foodtrax_bot::Command;
///
/// assert_eq!(Command::parse("  all  "), Command::ListAll);
/// assert_eq!(Command::parse("nearby please"), Command::Nearby);
/// assert_eq!(
///     Command::parse("checkin Pho Real"),
///     Command::Checkin("Pho Real".to_string())
/// );
/// assert_eq!(Command::parse("ALL"), Command::Help);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum Command {
    /// Show the usage text
    #[display("help")]
    Help,
    /// List every tracked truck
    #[display("all")]
    ListAll,
    /// Distance from metro to every located truck
    #[display("near")]
    Nearby,
    /// Check in at the named truck
    #[display("checkin {}", _0)]
    Checkin(String),
}

impl Command {
    /// Parse trimmed text by case-sensitive prefix.
    ///
    /// Prefixes are checked in the order `all`, `near`, `checkin`. The
    /// check is on leading characters, not on whole words, so `"allx"`
    /// still lists trucks.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.starts_with("all") {
            Self::ListAll
        } else if text.starts_with("near") {
            Self::Nearby
        } else if let Some(target) = text.strip_prefix("checkin") {
            Self::Checkin(target.trim().to_string())
        } else {
            Self::Help
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_help() {
        assert_eq!(Command::parse(""), Command::Help);
        assert_eq!(Command::parse("   \n"), Command::Help);
    }

    #[test]
    fn test_unknown_text_is_help() {
        assert_eq!(Command::parse("where are the tacos"), Command::Help);
        assert_eq!(Command::parse("help"), Command::Help);
    }

    #[test]
    fn test_prefixes_are_case_sensitive() {
        assert_eq!(Command::parse("All"), Command::Help);
        assert_eq!(Command::parse("NEAR"), Command::Help);
        assert_eq!(Command::parse("Checkin x"), Command::Help);
    }

    #[test]
    fn test_prefix_not_word_match() {
        assert_eq!(Command::parse("allx"), Command::ListAll);
        assert_eq!(Command::parse("nearest"), Command::Nearby);
        assert_eq!(Command::parse("  near me"), Command::Nearby);
    }

    #[test]
    fn test_checkin_target_trimmed() {
        assert_eq!(
            Command::parse("checkin   Tacos El Gordo  "),
            Command::Checkin("Tacos El Gordo".to_string())
        );
        assert_eq!(Command::parse("checkin"), Command::Checkin(String::new()));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Command::ListAll.to_string(), "all");
        assert_eq!(Command::Checkin("x".into()).to_string(), "checkin x");
    }
}
