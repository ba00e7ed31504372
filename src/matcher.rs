use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// The command pattern. Anchored at both ends and case-insensitive;
    /// both captures are greedy, so on inputs with several " to "
    /// separators the nickname is whatever follows the last one.
    static ref MATCHER: Regex =
        Regex::new(r"(?i)^rename (.+) to (.+)$").expect("rename pattern failed to compile");
}

/// Forces pattern compilation so a bad pattern kills the process at
/// startup rather than on the first message.
pub(crate) fn init() {
    lazy_static::initialize(&MATCHER);
}

/// A `rename <subject> to <new name>` command extracted from a message.
///
/// The subject text is whatever the author typed between the keywords; the
/// member actually renamed is chosen by mention, not by this text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RenameCommand {
    pub subject_text: String,
    pub new_nick: String,
}

/// Parses a message body into a [`RenameCommand`]. `None` means the message
/// is not a rename command at all, which is not an error.
pub(crate) fn parse(content: &str) -> Option<RenameCommand> {
    let caps = MATCHER.captures(content)?;
    Some(RenameCommand {
        subject_text: caps[1].to_string(),
        new_nick: caps[2].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(subject_text: &str, new_nick: &str) -> RenameCommand {
        RenameCommand {
            subject_text: subject_text.to_string(),
            new_nick: new_nick.to_string(),
        }
    }

    #[test]
    fn parses_a_simple_command() {
        assert_eq!(parse("rename alice to bob"), Some(command("alice", "bob")));
    }

    #[test]
    fn is_case_insensitive() {
        assert_eq!(parse("RENAME alice TO bob"), parse("rename alice to bob"));
        assert_eq!(parse("Rename Alice To Bob"), Some(command("Alice", "Bob")));
    }

    #[test]
    fn ignores_non_commands() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("hello there"), None);
        assert_eq!(parse("rename alice"), None);
        assert_eq!(parse("renamed alice to bob?"), None);
    }

    #[test]
    fn is_anchored_at_the_start() {
        assert_eq!(parse("please rename alice to bob"), None);
        assert_eq!(parse(" rename alice to bob"), None);
    }

    #[test]
    fn requires_both_sides_of_the_separator() {
        // "to bob" alone leaves nothing for the subject capture.
        assert_eq!(parse("rename to bob"), None);
        assert_eq!(parse("rename alice to"), None);
    }

    #[test]
    fn greedy_subject_takes_extra_separators() {
        // Pins down the boundary on ambiguous input: the first capture is
        // greedy, so the nickname is the text after the last " to ".
        assert_eq!(
            parse("rename a to b to c"),
            Some(command("a to b", "c"))
        );
        assert_eq!(
            parse("rename back to the future to marty"),
            Some(command("back to the future", "marty"))
        );
    }

    #[test]
    fn mention_markup_is_just_subject_text() {
        assert_eq!(
            parse("rename <@123456789> to The Renamed"),
            Some(command("<@123456789>", "The Renamed"))
        );
    }

    #[test]
    fn parsing_is_pure() {
        let first = parse("rename a to b to c");
        let second = parse("rename a to b to c");
        assert_eq!(first, second);
    }
}
