//! Command handler implementation.

use tracing::{debug, info, warn};

use super::dict::DefinitionLookup;
use super::types::{BotCommand, CommandResult};

/// Dispatches parsed commands.
///
/// Holds no per-request state, so one handler can serve many callers at
/// once behind an `Arc`.
#[derive(Debug)]
pub struct CommandHandler {
    /// Command prefix (e.g. `!`).
    prefix: String,

    /// The `dict` command.
    dictionary: DefinitionLookup,
}

impl CommandHandler {
    /// Creates a new command handler.
    #[must_use]
    pub fn new(prefix: String, dictionary: DefinitionLookup) -> Self {
        Self { prefix, dictionary }
    }

    /// Tries to parse and execute a command from a message.
    ///
    /// Returns `None` if the message is not a command.
    pub fn try_handle(&self, message_text: &str) -> Option<CommandResult> {
        let command = BotCommand::parse(message_text, &self.prefix)?;

        debug!("Handling command: {}", command);
        let result = self.execute(command);
        info!(
            "Command result: success={}, messages={}",
            result.success,
            result.messages.len()
        );

        Some(result)
    }

    /// Executes a parsed command.
    fn execute(&self, command: BotCommand) -> CommandResult {
        match command {
            BotCommand::Dict(term) => self.handle_dict(&term),
            BotCommand::Help => self.handle_help(),
            BotCommand::Info => self.handle_info(),
        }
    }

    fn handle_dict(&self, term: &str) -> CommandResult {
        match self.dictionary.lookup(term) {
            Ok(messages) => CommandResult::replies(messages),
            Err(e) => {
                warn!("Dictionary lookup for '{}' failed: {}", term, e);
                CommandResult::error(format!("Dictionary lookup failed: {e}"))
            }
        }
    }

    fn handle_help(&self) -> CommandResult {
        let mut lines = vec![
            format!("Dictionary Bot Commands (prefix: {})", self.prefix),
            String::new(),
        ];

        for (cmd, aliases, desc) in BotCommand::all_commands() {
            let alias_str = if aliases.is_empty() {
                String::new()
            } else {
                format!(" {aliases}")
            };
            lines.push(format!("  {cmd}{alias_str} - {desc}"));
        }

        CommandResult::success(lines.join("\n"))
    }

    #[allow(clippy::unused_self)]
    fn handle_info(&self) -> CommandResult {
        let version = env!("CARGO_PKG_VERSION");
        let message = format!(
            "Dictionary Bot v{version}\n\
             Looks up English words in WordNet.\n\
             Repository: https://github.com/user/dict_bot"
        );
        CommandResult::success(message)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::lexicon::{JsonLexicon, LexicalDatabase, LexiconError, LexiconFile, Synset};
    use crate::render::{AoRenderer, PlainRenderer};

    struct BrokenDatabase;

    impl LexicalDatabase for BrokenDatabase {
        fn search_lemma(&self, _term: &str) -> Result<Vec<Synset>, LexiconError> {
            Err(LexiconError::Unavailable("disk on fire".to_owned()))
        }
    }

    fn handler() -> CommandHandler {
        let lexicon = JsonLexicon::from_file_contents(LexiconFile::example()).unwrap();
        CommandHandler::new(
            "!".to_owned(),
            DefinitionLookup::new(Box::new(lexicon), Box::new(AoRenderer::default())),
        )
    }

    #[test]
    fn test_non_command_is_ignored() {
        assert!(handler().try_handle("hello there").is_none());
        assert!(handler().try_handle("!dict").is_none());
    }

    #[test]
    fn test_dict_found() {
        let result = handler().try_handle("!dict jog");
        let result = result.unwrap();
        assert!(result.success);
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].contains(">Found 1 definition for jog</a>"));
        assert!(result.messages[0].contains("chatcmd:///tell <myname> dict trot"));
        assert!(!result.messages[0].contains("dict jog'"));
    }

    #[test]
    fn test_dict_not_found_is_success() {
        let result = handler().try_handle("!dict xyzzy").unwrap();
        assert!(result.success);
        assert_eq!(
            result.messages,
            vec!["No definition found for <highlight>xyzzy<end>.".to_owned()]
        );
    }

    #[test]
    fn test_dict_provider_failure() {
        let handler = CommandHandler::new(
            "!".to_owned(),
            DefinitionLookup::new(Box::new(BrokenDatabase), Box::new(PlainRenderer::new())),
        );
        let result = handler.try_handle("!dict run").unwrap();
        assert!(!result.success);
        assert_eq!(
            result.messages,
            vec!["Dictionary lookup failed: Lexical database unavailable: disk on fire".to_owned()]
        );
    }

    #[test]
    fn test_help_lists_dict() {
        let result = handler().try_handle("!help").unwrap();
        assert!(result.success);
        assert!(result.messages[0].contains("dict <term> (define) - Look up the definition of a word"));
    }

    #[test]
    fn test_concurrent_lookups_are_independent() {
        let handler = Arc::new(handler());
        let workers: Vec<_> = ["run", "jog", "quickly", "xyzzy"]
            .into_iter()
            .map(|term| {
                let handler = Arc::clone(&handler);
                std::thread::spawn(move || {
                    handler
                        .try_handle(&format!("!dict {term}"))
                        .map(|r| r.messages)
                        .unwrap()
                })
            })
            .collect();

        let replies: Vec<Vec<String>> = workers
            .into_iter()
            .map(|w| w.join().unwrap())
            .collect();

        assert_eq!(replies[0], handler.try_handle("!dict run").map(|r| r.messages).unwrap());
        assert!(replies[2][0].contains("Found 1 definition for quickly"));
        assert!(replies[3][0].starts_with("No definition found"));
    }
}
