use std::path::Path;

use crate::storage::FileStorage;
use super::error::CommandError;
use super::result::CommandResult;
use super::parser::{CreateParser, ShowParser, DestroyParser, UpdateParser, AllParser};

/// Tokenizes one input line, dispatches on the command word, and runs the
/// matching parser against the record store.
pub struct CommandEngine {
    storage: FileStorage,
    create_parser: CreateParser,
    show_parser: ShowParser,
    destroy_parser: DestroyParser,
    update_parser: UpdateParser,
    all_parser: AllParser,
}

impl CommandEngine {
    pub fn new(file: impl AsRef<Path>) -> Self {
        let mut storage = FileStorage::new(file.as_ref());

        // Load the existing store, if any; a bad file leaves the console
        // running on an empty store.
        if let Err(e) = storage.reload() {
            tracing::warn!("Failed to load existing store: {}", e);
        }

        CommandEngine {
            storage,
            create_parser: CreateParser::new(),
            show_parser: ShowParser::new(),
            destroy_parser: DestroyParser::new(),
            update_parser: UpdateParser::new(),
            all_parser: AllParser::new(),
        }
    }

    pub fn execute(&mut self, line: &str) -> Result<CommandResult, CommandError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(CommandError::UnknownSyntax(line.trim().to_string()));
        }

        let args = &tokens[1..];
        match tokens[0] {
            "create" => self.create_parser.parse_and_execute(args, &mut self.storage),
            "show" => self.show_parser.parse_and_execute(args, &self.storage),
            "destroy" => self.destroy_parser.parse_and_execute(args, &mut self.storage),
            "update" => self.update_parser.parse_and_execute(args, &mut self.storage),
            "all" => self.all_parser.parse_and_execute(args, &self.storage),
            _ => Err(CommandError::UnknownSyntax(line.trim().to_string())),
        }
    }

    pub fn storage(&self) -> &FileStorage {
        &self.storage
    }
}
