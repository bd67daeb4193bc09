use crate::storage::FileStorage;
use crate::command::error::CommandError;
use crate::command::result::CommandResult;

pub struct UpdateParser;

impl UpdateParser {
    pub fn new() -> Self {
        UpdateParser
    }

    /// `update <class> <id> <attr> <value>`: sets one attribute and
    /// persists the store. Checks run in a fixed order: class name, id,
    /// instance existence, attribute name, value.
    pub fn parse_and_execute(
        &self,
        args: &[&str],
        storage: &mut FileStorage,
    ) -> Result<CommandResult, CommandError> {
        let key = super::parse_key(args)?;

        let instance = storage.get_mut(&key).ok_or(CommandError::InstanceNotFound)?;

        let name = args.get(2).ok_or(CommandError::AttributeNameMissing)?;
        let value = args.get(3).ok_or(CommandError::ValueMissing)?;

        // Values stay strings; only surrounding quotes are trimmed.
        let value = value.trim_matches(|c| c == '\'' || c == '"');
        instance.set_attribute(name, value);
        storage.save()?;

        Ok(CommandResult::Updated)
    }
}
