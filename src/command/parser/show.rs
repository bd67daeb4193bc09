use crate::storage::FileStorage;
use crate::command::error::CommandError;
use crate::command::result::CommandResult;

pub struct ShowParser;

impl ShowParser {
    pub fn new() -> Self {
        ShowParser
    }

    /// `show <class> <id>`: looks up `<class>.<id>` and reports the
    /// instance's string form.
    pub fn parse_and_execute(
        &self,
        args: &[&str],
        storage: &FileStorage,
    ) -> Result<CommandResult, CommandError> {
        let key = super::parse_key(args)?;

        let instance = storage.get(&key).ok_or(CommandError::InstanceNotFound)?;
        Ok(CommandResult::Show(instance.to_string()))
    }
}
