use crate::storage::FileStorage;
use crate::command::error::CommandError;
use crate::command::result::CommandResult;

pub struct DestroyParser;

impl DestroyParser {
    pub fn new() -> Self {
        DestroyParser
    }

    /// `destroy <class> <id>`: removes the instance, persists the store,
    /// and reloads it from disk.
    pub fn parse_and_execute(
        &self,
        args: &[&str],
        storage: &mut FileStorage,
    ) -> Result<CommandResult, CommandError> {
        let key = super::parse_key(args)?;

        if storage.remove(&key).is_none() {
            return Err(CommandError::InstanceNotFound);
        }
        storage.save()?;
        storage.reload()?;

        Ok(CommandResult::Destroyed)
    }
}
