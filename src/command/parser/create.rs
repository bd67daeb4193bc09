use crate::model::Instance;
use crate::storage::FileStorage;
use crate::command::error::CommandError;
use crate::command::result::CommandResult;

pub struct CreateParser;

impl CreateParser {
    pub fn new() -> Self {
        CreateParser
    }

    /// `create <class>`: builds a new instance of the class, persists the
    /// store, and reports the new id.
    pub fn parse_and_execute(
        &self,
        args: &[&str],
        storage: &mut FileStorage,
    ) -> Result<CommandResult, CommandError> {
        let class = super::parse_class(args)?;

        let instance = Instance::new(class);
        let id = instance.id.clone();
        storage.insert(instance);
        storage.save()?;

        Ok(CommandResult::Created(id))
    }
}
