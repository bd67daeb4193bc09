use crate::model::ModelClass;
use crate::storage::FileStorage;
use crate::command::error::CommandError;
use crate::command::result::CommandResult;

pub struct AllParser;

impl AllParser {
    pub fn new() -> Self {
        AllParser
    }

    /// `all [<class>]`: renders every instance in the store, or only those
    /// whose key contains the given class name.
    pub fn parse_and_execute(
        &self,
        args: &[&str],
        storage: &FileStorage,
    ) -> Result<CommandResult, CommandError> {
        let rendered = match args.first() {
            None => storage.all().values().map(|i| i.to_string()).collect(),
            Some(name) => {
                let class = ModelClass::from_name(name).ok_or(CommandError::ClassNotFound)?;

                // Substring match on the full key, not an exact class prefix.
                storage
                    .all()
                    .iter()
                    .filter(|(key, _)| key.contains(class.name()))
                    .map(|(_, instance)| instance.to_string())
                    .collect()
            }
        };

        Ok(CommandResult::All(rendered))
    }
}
