mod create;
mod show;
mod destroy;
mod update;
mod all;

pub use create::CreateParser;
pub use show::ShowParser;
pub use destroy::DestroyParser;
pub use update::UpdateParser;
pub use all::AllParser;

use crate::model::ModelClass;
use super::error::CommandError;

/// The first argument must name a whitelisted class.
fn parse_class(args: &[&str]) -> Result<ModelClass, CommandError> {
    let name = args.first().ok_or(CommandError::ClassNameMissing)?;
    ModelClass::from_name(name).ok_or(CommandError::ClassNotFound)
}

/// The first two arguments must be a class name and an instance id;
/// returns the storage key `<Class>.<id>`.
fn parse_key(args: &[&str]) -> Result<String, CommandError> {
    let class = parse_class(args)?;
    let id = args.get(1).ok_or(CommandError::InstanceIdMissing)?;
    Ok(format!("{}.{}", class, id))
}
