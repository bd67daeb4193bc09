use crate::command::CommandResult;

/// Prints a command's outcome. Commands without output stay silent.
pub fn display_result(result: &CommandResult) {
    match result {
        CommandResult::Created(id) => println!("{}", id),
        CommandResult::Show(rendered) => println!("{}", rendered),
        CommandResult::Destroyed => {}
        CommandResult::Updated => {}
        CommandResult::All(rendered) => {
            for line in rendered {
                println!("{}", line);
            }
        }
    }
}
