/// Successful outcome of one console command.
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// `create`: the new instance's id.
    Created(String),
    /// `show`: the instance's rendered string form.
    Show(String),
    /// `destroy`: the instance was removed; nothing is printed.
    Destroyed,
    /// `update`: the attribute was set; nothing is printed.
    Updated,
    /// `all`: one rendered line per instance.
    All(Vec<String>),
}
