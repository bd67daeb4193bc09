use std::io::{self, Write};
use std::path::Path;

use crate::command::CommandEngine;
use super::display::display_result;

/// Interactive read-eval-print loop around the command engine. `quit`,
/// `help`, and empty lines are handled here; everything else goes to the
/// engine.
pub struct Console {
    pub engine: CommandEngine,
    pub prompt: String,
}

impl Console {
    pub fn new(file: impl AsRef<Path>) -> Self {
        Console {
            engine: CommandEngine::new(file),
            prompt: "(hbnb) ".to_string(),
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();

        loop {
            print!("{}", self.prompt);
            io::stdout().flush()?;

            let mut input = String::new();
            if stdin.read_line(&mut input)? == 0 {
                // End of input behaves like quit.
                println!();
                break;
            }

            let input = input.trim();
            if input.is_empty() {
                continue;
            }

            let mut words = input.split_whitespace();
            match words.next() {
                Some("quit") => break,
                Some("help") => self.show_help(words.next()),
                _ => self.execute_line(input),
            }
        }

        Ok(())
    }

    fn execute_line(&mut self, line: &str) {
        match self.engine.execute(line) {
            Ok(result) => display_result(&result),
            Err(error) => println!("{}", error),
        }
    }

    fn show_help(&self, topic: Option<&str>) {
        match topic {
            None => {
                println!("\nAvailable commands:");
                println!("  create <class>                      - create a new instance and print its id");
                println!("  show <class> <id>                   - print one instance");
                println!("  destroy <class> <id>                - delete an instance");
                println!("  update <class> <id> <attr> <value>  - set one attribute on an instance");
                println!("  all [<class>]                       - print all instances, optionally one class");
                println!();
                println!("Utility commands:");
                println!("  help [command] - show this message or one command's usage");
                println!("  quit           - exit the console (end-of-input does the same)");
            }
            Some("create") => println!("create <class> - create a new instance, save it, and print its id"),
            Some("show") => println!("show <class> <id> - print the string form of an instance"),
            Some("destroy") => println!("destroy <class> <id> - delete an instance and save the change"),
            Some("update") => println!("update <class> <id> <attr> <value> - set one attribute and save"),
            Some("all") => println!("all [<class>] - print every instance, or only one class"),
            Some("help") => println!("help [command] - show the command list or one command's usage"),
            Some("quit") => println!("quit - exit the console"),
            Some(other) => println!("*** No help on {}", other),
        }
    }
}
