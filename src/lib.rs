pub mod cli;
pub mod command;
pub mod model;
pub mod storage;

pub use cli::Console;
pub use command::{CommandEngine, CommandError, CommandResult};
pub use model::{Instance, ModelClass};
pub use storage::{FileStorage, StorageError};
pub use persistence_test::run_persistence_test;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_console_scenario_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let store_path = temp_dir.path().join("file.json");

        // Phase 1: create and update records
        let user_id;
        {
            let mut engine = CommandEngine::new(&store_path);

            user_id = match engine.execute("create User").unwrap() {
                CommandResult::Created(id) => id,
                other => panic!("expected Created, got {:?}", other),
            };

            engine.execute("create State").unwrap();

            engine
                .execute(&format!("update User {} email \"a@b.com\"", user_id))
                .unwrap();
        } // Engine goes out of scope here

        // Phase 2: new engine instance (simulating restart)
        {
            let mut engine = CommandEngine::new(&store_path);

            match engine.execute(&format!("show User {}", user_id)).unwrap() {
                CommandResult::Show(rendered) => {
                    assert!(rendered.contains(&user_id));
                    assert!(rendered.contains("'email': 'a@b.com'"));
                }
                other => panic!("expected Show, got {:?}", other),
            }

            match engine.execute("all").unwrap() {
                CommandResult::All(rendered) => assert_eq!(rendered.len(), 2),
                other => panic!("expected All, got {:?}", other),
            }

            match engine.execute("all User").unwrap() {
                CommandResult::All(rendered) => assert_eq!(rendered.len(), 1),
                other => panic!("expected All, got {:?}", other),
            }

            engine.execute(&format!("destroy User {}", user_id)).unwrap();

            let err = engine.execute(&format!("show User {}", user_id)).unwrap_err();
            assert_eq!(err.to_string(), "** no instance found **");
        }

        // Phase 3: verify the persisted file
        let content = fs::read_to_string(&store_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 1, "Only the State record should remain");

        let (key, entry) = map.iter().next().unwrap();
        assert!(key.starts_with("State."));
        assert_eq!(entry.get("__class__").and_then(|v| v.as_str()), Some("State"));
    }
}
