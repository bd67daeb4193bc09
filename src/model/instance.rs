use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use super::ModelClass;

/// Field names owned by the record itself; never stored in the attribute map.
const RESERVED_NAMES: [&str; 4] = ["id", "created_at", "updated_at", "__class__"];

/// One persisted record: a generated id, its class tag, creation/update
/// timestamps, and an open-ended attribute map. Serializes as a single flat
/// JSON object with the class tag under `__class__`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub id: String,
    #[serde(rename = "__class__")]
    pub class: ModelClass,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl Instance {
    pub fn new(class: ModelClass) -> Self {
        let now = Utc::now();
        Instance {
            id: Uuid::new_v4().to_string(),
            class,
            created_at: now,
            updated_at: now,
            attributes: BTreeMap::new(),
        }
    }

    /// Storage key in the form `<Class>.<id>`.
    pub fn key(&self) -> String {
        format!("{}.{}", self.class, self.id)
    }

    /// Sets an attribute to the given string value and refreshes
    /// `updated_at`. Reserved field names stay out of the attribute map.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        if !RESERVED_NAMES.contains(&name) {
            self.attributes.insert(name.to_string(), value.to_string());
        }
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] ({}) {{'id': '{}', 'created_at': '{}', 'updated_at': '{}'",
            self.class,
            self.id,
            self.id,
            self.created_at.to_rfc3339(),
            self.updated_at.to_rfc3339(),
        )?;
        for (name, value) in &self.attributes {
            write!(f, ", '{}': '{}'", name, value)?;
        }
        write!(f, "}}")
    }
}
