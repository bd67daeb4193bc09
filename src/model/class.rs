use serde::{Serialize, Deserialize};

/// The closed set of record kinds the console manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelClass {
    BaseModel,
    User,
    Place,
    State,
    City,
    Amenity,
    Review,
}

impl ModelClass {
    pub const ALL: [ModelClass; 7] = [
        ModelClass::BaseModel,
        ModelClass::User,
        ModelClass::Place,
        ModelClass::State,
        ModelClass::City,
        ModelClass::Amenity,
        ModelClass::Review,
    ];

    /// Looks a class up by its exact name. Anything outside the whitelist
    /// is rejected.
    pub fn from_name(name: &str) -> Option<ModelClass> {
        match name {
            "BaseModel" => Some(ModelClass::BaseModel),
            "User" => Some(ModelClass::User),
            "Place" => Some(ModelClass::Place),
            "State" => Some(ModelClass::State),
            "City" => Some(ModelClass::City),
            "Amenity" => Some(ModelClass::Amenity),
            "Review" => Some(ModelClass::Review),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModelClass::BaseModel => "BaseModel",
            ModelClass::User => "User",
            ModelClass::Place => "Place",
            ModelClass::State => "State",
            ModelClass::City => "City",
            ModelClass::Amenity => "Amenity",
            ModelClass::Review => "Review",
        }
    }
}

impl std::fmt::Display for ModelClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for class in ModelClass::ALL {
            assert_eq!(ModelClass::from_name(class.name()), Some(class));
        }
    }

    #[test]
    fn test_unknown_class_rejected() {
        assert_eq!(ModelClass::from_name("MyModel"), None);
        assert_eq!(ModelClass::from_name("user"), None);
        assert_eq!(ModelClass::from_name(""), None);
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&ModelClass::User).unwrap();
        assert_eq!(json, "\"User\"");
    }
}
