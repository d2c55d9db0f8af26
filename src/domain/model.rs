use serde::{Deserialize, Serialize};

/// A farmer as returned by the listing collaborator. `retired` defaults to
/// `false` when the field is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Farmer {
    pub name: String,
    #[serde(default)]
    pub retired: bool,
}

impl Farmer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            retired: false,
        }
    }

    pub fn retired(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            retired: true,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.retired
    }
}

/// A quantity of one fruit type attributed to a farmer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crop {
    #[serde(rename = "type")]
    pub fruit_type: String,
    pub units: u64,
}

impl Crop {
    pub fn new(fruit_type: impl Into<String>, units: u64) -> Self {
        Self {
            fruit_type: fruit_type.into(),
            units,
        }
    }
}
