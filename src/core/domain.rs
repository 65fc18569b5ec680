use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Identifiable defines common traits that can be shared by stored records
pub trait Identifiable : Sync + Send {
    fn id(&self) -> i64;
}

// Attributes is the open set of caller supplied fields of a record, kept in insertion order
pub type Attributes = serde_json::Map<String, Value>;

// IdAssignment decides how the collection picks the id of a newly created record
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum IdAssignment {
    // current length + 1, ids may be handed out again after a delete
    Length,
    // counter that only moves forward
    Monotonic,
}

impl From<String> for IdAssignment {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "monotonic" => IdAssignment::Monotonic,
            _ => IdAssignment::Length,
        }
    }
}

impl Display for IdAssignment {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            IdAssignment::Length => write!(f, "length"),
            IdAssignment::Monotonic => write!(f, "monotonic"),
        }
    }
}

// Configuration abstracts config options for the book catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub id_assignment: IdAssignment,
    pub immutable_ids: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            id_assignment: IdAssignment::Length,
            immutable_ids: false,
        }
    }

    pub fn with_id_assignment(mut self, id_assignment: IdAssignment) -> Self {
        self.id_assignment = id_assignment;
        self
    }

    pub fn with_immutable_ids(mut self, immutable_ids: bool) -> Self {
        self.immutable_ids = immutable_ids;
        self
    }

    /// Reads `BOOKS_ID_ASSIGNMENT` and `BOOKS_IMMUTABLE_IDS`, falling back to the defaults of `new`.
    pub fn from_env(branch_id: &str) -> Self {
        Self::from_vars(branch_id,
                        std::env::var("BOOKS_ID_ASSIGNMENT").ok(),
                        std::env::var("BOOKS_IMMUTABLE_IDS").ok())
    }

    fn from_vars(branch_id: &str, id_assignment: Option<String>, immutable_ids: Option<String>) -> Self {
        let mut config = Configuration::new(branch_id);
        if let Some(val) = id_assignment {
            config.id_assignment = IdAssignment::from(val);
        }
        if let Some(val) = immutable_ids {
            config.immutable_ids = matches!(val.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        config
    }
}
