use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::{Attributes, Identifiable};

// BookDto is the wire form of a book shared by the catalog service, its HTTP handlers and the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: i64,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl BookDto {
    pub fn new(id: i64, attributes: Attributes) -> BookDto {
        BookDto {
            id,
            attributes,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Book for BookDto {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id,
            attributes: other.attributes.clone(),
        }
    }
}

impl From<BookEntity> for BookDto {
    fn from(other: BookEntity) -> Self {
        Self {
            id: other.id,
            attributes: other.attributes,
        }
    }
}
