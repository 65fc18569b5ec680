use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::books::domain::Book;
use crate::core::domain::{Attributes, Identifiable};
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) const ID_FIELD: &str = "id";

// BookEntity is a stored record: an assigned id plus whatever fields the caller sent.
// The `id` key never appears inside `attributes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub id: i64,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl BookEntity {
    pub fn new(id: i64, attributes: &Attributes) -> Self {
        Self {
            id,
            attributes: attributes.iter()
                .filter(|(k, _)| k.as_str() != ID_FIELD)
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        }
    }

    pub fn titled(id: i64, title: &str, author: &str) -> Self {
        let mut attributes = Attributes::new();
        attributes.insert("title".to_string(), Value::from(title));
        attributes.insert("author".to_string(), Value::from(author));
        Self {
            id,
            attributes,
        }
    }

    /// Overwrites each supplied field and adds the new ones; fields not supplied are kept.
    ///
    /// An `id` field replaces the record id unless `immutable_id` is set, in which case it is
    /// dropped. A non-integer `id` is rejected before anything is changed.
    pub fn merge(&mut self, attributes: &Attributes, immutable_id: bool) -> LibraryResult<()> {
        let new_id = match attributes.get(ID_FIELD) {
            Some(_) if immutable_id => None,
            Some(val) => Some(val.as_i64().ok_or_else(|| LibraryError::validation(
                format!("id must be an integer but was {}", val).as_str(), Some(ID_FIELD.to_string())))?),
            None => None,
        };
        for (k, v) in attributes {
            if k != ID_FIELD {
                self.attributes.insert(k.to_string(), v.clone());
            }
        }
        if let Some(id) = new_id {
            self.id = id;
        }
        Ok(())
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Book for BookEntity {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Attributes;
    use crate::core::library::LibraryError;

    fn attrs(value: serde_json::Value) -> Attributes {
        value.as_object().cloned().expect("object")
    }

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::titled(1, "1984", "George Orwell");
        assert_eq!(1, book.id);
        assert_eq!(Some("1984"), book.title());
        assert_eq!(Some("George Orwell"), book.author());
    }

    #[tokio::test]
    async fn test_should_drop_caller_id_on_new() {
        let book = BookEntity::new(5, &attrs(json!({"id": 99, "title": "T", "pages": 10})));
        assert_eq!(5, book.id);
        assert!(!book.attributes.contains_key("id"));
        assert_eq!(Some(&json!(10)), book.attributes.get("pages"));
        let keys: Vec<&str> = book.attributes.keys().map(|k| k.as_str()).collect();
        assert_eq!(vec!["title", "pages"], keys);
    }

    #[tokio::test]
    async fn test_should_merge_fields() {
        let mut book = BookEntity::titled(3, "The Great Gatsby", "F. Scott Fitzgerald");
        book.merge(&attrs(json!({"title": "The Great Gatsby (Updated)", "year": 1925})), false).expect("should merge");
        assert_eq!(Some("The Great Gatsby (Updated)"), book.title());
        assert_eq!(Some("F. Scott Fitzgerald"), book.author());
        assert_eq!(Some(&json!(1925)), book.attributes.get("year"));
        let keys: Vec<&str> = book.attributes.keys().map(|k| k.as_str()).collect();
        assert_eq!(vec!["title", "author", "year"], keys);
    }

    #[tokio::test]
    async fn test_should_overwrite_id_when_mutable() {
        let mut book = BookEntity::titled(3, "T", "A");
        book.merge(&attrs(json!({"id": 1})), false).expect("should merge");
        assert_eq!(1, book.id);
        assert!(!book.attributes.contains_key("id"));
    }

    #[tokio::test]
    async fn test_should_keep_id_when_immutable() {
        let mut book = BookEntity::titled(3, "T", "A");
        book.merge(&attrs(json!({"id": 1, "title": "X"})), true).expect("should merge");
        assert_eq!(3, book.id);
        assert_eq!(Some("X"), book.title());
    }

    #[tokio::test]
    async fn test_should_reject_non_integer_id() {
        let mut book = BookEntity::titled(3, "T", "A");
        let res = book.merge(&attrs(json!({"id": "one", "title": "X"})), false);
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        assert_eq!(BookEntity::titled(3, "T", "A"), book);
    }

    #[tokio::test]
    async fn test_should_serialize_id_first() {
        let book = BookEntity::titled(2, "1984", "George Orwell");
        let json = serde_json::to_string(&book).expect("serialize");
        assert_eq!(r#"{"id":2,"title":"1984","author":"George Orwell"}"#, json.as_str());
    }
}
