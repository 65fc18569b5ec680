use crate::core::domain::{Attributes, Identifiable};

pub mod model;

pub trait Book: Identifiable {
    fn attributes(&self) -> &Attributes;

    fn title(&self) -> Option<&str> {
        self.attributes().get("title").and_then(|v| v.as_str())
    }

    fn author(&self) -> Option<&str> {
        self.attributes().get("author").and_then(|v| v.as_str())
    }
}
