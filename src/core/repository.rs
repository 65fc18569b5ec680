use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::domain::Attributes;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // all entities in insertion order
    async fn list(&self) -> LibraryResult<Vec<Entity>>;

    // create an entity from caller fields, the repository owns id assignment
    async fn create(&self, attributes: &Attributes) -> LibraryResult<Entity>;

    // merges fields into an existing entity
    async fn update(&self, id: i64, attributes: &Attributes) -> LibraryResult<Entity>;

    // get an entity
    async fn get(&self, id: i64) -> LibraryResult<Entity>;

    // delete all entities with the id and return how many were removed
    async fn delete(&self, id: i64) -> LibraryResult<usize>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    // starts with the two seed books
    Seeded,
    Empty,
}
