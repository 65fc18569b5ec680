use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::{Attributes, IdAssignment};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

#[derive(Debug)]
struct Shelf {
    books: Vec<BookEntity>,
    // next id handed out under IdAssignment::Monotonic
    next_id: i64,
}

impl Shelf {
    fn assign_id(&mut self, id_assignment: IdAssignment) -> i64 {
        match id_assignment {
            IdAssignment::Length => self.books.len() as i64 + 1,
            IdAssignment::Monotonic => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
        }
    }
}

// MemoryBookRepository is the process-lifetime book collection. Every operation holds the one
// lock for its whole duration, so concurrent requests never interleave inside the list.
#[derive(Debug)]
pub struct MemoryBookRepository {
    shelf: Mutex<Shelf>,
    id_assignment: IdAssignment,
    immutable_ids: bool,
}

impl MemoryBookRepository {
    pub(crate) fn new(books: Vec<BookEntity>, id_assignment: IdAssignment, immutable_ids: bool) -> Self {
        let next_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self {
            shelf: Mutex::new(Shelf { books, next_id }),
            id_assignment,
            immutable_ids,
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.shelf.lock().await.books.clone())
    }

    async fn create(&self, attributes: &Attributes) -> LibraryResult<BookEntity> {
        let mut shelf = self.shelf.lock().await;
        let id = shelf.assign_id(self.id_assignment);
        let book = BookEntity::new(id, attributes);
        shelf.books.push(book.clone());
        debug!(id, size = shelf.books.len(), "stored book");
        Ok(book)
    }

    async fn update(&self, id: i64, attributes: &Attributes) -> LibraryResult<BookEntity> {
        let mut shelf = self.shelf.lock().await;
        let book = shelf.books.iter_mut().find(|b| b.id == id)
            .ok_or_else(LibraryError::book_not_found)?;
        book.merge(attributes, self.immutable_ids)?;
        Ok(book.clone())
    }

    async fn get(&self, id: i64) -> LibraryResult<BookEntity> {
        self.shelf.lock().await.books.iter().find(|b| b.id == id)
            .cloned()
            .ok_or_else(LibraryError::book_not_found)
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        let mut shelf = self.shelf.lock().await;
        let before = shelf.books.len();
        shelf.books.retain(|b| b.id != id);
        let removed = before - shelf.books.len();
        debug!(id, removed, "deleted books");
        Ok(removed)
    }
}

impl BookRepository for MemoryBookRepository {}
