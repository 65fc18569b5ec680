use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

// books present at process start, a restart always comes back to these
pub(crate) fn seed_books() -> Vec<BookEntity> {
    vec![
        BookEntity::titled(1, "To Kill a Mockingbird", "Harper Lee"),
        BookEntity::titled(2, "1984", "George Orwell"),
    ]
}

pub(crate) fn create_book_repository(config: &Configuration, store: RepositoryStore) -> Box<dyn BookRepository> {
    let books = match store {
        RepositoryStore::Seeded => seed_books(),
        RepositoryStore::Empty => vec![],
    };
    Box::new(MemoryBookRepository::new(books, config.id_assignment, config.immutable_ids))
}
