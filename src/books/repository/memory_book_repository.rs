use chrono::Utc;
use tracing::debug;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps books in insertion order; lookups are linear scans,
// which is all a branch-sized catalog needs.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Vec<BookEntity>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, isbn: &str) -> Option<usize> {
        self.books.iter().position(|b| b.id() == isbn)
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        if self.position(entity.id().as_str()).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("book with isbn {} already exists", entity.id()).as_str()));
        }
        self.books.push(entity.clone());
        debug!(isbn = entity.isbn.as_str(), size = self.books.len(), "book stored");
        Ok(1)
    }

    fn update(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        let pos = self.position(entity.id().as_str()).ok_or_else(|| LibraryError::not_found(
            format!("book not found for {}", entity.id()).as_str()))?;
        let stored = &mut self.books[pos];
        if stored.version() != entity.version() {
            return Err(LibraryError::validation(
                format!("stale version {} for book {}, current version is {}",
                        entity.version(), entity.id(), stored.version()).as_str(), Some("version".to_string())));
        }
        *stored = BookEntity {
            version: entity.version() + 1,
            updated_at: Utc::now().naive_utc(),
            ..entity.clone()
        };
        Ok(1)
    }

    fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.books.iter().find(|b| b.id() == id).cloned().ok_or_else(|| LibraryError::not_found(
            format!("book not found for {}", id).as_str()))
    }

    fn delete(&mut self, id: &str) -> LibraryResult<usize> {
        let pos = self.position(id).ok_or_else(|| LibraryError::not_found(
            format!("book not found for {}", id).as_str()))?;
        // Vec::remove keeps the relative order of the remaining books
        self.books.remove(pos);
        Ok(1)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &BookEntity> + '_> {
        Box::new(self.books.iter())
    }

    fn len(&self) -> usize {
        self.books.len()
    }
}

impl BookRepository for MemoryBookRepository {}
