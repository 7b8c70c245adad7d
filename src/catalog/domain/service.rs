use std::collections::HashMap;
use tracing::{debug, info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, RemovePolicy};
use crate::core::events::DomainEvent;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

const EVENT_GROUP: &str = "catalog";

pub struct CatalogServiceImpl {
    branch_id: String,
    remove_policy: RemovePolicy,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            remove_policy: config.remove_policy,
            book_repository,
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }

    // The change is already committed when this runs, so a failed publish is
    // logged instead of being reported as a failed operation.
    fn publish(&self, event: serde_json::Result<DomainEvent>) {
        let res = event.map_err(LibraryError::from)
            .and_then(|event| self.events_publisher.publish(&event));
        if let Err(err) = res {
            warn!(error = %err, "failed to publish catalog event");
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto> {
        book.validate()?;
        // new records always start out available
        let entity = BookEntity {
            version: 0,
            book_status: BookStatus::Available,
            lent_at: None,
            ..BookEntity::from(book)
        };
        self.book_repository.create(&entity)?;
        let added = BookDto::from(&entity);
        self.publish(DomainEvent::added(
            "book_added", EVENT_GROUP, added.isbn.as_str(), &self.metadata(), &added));
        info!(isbn = added.isbn.as_str(), title = added.title.as_str(), "book added");
        Ok(added)
    }

    fn remove_book(&mut self, isbn: &str) -> LibraryResult<()> {
        match self.book_repository.delete(isbn) {
            Ok(_) => {}
            Err(LibraryError::NotFound { .. }) if self.remove_policy == RemovePolicy::Idempotent => {
                debug!(isbn, "remove of unknown book ignored");
                return Ok(());
            }
            Err(err) => return Err(err),
        }
        let data = isbn.to_string();
        self.publish(DomainEvent::deleted(
            "book_removed", EVENT_GROUP, isbn, &self.metadata(), &data));
        info!(isbn, "book removed");
        Ok(())
    }

    fn lend_book(&mut self, isbn: &str) -> LibraryResult<BookDto> {
        let mut book = self.book_repository.get(isbn)?;
        if !book.book_status.is_available() {
            warn!(isbn, "lend rejected, book is already lent");
            return Err(LibraryError::not_available(
                format!("book {} is already lent", isbn).as_str()));
        }
        book.lend();
        self.book_repository.update(&book)?;
        let lent = self.find_book_by_isbn(isbn)?;
        self.publish(DomainEvent::updated(
            "book_lent", EVENT_GROUP, isbn, &self.metadata(), &lent));
        info!(isbn, "book lent");
        Ok(lent)
    }

    fn return_book(&mut self, isbn: &str) -> LibraryResult<BookDto> {
        let mut book = self.book_repository.get(isbn)?;
        if book.book_status.is_available() {
            warn!(isbn, "return rejected, book is not lent");
            return Err(LibraryError::already_available(
                format!("book {} is not lent", isbn).as_str()));
        }
        book.give_back();
        self.book_repository.update(&book)?;
        let returned = self.find_book_by_isbn(isbn)?;
        self.publish(DomainEvent::updated(
            "book_returned", EVENT_GROUP, isbn, &self.metadata(), &returned));
        info!(isbn, "book returned");
        Ok(returned)
    }

    fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(isbn).map(|b| BookDto::from(&b))
    }

    fn books(&self) -> Box<dyn Iterator<Item = BookDto> + '_> {
        Box::new(self.book_repository.iter().map(BookDto::from))
    }

    fn books_by_author<'a>(&'a self, author: &'a str) -> Box<dyn Iterator<Item = BookDto> + 'a> {
        Box::new(self.book_repository.find_by_author(author).map(BookDto::from))
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            format: other.format,
            book_status: other.book_status,
            lent_at: other.lent_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            format: other.format,
            book_status: other.book_status,
            lent_at: other.lent_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
