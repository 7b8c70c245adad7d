pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;

pub trait BookRepository: Repository<BookEntity> {
    // books whose author matches exactly, in insertion order
    fn find_by_author<'a>(&'a self, author: &'a str) -> Box<dyn Iterator<Item = &'a BookEntity> + 'a> {
        Box::new(self.iter().filter(move |b| b.author == author))
    }
}
