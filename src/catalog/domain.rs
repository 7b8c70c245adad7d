pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

/// Catalog operations over books keyed by isbn.
///
/// Mutations take `&mut self`; listings are lazy and walk the current state in
/// insertion order every time they are called.
pub trait CatalogService {
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto>;
    fn remove_book(&mut self, isbn: &str) -> LibraryResult<()>;
    fn lend_book(&mut self, isbn: &str) -> LibraryResult<BookDto>;
    fn return_book(&mut self, isbn: &str) -> LibraryResult<BookDto>;
    fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto>;
    fn books(&self) -> Box<dyn Iterator<Item = BookDto> + '_>;
    fn books_by_author<'a>(&'a self, author: &'a str) -> Box<dyn Iterator<Item = BookDto> + 'a>;
}
