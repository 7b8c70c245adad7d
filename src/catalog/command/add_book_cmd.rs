use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::command::required_text;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    // raw text as typed, only present for e-books
    pub download_size: Option<String>,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            download_size: None,
        }
    }

    pub fn ebook(title: &str, author: &str, isbn: &str, download_size: &str) -> Self {
        Self {
            download_size: Some(download_size.to_string()),
            ..Self::new(title, author, isbn)
        }
    }

    pub fn build_book(&self) -> Result<BookDto, CommandError> {
        let title = required_text("title", self.title.as_str())?;
        let author = required_text("author", self.author.as_str())?;
        let isbn = required_text("isbn", self.isbn.as_str())?;
        match &self.download_size {
            None => Ok(BookDto::physical(title.as_str(), author.as_str(), isbn.as_str())),
            Some(raw) => {
                let raw = required_text("download size", raw.as_str())?;
                let size = raw.parse::<f64>().map_err(|_| CommandError::validation(
                    format!("download size must be a positive number, got {}", raw).as_str(),
                    Some("download_size_mb".to_string())))?;
                Ok(BookDto::digital(title.as_str(), author.as_str(), isbn.as_str(), size))
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'a> {
    fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book()?;
        self.catalog_service.add_book(&book).map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_add_book() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        let mut add_cmd = AddBookCommand::new(svc.as_mut());

        let res = add_cmd.execute(AddBookCommandRequest::new(" 1984 ", "Orwell", "111 ")).expect("should add book");
        assert_eq!("1984", res.book.title.as_str());
        assert_eq!("111", res.book.isbn.as_str());
        assert_eq!(None, res.book.download_size_mb());
        assert!(svc.find_book_by_isbn("111").is_ok());
    }

    #[test]
    fn test_should_run_add_ebook() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        let mut add_cmd = AddBookCommand::new(svc.as_mut());

        let res = add_cmd.execute(AddBookCommandRequest::ebook("Brave New World", "Huxley", "222", "5.0")).expect("should add ebook");
        assert_eq!(Some(5.0), res.book.download_size_mb());
    }

    #[test]
    fn test_should_reject_bad_requests() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        let mut add_cmd = AddBookCommand::new(svc.as_mut());

        assert!(matches!(add_cmd.execute(AddBookCommandRequest::new("", "Orwell", "111")), Err(CommandError::Validation { .. })));
        assert!(matches!(add_cmd.execute(AddBookCommandRequest::ebook("t", "a", "1", "big")), Err(CommandError::Validation { .. })));
        assert!(matches!(add_cmd.execute(AddBookCommandRequest::ebook("t", "a", "1", "0")), Err(CommandError::Validation { .. })));
        assert!(matches!(add_cmd.execute(AddBookCommandRequest::ebook("t", "a", "1", " ")), Err(CommandError::Validation { .. })));
        let _ = add_cmd.execute(AddBookCommandRequest::new("1984", "Orwell", "111")).expect("should add book");
        assert!(matches!(add_cmd.execute(AddBookCommandRequest::new("1984", "Orwell", "111")), Err(CommandError::DuplicateKey { .. })));
    }
}
