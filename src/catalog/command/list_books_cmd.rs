use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::command::required_text;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> ListBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListBooksCommandRequest {
    pub author: Option<String>,
}

impl ListBooksCommandRequest {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_author(author: &str) -> Self {
        Self {
            author: Some(author.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

impl<'a> Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand<'a> {
    fn execute(&mut self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let books: Vec<BookDto> = match req.author {
            None => self.catalog_service.books().collect(),
            Some(author) => {
                let author = required_text("author", author.as_str())?;
                let matched: Vec<BookDto> = self.catalog_service.books_by_author(author.as_str()).collect();
                matched
            }
        };
        Ok(ListBooksCommandResponse::new(books))
    }
}
