use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::command::required_text;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct LendBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> LendBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LendBookCommandRequest {
    pub isbn: String,
}

impl LendBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LendBookCommandResponse {
    pub book: BookDto,
}

impl LendBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<LendBookCommandRequest, LendBookCommandResponse> for LendBookCommand<'a> {
    fn execute(&mut self, req: LendBookCommandRequest) -> Result<LendBookCommandResponse, CommandError> {
        let isbn = required_text("isbn", req.isbn.as_str())?;
        self.catalog_service.lend_book(isbn.as_str())
            .map_err(CommandError::from).map(LendBookCommandResponse::new)
    }
}
