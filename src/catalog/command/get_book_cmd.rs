use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::command::required_text;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> GetBookCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub isbn: String,
}

impl GetBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand<'a> {
    fn execute(&mut self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        let isbn = required_text("isbn", req.isbn.as_str())?;
        self.catalog_service.find_book_by_isbn(isbn.as_str())
            .map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_get_book() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        let book = svc.add_book(&BookDto::physical("1984", "Orwell", "111")).expect("should add book");

        let mut get_cmd = GetBookCommand::new(svc.as_ref());
        let res = get_cmd.execute(GetBookCommandRequest::new(" 111 ")).expect("should get book");
        assert_eq!(book, res.book);
        assert!(matches!(get_cmd.execute(GetBookCommandRequest::new("222")), Err(CommandError::NotFound { .. })));
        assert!(matches!(get_cmd.execute(GetBookCommandRequest::new("")), Err(CommandError::Validation { .. })));
    }
}
