pub mod add_book_cmd;
pub mod get_book_cmd;
pub mod lend_book_cmd;
pub mod list_books_cmd;
pub mod remove_book_cmd;
pub mod return_book_cmd;

use crate::core::command::CommandError;

// trims raw input and rejects blanks
pub(crate) fn required_text(field: &str, value: &str) -> Result<String, CommandError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CommandError::validation(format!("{} is required", field).as_str(), Some(field.to_string())));
    }
    Ok(trimmed.to_string())
}
