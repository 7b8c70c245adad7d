use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{BookFormat, BookStatus, LibraryError, LibraryResult};
use crate::utils::date::{opt_serializer, serializer};

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub format: BookFormat,
    pub book_status: BookStatus,
    #[serde(with = "opt_serializer")]
    pub lent_at: Option<NaiveDateTime>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookDto {
    pub fn new(title: &str, author: &str, isbn: &str, format: BookFormat) -> BookDto {
        let now = Utc::now().naive_utc();
        BookDto {
            isbn: isbn.to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            format,
            book_status: BookStatus::Available,
            lent_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn physical(title: &str, author: &str, isbn: &str) -> BookDto {
        Self::new(title, author, isbn, BookFormat::Physical)
    }

    pub fn digital(title: &str, author: &str, isbn: &str, download_size_mb: f64) -> BookDto {
        Self::new(title, author, isbn, BookFormat::Digital { download_size_mb })
    }

    /// Checks the field rules a record must satisfy before it enters the catalog:
    /// title, author and isbn must hold non-blank text, the isbn must carry no
    /// surrounding whitespace and a digital download size must be a positive
    /// finite number.
    pub fn validate(&self) -> LibraryResult<()> {
        for (field, value) in [("title", &self.title), ("author", &self.author), ("isbn", &self.isbn)] {
            if value.trim().is_empty() {
                return Err(LibraryError::validation(
                    format!("{} is required", field).as_str(), Some(field.to_string())));
            }
        }
        if self.isbn.trim() != self.isbn {
            return Err(LibraryError::validation(
                "isbn must not have surrounding whitespace", Some("isbn".to_string())));
        }
        if let Some(size) = self.format.download_size_mb() {
            if !size.is_finite() || size <= 0.0 {
                return Err(LibraryError::validation(
                    "download size must be a positive number", Some("download_size_mb".to_string())));
            }
        }
        Ok(())
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookDto {
    fn status(&self) -> BookStatus {
        self.book_status
    }

    fn download_size_mb(&self) -> Option<f64> {
        self.format.download_size_mb()
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "'{}' by {} (ISBN: {}) - {}", self.title, self.author, self.isbn, self.book_status)?;
        if let Some(size) = self.download_size_mb() {
            write!(f, " - {:?} MB", size)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::dto::BookDto;
    use crate::core::library::{BookStatus, LibraryError};

    #[test]
    fn test_should_build_books() {
        let book = BookDto::physical("1984", "Orwell", "111");
        assert_eq!("111", book.isbn.as_str());
        assert_eq!("Orwell", book.author.as_str());
        assert_eq!(BookStatus::Available, book.book_status);
        assert_eq!(None, book.download_size_mb());

        let ebook = BookDto::digital("Brave New World", "Huxley", "222", 5.0);
        assert_eq!(Some(5.0), ebook.download_size_mb());
        assert!(ebook.is_available());
    }

    #[test]
    fn test_should_validate_books() {
        assert!(BookDto::physical("1984", "Orwell", "111").validate().is_ok());
        assert!(BookDto::digital("Brave New World", "Huxley", "222", 0.5).validate().is_ok());

        let err = BookDto::physical("  ", "Orwell", "111").validate().expect_err("blank title");
        assert_eq!(LibraryError::validation("title is required", Some("title".to_string())), err);
        assert!(matches!(BookDto::physical("1984", "", "111").validate(), Err(LibraryError::Validation { .. })));
        assert!(matches!(BookDto::physical("1984", "Orwell", "").validate(), Err(LibraryError::Validation { .. })));
        assert!(matches!(BookDto::physical("1984", "Orwell", " 111 ").validate(), Err(LibraryError::Validation { .. })));
    }

    #[test]
    fn test_should_stamp_new_books_once() {
        let book = BookDto::physical("1984", "Orwell", "111");
        assert_eq!(book.created_at, book.updated_at);
    }

    #[test]
    fn test_should_reject_bad_download_size() {
        for size in [0.0, -1.5, f64::NAN, f64::INFINITY] {
            let res = BookDto::digital("Brave New World", "Huxley", "222", size).validate();
            assert!(matches!(res, Err(LibraryError::Validation { .. })), "size {} accepted", size);
        }
    }

    #[test]
    fn test_should_render_books() {
        let book = BookDto::physical("1984", "Orwell", "111");
        assert_eq!("'1984' by Orwell (ISBN: 111) - Available", book.to_string());

        let mut ebook = BookDto::digital("Brave New World", "Huxley", "222", 5.0);
        ebook.book_status = BookStatus::Lent;
        assert_eq!("'Brave New World' by Huxley (ISBN: 222) - Lent - 5.0 MB", ebook.to_string());
    }
}
