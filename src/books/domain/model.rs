use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{BookFormat, BookStatus};
use crate::utils::date::{opt_serializer, serializer};

// BookEntity is the stored form of a catalog record, keyed by isbn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
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

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str, format: BookFormat) -> Self {
        let now = Utc::now().naive_utc();
        Self {
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

    pub fn lend(&mut self) {
        self.book_status = BookStatus::Lent;
        self.lent_at = Some(Utc::now().naive_utc());
    }

    pub fn give_back(&mut self) {
        self.book_status = BookStatus::Available;
        self.lent_at = None;
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookEntity {
    fn status(&self) -> BookStatus {
        self.book_status
    }

    fn download_size_mb(&self) -> Option<f64> {
        self.format.download_size_mb()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::core::library::{BookFormat, BookStatus};

    #[test]
    fn test_should_build_books() {
        let book = BookEntity::new("1984", "Orwell", "111", BookFormat::Physical);
        assert_eq!("111", book.isbn.as_str());
        assert_eq!("1984", book.title.as_str());
        assert_eq!(0, book.version);
        assert!(book.is_available());
        assert!(!book.is_digital());
        assert_eq!(book.created_at, book.updated_at);
    }

    #[test]
    fn test_should_lend_and_give_back() {
        let mut book = BookEntity::new("Brave New World", "Huxley", "222", BookFormat::Digital { download_size_mb: 5.0 });
        book.lend();
        assert_eq!(BookStatus::Lent, book.status());
        assert!(book.lent_at.is_some());
        book.give_back();
        assert_eq!(BookStatus::Available, book.status());
        assert!(book.lent_at.is_none());
        assert_eq!(Some(5.0), book.download_size_mb());
    }
}
