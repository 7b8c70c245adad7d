use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

pub mod model;

pub trait Book: Identifiable {
    fn status(&self) -> BookStatus;
    fn download_size_mb(&self) -> Option<f64>;

    fn is_available(&self) -> bool {
        self.status().is_available()
    }

    fn is_digital(&self) -> bool {
        self.download_size_mb().is_some()
    }
}
