//! Catalog service: validation and business rules for books

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery, BookShort, NewBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate and add a new book to the catalog.
    ///
    /// Validation happens before the collection is touched: a rejected
    /// payload leaves no trace.
    pub fn add_book(&self, data: NewBook) -> AppResult<Book> {
        let name = match data.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                return Err(AppError::Validation(
                    "Failed to add book. Please provide a book name".to_string(),
                ))
            }
        };
        if data.read_page_exceeds_count() {
            return Err(AppError::Validation(
                "Failed to add book. readPage must not exceed pageCount".to_string(),
            ));
        }

        let book = Book::new(name, data);
        self.repository.books.insert(book)
    }

    /// List books matching the given filters
    pub fn list_books(&self, query: &BookQuery) -> AppResult<Vec<BookShort>> {
        self.repository.books.list(query)
    }

    /// Get a book by id with full details
    pub fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository.books.get_by_id(id)
    }

    /// Validate and replace the fields of an existing book.
    ///
    /// Payload validation runs before the id is looked up, so an invalid
    /// payload for an unknown id reports the validation failure.
    pub fn update_book(&self, id: &str, data: NewBook) -> AppResult<Book> {
        let name = match data.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                return Err(AppError::Validation(
                    "Failed to update book. Please provide a book name".to_string(),
                ))
            }
        };
        if data.read_page_exceeds_count() {
            return Err(AppError::Validation(
                "Failed to update book. readPage must not exceed pageCount".to_string(),
            ));
        }

        self.repository.books.update(id, name, data)
    }

    /// Delete a book by id
    pub fn delete_book(&self, id: &str) -> AppResult<()> {
        self.repository.books.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> CatalogService {
        CatalogService::new(Repository::new())
    }

    fn draft(name: Option<&str>, page_count: i32, read_page: i32) -> NewBook {
        NewBook {
            name: name.map(str::to_string),
            page_count: Some(page_count),
            read_page: Some(read_page),
            ..NewBook::default()
        }
    }

    #[test]
    fn test_add_requires_a_name() {
        let service = service();

        let err = service.add_book(draft(None, 100, 0)).unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ref message)
                if message == "Failed to add book. Please provide a book name"
        ));

        // An empty name counts as missing.
        let err = service.add_book(draft(Some(""), 100, 0)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_add_rejects_read_page_beyond_page_count() {
        let service = service();
        let err = service.add_book(draft(Some("Dune"), 100, 101)).unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ref message)
                if message == "Failed to add book. readPage must not exceed pageCount"
        ));
    }

    #[test]
    fn test_add_reports_missing_name_before_page_counters() {
        let service = service();
        let err = service.add_book(draft(None, 100, 999)).unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ref message) if message.contains("book name")
        ));
    }

    #[test]
    fn test_rejected_add_leaves_no_trace() {
        let service = service();
        let _ = service.add_book(draft(Some(""), 100, 0));
        assert!(service.list_books(&BookQuery::default()).unwrap().is_empty());
    }

    #[test]
    fn test_add_then_get_roundtrip() {
        let service = service();
        let created = service.add_book(draft(Some("Dune"), 500, 500)).unwrap();

        let fetched = service.get_book(&created.id).unwrap();
        assert_eq!(fetched.name, "Dune");
        assert!(fetched.finished);
    }

    #[test]
    fn test_update_validates_payload_before_looking_up_the_id() {
        let service = service();

        // Unknown id with an invalid payload reports the payload problem.
        let err = service.update_book("missing", draft(None, 100, 0)).unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ref message)
                if message == "Failed to update book. Please provide a book name"
        ));

        let err = service
            .update_book("missing", draft(Some("Dune"), 100, 101))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ref message)
                if message == "Failed to update book. readPage must not exceed pageCount"
        ));

        // Only a valid payload reaches the existence check.
        let err = service
            .update_book("missing", draft(Some("Dune"), 100, 10))
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_update_recomputes_finished() {
        let service = service();
        let created = service.add_book(draft(Some("Dune"), 500, 500)).unwrap();
        assert!(created.finished);

        let updated = service
            .update_book(&created.id, draft(Some("Dune"), 500, 100))
            .unwrap();
        assert!(!updated.finished);
        assert_eq!(updated.id, created.id);
    }

    #[test]
    fn test_delete_unknown_id_is_not_found() {
        let service = service();
        let err = service.delete_book("missing").unwrap_err();
        assert!(matches!(
            err,
            AppError::NotFound(ref message)
                if message == "Failed to delete book. Id not found"
        ));
    }
}
