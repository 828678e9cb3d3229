//! Books repository: the in-memory catalog collection

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery, BookShort, NewBook},
};

/// Keyed, insertion-ordered storage for book records.
///
/// The whole collection sits behind a single lock; every operation is
/// synchronous and runs to completion, so no guard ever lives across an
/// `.await`. Clones share the same underlying collection. Callers always
/// receive copies of records, never live handles into it.
#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<IndexMap<String, Book>>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a freshly built record. Insertion order is preserved for
    /// later listings.
    pub fn insert(&self, book: Book) -> AppResult<Book> {
        let mut books = self.write()?;
        books.insert(book.id.clone(), book.clone());
        Ok(book)
    }

    /// List projections of the records matching `query`, in insertion
    /// order. Absent filters impose no constraint; present ones combine
    /// with AND.
    pub fn list(&self, query: &BookQuery) -> AppResult<Vec<BookShort>> {
        let needle = query.name.as_ref().map(|name| name.to_lowercase());
        let reading = query.reading_flag();
        let finished = query.finished_flag();

        let books = self.read()?;
        let result = books
            .values()
            .filter(|book| {
                needle
                    .as_ref()
                    .map_or(true, |n| book.name.to_lowercase().contains(n.as_str()))
            })
            .filter(|book| reading.map_or(true, |flag| book.reading == Some(flag)))
            .filter(|book| finished.map_or(true, |flag| book.finished == flag))
            .map(BookShort::from)
            .collect();
        Ok(result)
    }

    /// Fetch a clone of the record with the given id.
    pub fn get_by_id(&self, id: &str) -> AppResult<Book> {
        let books = self.read()?;
        books
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Replace the mutable fields of an existing record in place,
    /// recomputing its derived state. The record keeps its position in
    /// the collection.
    pub fn update(&self, id: &str, name: String, data: NewBook) -> AppResult<Book> {
        let mut books = self.write()?;
        let book = books
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound("Failed to update book. Id not found".to_string()))?;
        book.apply(name, data);
        Ok(book.clone())
    }

    /// Remove the record permanently. Remaining records keep their
    /// relative order; the id is never reused or archived.
    pub fn delete(&self, id: &str) -> AppResult<()> {
        let mut books = self.write()?;
        books
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Failed to delete book. Id not found".to_string()))
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, IndexMap<String, Book>>> {
        self.books
            .read()
            .map_err(|_| AppError::Internal("book collection lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, IndexMap<String, Book>>> {
        self.books
            .write()
            .map_err(|_| AppError::Internal("book collection lock poisoned".to_string()))
    }
}
