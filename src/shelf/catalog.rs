//! # Catalog Store
//!
//! An append-only, insertion-ordered list of books. Every add rewrites the
//! whole collection; search is a linear, case-insensitive substring scan over
//! title and author.

use crate::config::ShelfConfig;
use crate::error::Result;
use crate::model::Book;
use crate::store::{load_or_empty, StorageBackend};
use tracing::info;

pub const BOOKS_COLLECTION: &str = "books";

pub struct CatalogStore<B: StorageBackend> {
    backend: B,
    books: Vec<Book>,
}

impl<B: StorageBackend> CatalogStore<B> {
    pub fn open(backend: B) -> Result<Self> {
        Self::open_with_config(backend, &ShelfConfig::default())
    }

    pub fn open_with_config(backend: B, config: &ShelfConfig) -> Result<Self> {
        let books = load_or_empty(&backend, BOOKS_COLLECTION, config)?;
        Ok(Self { backend, books })
    }

    /// Append a book and persist. Duplicates are allowed.
    pub fn add_book(&mut self, title: &str, author: &str, year_of_publication: u32) -> Result<()> {
        self.books.push(Book::new(title, author, year_of_publication));
        if let Err(e) = self.persist() {
            self.books.pop();
            return Err(e);
        }
        info!(title, author, year_of_publication, "added book");
        Ok(())
    }

    pub fn list_all(&self) -> &[Book] {
        &self.books
    }

    /// Books whose title or author contains `query`, ignoring case.
    /// An empty query matches every book.
    pub fn search(&self, query: &str) -> Vec<&Book> {
        let needle = query.to_lowercase();
        self.books
            .iter()
            .filter(|b| b.matches_lowercase(&needle))
            .collect()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    fn persist(&self) -> Result<()> {
        self.backend.save_collection(BOOKS_COLLECTION, &self.books)
    }
}
