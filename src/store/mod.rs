//! Document store
//!
//! In-memory catalogue of manuals, their per-page OCR text and the synonym
//! table, loaded from a JSONL file at startup. The store is constructed once
//! and handed to the HTTP layer; the search engine only ever receives pages
//! that were already fetched from it.

mod record;

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::search::default_synonym_entries;
use crate::types::{Document, DocumentPage, StoreError, StoreResult, SynonymEntry};

pub use record::{read_records, write_records, StoreRecord};

/// Documents, pages and synonyms backed by a JSONL file
#[derive(Debug, Default)]
pub struct DocumentStore {
    file_path: PathBuf,
    documents: Vec<Document>,
    /// document id → page number → page
    pages: HashMap<String, BTreeMap<u32, DocumentPage>>,
    synonyms: Vec<SynonymEntry>,
}

impl DocumentStore {
    /// Open the store at `path`, creating an empty one if the file does not exist.
    ///
    /// Default synonym terms that the file does not define are added.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let file_path = path.into();
        let mut store = Self {
            file_path,
            ..Self::default()
        };

        for record in read_records(&store.file_path)? {
            store.apply(record);
        }
        let seeded = store.seed_default_synonyms();

        tracing::info!(
            "Loaded {} documents, {} pages, {} synonym entries ({} defaults) from {}",
            store.documents.len(),
            store.page_count(),
            store.synonyms.len(),
            seeded,
            store.file_path.display()
        );

        Ok(store)
    }

    /// Create an empty store that persists to `path`, without touching the file
    pub fn in_memory(path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: path.into(),
            ..Self::default()
        }
    }

    fn apply(&mut self, record: StoreRecord) {
        match record {
            StoreRecord::Document(document) => {
                match self.documents.iter().position(|d| d.id == document.id) {
                    Some(index) => self.documents[index] = document,
                    None => self.documents.push(document),
                }
            }
            StoreRecord::Page(page) => {
                self.pages
                    .entry(page.document_id.clone())
                    .or_default()
                    .insert(page.page_number, page);
            }
            StoreRecord::Synonym(entry) => self.synonyms.push(entry),
        }
    }

    /// Add built-in synonym entries whose term is not yet present; returns how many were added
    pub fn seed_default_synonyms(&mut self) -> usize {
        let mut added = 0;
        for entry in default_synonym_entries() {
            if !self.synonyms.iter().any(|e| e.term == entry.term) {
                self.synonyms.push(entry);
                added += 1;
            }
        }
        added
    }

    /// All documents, most recently uploaded first
    pub fn documents(&self) -> Vec<&Document> {
        let mut documents: Vec<&Document> = self.documents.iter().collect();
        documents.sort_by(|a, b| b.upload_date.cmp(&a.upload_date));
        documents
    }

    pub fn get_document(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// Pages of a document in ascending page number
    pub fn document_pages(&self, document_id: &str) -> Vec<&DocumentPage> {
        self.pages
            .get(document_id)
            .map(|pages| pages.values().collect())
            .unwrap_or_default()
    }

    /// Owned copy of a document's pages, for searching outside the store lock
    pub fn page_snapshot(&self, document_id: &str) -> Vec<DocumentPage> {
        self.document_pages(document_id).into_iter().cloned().collect()
    }

    pub fn document_page(&self, document_id: &str, page_number: u32) -> Option<&DocumentPage> {
        self.pages.get(document_id)?.get(&page_number)
    }

    pub fn synonyms(&self) -> &[SynonymEntry] {
        &self.synonyms
    }

    /// Total pages across all documents
    pub fn page_count(&self) -> usize {
        self.pages.values().map(BTreeMap::len).sum()
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Add a new document and persist.
    ///
    /// The document is kept only if the write succeeds.
    pub fn insert_document(&mut self, document: Document) -> StoreResult<()> {
        if self.get_document(&document.id).is_some() {
            return Err(StoreError::DocumentExists(document.id));
        }

        tracing::info!("Adding document {} ({})", document.id, document.original_name);
        self.documents.push(document);
        if let Err(e) = self.persist() {
            self.documents.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Insert or replace a page of an existing document and persist.
    ///
    /// On a failed write the previous page (or its absence) is restored.
    pub fn insert_page(&mut self, page: DocumentPage) -> StoreResult<()> {
        if self.get_document(&page.document_id).is_none() {
            return Err(StoreError::DocumentNotFound(page.document_id));
        }

        tracing::debug!("Storing page {} of {}", page.page_number, page.document_id);
        let document_id = page.document_id.clone();
        let page_number = page.page_number;
        let previous = self
            .pages
            .entry(document_id.clone())
            .or_default()
            .insert(page_number, page);

        if let Err(e) = self.persist() {
            if let Some(pages) = self.pages.get_mut(&document_id) {
                match previous {
                    Some(previous) => {
                        pages.insert(page_number, previous);
                    }
                    None => {
                        pages.remove(&page_number);
                    }
                }
                if pages.is_empty() {
                    self.pages.remove(&document_id);
                }
            }
            return Err(e);
        }
        Ok(())
    }

    /// Write the whole store to its file
    pub fn persist(&self) -> StoreResult<()> {
        let records: Vec<StoreRecord> = self
            .documents
            .iter()
            .cloned()
            .map(StoreRecord::Document)
            .chain(
                self.pages
                    .values()
                    .flat_map(BTreeMap::values)
                    .cloned()
                    .map(StoreRecord::Page),
            )
            .chain(self.synonyms.iter().cloned().map(StoreRecord::Synonym))
            .collect();

        write_records(&self.file_path, &records)
    }
}
