//! Substring search over the document corpus.

use std::collections::HashSet;

use palliate_core::config::KnowledgeConfig;
use palliate_core::normalize;
use palliate_core::types::Document;
use tracing::{debug, info};

use crate::builtin;
use crate::error::CorpusError;

/// Separator placed between tags before matching.
const TAG_SEPARATOR: &str = " ";

/// A document with its match keys normalized once, at load time.
#[derive(Debug, Clone)]
struct Entry {
    document: Document,
    title_key: String,
    tags_key: String,
}

impl Entry {
    fn new(document: Document) -> Self {
        let title_key = normalize(&document.title);
        let tags_key = normalize(&document.tags.join(TAG_SEPARATOR));
        Self {
            document,
            title_key,
            tags_key,
        }
    }

    fn matches(&self, normalized_query: &str) -> bool {
        normalized_query.is_empty()
            || self.title_key.contains(normalized_query)
            || self.tags_key.contains(normalized_query)
    }
}

// =============================================================================
// DocumentIndex
// =============================================================================

/// Immutable, ordered document corpus.
#[derive(Debug, Clone)]
pub struct DocumentIndex {
    entries: Vec<Entry>,
    store_url: String,
}

impl DocumentIndex {
    /// Build an index over `documents`, kept in the given order.
    ///
    /// `store_url` is where documents without their own URL are opened.
    pub fn new(documents: Vec<Document>, store_url: impl Into<String>) -> Result<Self, CorpusError> {
        let mut seen = HashSet::with_capacity(documents.len());
        for doc in &documents {
            if !seen.insert(doc.id) {
                return Err(CorpusError::DuplicateId(doc.id));
            }
        }

        let entries: Vec<Entry> = documents.into_iter().map(Entry::new).collect();
        info!(documents = entries.len(), "Document index built");
        Ok(Self {
            entries,
            store_url: store_url.into(),
        })
    }

    /// Build from `[knowledge]` config, using the built-in corpus when the
    /// config lists no documents.
    pub fn from_config(config: &KnowledgeConfig) -> Result<Self, CorpusError> {
        let documents = if config.documents.is_empty() {
            builtin::documents()
        } else {
            config.documents.clone()
        };
        Self::new(documents, config.document_store_url.clone())
    }

    /// Documents whose title or joined tags contain `query`, in corpus order.
    ///
    /// The empty query matches every document. The returned iterator is
    /// lazy and can be cloned to restart it.
    pub fn search(&self, query: &str) -> Matches<'_> {
        debug!(query, "Document search");
        Matches {
            entries: self.entries.iter(),
            query: normalize(query),
        }
    }

    pub fn get(&self, id: u32) -> Option<&Document> {
        self.entries
            .iter()
            .map(|e| &e.document)
            .find(|d| d.id == id)
    }

    /// All documents, in corpus order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> + '_ {
        self.entries.iter().map(|e| &e.document)
    }

    /// Where `document` can be read.
    pub fn open_url<'a>(&'a self, document: &'a Document) -> &'a str {
        document.url.as_deref().unwrap_or(&self.store_url)
    }

    pub fn store_url(&self) -> &str {
        &self.store_url
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Matches
// =============================================================================

/// Lazy iterator over the documents matching one query.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    entries: std::slice::Iter<'a, Entry>,
    query: String,
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a Document;

    fn next(&mut self) -> Option<Self::Item> {
        let query = self.query.as_str();
        self.entries
            .by_ref()
            .find(|entry| entry.matches(query))
            .map(|entry| &entry.document)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.entries.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORE: &str = "https://drive.example.org/folder";

    fn index() -> DocumentIndex {
        DocumentIndex::new(builtin::documents(), STORE).unwrap()
    }

    fn ids(matches: Matches<'_>) -> Vec<u32> {
        matches.map(|d| d.id).collect()
    }

    // ---- Core policy ----

    #[test]
    fn test_empty_query_returns_full_corpus_in_order() {
        assert_eq!(ids(index().search("")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_tag_match() {
        assert_eq!(ids(index().search("dyspnea")), vec![2]);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(index().search("chemotherapy").next().is_none());
    }

    #[test]
    fn test_tag_substring_matches() {
        assert_eq!(ids(index().search("opi")), vec![1]);
    }

    #[test]
    fn test_tag_superstring_does_not_match() {
        assert!(ids(index().search("opioids")).is_empty());
    }

    #[test]
    fn test_title_match_thai() {
        assert_eq!(ids(index().search("หายใจ")), vec![2]);
        assert_eq!(ids(index().search("ผู้ป่วยติดเตียง")), vec![3]);
    }

    #[test]
    fn test_case_insensitive_ascii() {
        assert_eq!(ids(index().search("dnr")), vec![4]);
        assert_eq!(ids(index().search("ADVANCE care")), vec![4]);
        assert_eq!(ids(index().search("COMFORT")), vec![3]);
    }

    #[test]
    fn test_multiple_matches_keep_corpus_order() {
        // "การดูแล" opens the titles of documents 2 and 3.
        assert_eq!(ids(index().search("การดูแล")), vec![2, 3]);
    }

    #[test]
    fn test_tags_joined_with_single_space() {
        assert_eq!(ids(index().search("ยาแก้ปวด opi")), vec![1]);
        assert!(ids(index().search("ยาแก้ปวดopioid")).is_empty());
    }

    #[test]
    fn test_whitespace_query_not_trimmed() {
        // Every tag pair is joined by a space, so " " matches all documents.
        assert_eq!(ids(index().search(" ")), vec![1, 2, 3, 4]);
        assert!(ids(index().search(" dyspnea ")).is_empty());
    }

    #[test]
    fn test_summary_not_searched() {
        assert!(ids(index().search("WHO")).is_empty());
    }

    // ---- Purity / laziness ----

    #[test]
    fn test_search_is_idempotent() {
        let idx = index();
        assert_eq!(ids(idx.search("การดูแล")), ids(idx.search("การดูแล")));
    }

    #[test]
    fn test_matches_restart_via_clone() {
        let idx = index();
        let matches = idx.search("");
        let restarted = matches.clone();
        assert_eq!(ids(matches), ids(restarted));
    }

    #[test]
    fn test_matches_size_hint_bounded_by_corpus() {
        let idx = index();
        let mut matches = idx.search("dyspnea");
        assert_eq!(matches.size_hint(), (0, Some(4)));
        matches.next();
        assert_eq!(matches.size_hint(), (0, Some(2)));
    }

    // ---- Construction ----

    #[test]
    fn test_duplicate_id_rejected() {
        let docs = vec![
            Document::new(1, "a", &[], ""),
            Document::new(2, "b", &[], ""),
            Document::new(1, "c", &[], ""),
        ];
        let err = DocumentIndex::new(docs, STORE).unwrap_err();
        assert!(matches!(err, CorpusError::DuplicateId(1)));
    }

    #[test]
    fn test_empty_corpus_allowed() {
        let idx = DocumentIndex::new(Vec::new(), STORE).unwrap();
        assert!(idx.is_empty());
        assert!(idx.search("").next().is_none());
    }

    #[test]
    fn test_from_default_config_uses_builtin_corpus() {
        let idx = DocumentIndex::from_config(&KnowledgeConfig::default()).unwrap();
        assert_eq!(idx.len(), 4);
        assert!(idx.store_url().starts_with("https://drive.google.com/"));
    }

    #[test]
    fn test_from_config_custom_documents() {
        let config = KnowledgeConfig {
            document_store_url: STORE.to_string(),
            documents: vec![Document::new(10, "Nausea at home", &["nausea"], "small meals")],
        };
        let idx = DocumentIndex::from_config(&config).unwrap();
        assert_eq!(idx.len(), 1);
        assert_eq!(ids(idx.search("NAUSEA")), vec![10]);
    }

    // ---- Lookup / links ----

    #[test]
    fn test_get_by_id() {
        let idx = index();
        assert_eq!(idx.get(3).unwrap().title, "การดูแลช่องปากผู้ป่วยติดเตียง");
        assert!(idx.get(99).is_none());
    }

    #[test]
    fn test_documents_in_order() {
        let idx = index();
        let ids: Vec<u32> = idx.documents().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_open_url_prefers_document_url() {
        let docs = vec![
            Document::new(1, "a", &[], "").with_url("https://example.org/a.pdf"),
            Document::new(2, "b", &[], ""),
        ];
        let idx = DocumentIndex::new(docs, STORE).unwrap();
        let a = idx.get(1).unwrap();
        let b = idx.get(2).unwrap();
        assert_eq!(idx.open_url(a), "https://example.org/a.pdf");
        assert_eq!(idx.open_url(b), STORE);
    }

    #[test]
    fn test_index_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DocumentIndex>();
    }
}
