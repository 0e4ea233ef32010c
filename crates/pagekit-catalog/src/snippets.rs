//! Snippet registry collaborator.
//!
//! The snippet catalogs (cards, tables, heroes, ...) are reference material;
//! synthesis only reports how many snippets are indexed alongside the files
//! it generates.

use indexmap::IndexMap;

use crate::error::{CatalogError, Result};

/// A reusable markup snippet in the neutral dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub id: String,
    pub category: String,
    pub tags: Vec<String>,
    pub markup: String,
}

impl Snippet {
    /// Create a snippet without tags.
    pub fn new(id: impl Into<String>, category: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            tags: Vec::new(),
            markup: markup.into(),
        }
    }

    /// Add a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

/// Registry the synthesizer queries for corpus metadata.
pub trait SnippetRegistry {
    /// Build the index. Calling this more than once has no further effect.
    fn initialize(&mut self);

    /// Number of indexed snippets.
    fn len(&self) -> usize;

    /// Check if no snippets are indexed.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Snippet registry backed by an insertion-ordered map.
///
/// Snippets handed to [`InMemorySnippetRegistry::with_snippets`] are only
/// indexed once [`SnippetRegistry::initialize`] runs.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnippetRegistry {
    pending: Vec<Snippet>,
    index: IndexMap<String, Snippet>,
    initialized: bool,
}

impl InMemorySnippetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry that indexes `snippets` on initialization.
    /// Later snippets replace earlier ones with the same id.
    pub fn with_snippets(snippets: impl IntoIterator<Item = Snippet>) -> Self {
        Self {
            pending: snippets.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Index a single snippet immediately.
    pub fn register(&mut self, snippet: Snippet) -> Result<()> {
        if self.index.contains_key(&snippet.id) {
            return Err(CatalogError::DuplicateSnippet(snippet.id));
        }
        self.index.insert(snippet.id.clone(), snippet);
        Ok(())
    }

    /// Whether [`SnippetRegistry::initialize`] has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Get a snippet by id.
    pub fn get(&self, id: &str) -> Option<&Snippet> {
        self.index.get(id)
    }

    /// Snippets in a category, in registration order.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Snippet> + 'a {
        self.index.values().filter(move |s| s.category == category)
    }

    /// Snippets carrying a tag, in registration order.
    pub fn by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Snippet> + 'a {
        self.index
            .values()
            .filter(move |s| s.tags.iter().any(|t| t == tag))
    }
}

impl SnippetRegistry for InMemorySnippetRegistry {
    fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        for snippet in self.pending.drain(..) {
            self.index.insert(snippet.id.clone(), snippet);
        }
        self.initialized = true;
    }

    fn len(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Snippet> {
        vec![
            Snippet::new("hero-split", "hero", "<section></section>").with_tag("saas"),
            Snippet::new("card-stat", "card", "<div></div>").with_tag("dashboard"),
            Snippet::new("hero-centered", "hero", "<section></section>").with_tag("saas"),
        ]
    }

    #[test]
    fn test_initialize_indexes_pending() {
        let mut registry = InMemorySnippetRegistry::with_snippets(sample());
        assert!(registry.is_empty());
        registry.initialize();
        assert!(registry.is_initialized());
        assert_eq!(registry.len(), 3);
        registry.initialize();
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_lookup_by_category_and_tag() {
        let mut registry = InMemorySnippetRegistry::with_snippets(sample());
        registry.initialize();
        let heroes: Vec<_> = registry.by_category("hero").map(|s| s.id.as_str()).collect();
        assert_eq!(heroes, vec!["hero-split", "hero-centered"]);
        assert_eq!(registry.by_tag("dashboard").count(), 1);
        assert!(registry.get("card-stat").is_some());
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = InMemorySnippetRegistry::new();
        registry
            .register(Snippet::new("nav", "navbar", "<nav></nav>"))
            .unwrap();
        assert_eq!(
            registry.register(Snippet::new("nav", "navbar", "<nav></nav>")),
            Err(CatalogError::DuplicateSnippet("nav".into()))
        );
    }
}
