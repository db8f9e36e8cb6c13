//! Algorithm pages and the catalog that groups them
//!
//! A page is one algorithm with up to four snippet variants. Pages are
//! described in YAML (`PageSpec`) and validated into `AlgorithmPage` before
//! anything can display them, so every page that reaches the UI has a
//! non-empty content map containing its default language.

use super::language::LanguageTag;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Catalog compiled into the binary
const BUILTIN_CATALOG: &str = include_str!("../../catalog/builtin.yaml");

// ═══════════════════════════════════════════════════════════════════════════════
// Content Map
// ═══════════════════════════════════════════════════════════════════════════════

/// Snippet text keyed by language, iterated in tab order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentMap(BTreeMap<LanguageTag, String>);

impl ContentMap {
    pub fn new(snippets: BTreeMap<LanguageTag, String>) -> Self {
        Self(snippets)
    }

    pub fn get(&self, language: LanguageTag) -> Option<&str> {
        self.0.get(&language).map(String::as_str)
    }

    pub fn contains(&self, language: LanguageTag) -> bool {
        self.0.contains_key(&language)
    }

    /// Languages present on this page, in tab order
    pub fn languages(&self) -> Vec<LanguageTag> {
        self.0.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Catalog File Format
// ═══════════════════════════════════════════════════════════════════════════════

/// Complexity summary shown in the page info dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complexity {
    pub time: String,
    pub space: String,
    #[serde(default)]
    pub best_case: Option<String>,
    #[serde(default)]
    pub stable: Option<String>,
}

/// A page as written in a catalog file
#[derive(Debug, Clone, Deserialize)]
pub struct PageSpec {
    pub slug: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub file_stem: Option<String>,
    #[serde(default)]
    pub default_language: Option<LanguageTag>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub complexity: Option<Complexity>,
    pub snippets: BTreeMap<LanguageTag, String>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    pages: Vec<PageSpec>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Algorithm Page
// ═══════════════════════════════════════════════════════════════════════════════

/// A validated page: everything the generic page view needs
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmPage {
    pub slug: String,
    pub title: String,
    /// Category listing the page belongs to (its back link)
    pub category: String,
    pub file_stem: String,
    pub default_language: LanguageTag,
    pub description: Option<String>,
    pub complexity: Option<Complexity>,
    pub content: ContentMap,
}

impl AlgorithmPage {
    /// Validate a page spec
    ///
    /// An explicit `default_language` must have a snippet. Without one the
    /// `fallback` is used when present, otherwise the first tab.
    pub fn from_spec(spec: PageSpec, fallback: LanguageTag) -> Result<Self, CatalogError> {
        let content = ContentMap::new(spec.snippets);
        let first = match content.languages().first() {
            Some(first) => *first,
            None => return Err(CatalogError::EmptyContent { slug: spec.slug }),
        };

        let default_language = match spec.default_language {
            Some(language) if content.contains(language) => language,
            Some(language) => {
                return Err(CatalogError::MissingDefault {
                    slug: spec.slug,
                    language,
                })
            }
            None if content.contains(fallback) => fallback,
            None => first,
        };

        let file_stem = spec
            .file_stem
            .filter(|stem| !stem.trim().is_empty())
            .unwrap_or_else(|| spec.slug.replace('-', "_"));

        Ok(Self {
            slug: spec.slug,
            title: spec.title,
            category: spec.category,
            file_stem,
            default_language,
            description: spec.description,
            complexity: spec.complexity,
            content,
        })
    }

    /// Label for navigating back to the category listing
    pub fn back_link(&self) -> String {
        format!("← Back to {}", self.category)
    }

    pub fn file_name(&self, language: LanguageTag) -> String {
        language.file_name(&self.file_stem)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Catalog
// ═══════════════════════════════════════════════════════════════════════════════

/// Ordered collection of pages
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pages: Vec<AlgorithmPage>,
}

impl Catalog {
    /// Load the catalog compiled into the binary
    pub fn builtin(fallback: LanguageTag) -> Result<Self, CatalogError> {
        let pages = Self::parse(BUILTIN_CATALOG, "built-in catalog", fallback)?;
        if pages.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { pages })
    }

    pub fn from_pages(pages: Vec<AlgorithmPage>) -> Self {
        Self { pages }
    }

    /// Parse and validate every page in one YAML document
    pub fn parse(
        yaml: &str,
        origin: &str,
        fallback: LanguageTag,
    ) -> Result<Vec<AlgorithmPage>, CatalogError> {
        let file: CatalogFile =
            serde_yaml::from_str(yaml).map_err(|source| CatalogError::Parse {
                origin: origin.to_string(),
                source,
            })?;

        let mut seen = HashSet::new();
        let mut pages = Vec::with_capacity(file.pages.len());
        for spec in file.pages {
            if !seen.insert(spec.slug.clone()) {
                return Err(CatalogError::DuplicateSlug {
                    slug: spec.slug,
                    origin: origin.to_string(),
                });
            }
            pages.push(AlgorithmPage::from_spec(spec, fallback)?);
        }
        Ok(pages)
    }

    /// Add pages, replacing existing pages that share a slug
    ///
    /// Returns the number of pages that replaced an existing one.
    pub fn merge(&mut self, pages: Vec<AlgorithmPage>) -> usize {
        let mut replaced = 0;
        for page in pages {
            match self.pages.iter_mut().find(|p| p.slug == page.slug) {
                Some(existing) => {
                    *existing = page;
                    replaced += 1;
                }
                None => self.pages.push(page),
            }
        }
        replaced
    }

    pub fn pages(&self) -> &[AlgorithmPage] {
        &self.pages
    }

    pub fn get(&self, slug: &str) -> Option<&AlgorithmPage> {
        self.pages.iter().find(|p| p.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Categories in order of first appearance
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for page in &self.pages {
            if !categories.contains(&page.category.as_str()) {
                categories.push(&page.category);
            }
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(slug: &str, snippets: &[(LanguageTag, &str)]) -> PageSpec {
        PageSpec {
            slug: slug.to_string(),
            title: "Bubble Sort".to_string(),
            category: "Sorting Algorithms".to_string(),
            file_stem: None,
            default_language: None,
            description: None,
            complexity: None,
            snippets: snippets
                .iter()
                .map(|(lang, code)| (*lang, code.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin(LanguageTag::Cpp).expect("built-in catalog should load");
        assert!(!catalog.is_empty());

        for page in catalog.pages() {
            assert_eq!(page.default_language, LanguageTag::Cpp, "page {}", page.slug);
            assert_eq!(page.content.languages(), LanguageTag::all(), "page {}", page.slug);
            for language in page.content.languages() {
                let code = page.content.get(language).unwrap();
                assert!(!code.trim().is_empty(), "{} {} is empty", page.slug, language);
            }
        }
    }

    #[test]
    fn test_builtin_slugs_are_unique() {
        let catalog = Catalog::builtin(LanguageTag::Cpp).unwrap();
        let slugs: HashSet<&str> = catalog.pages().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs.len(), catalog.len());
    }

    #[test]
    fn test_builtin_covers_each_category_in_depth() {
        let catalog = Catalog::builtin(LanguageTag::Cpp).unwrap();
        assert!(catalog.len() >= 24);

        let categories = catalog.categories();
        assert_eq!(categories.len(), 7);
        for category in categories {
            let count = catalog.pages().iter().filter(|p| p.category == category).count();
            assert!(count >= 2, "{} has {} pages", category, count);
        }

        for slug in ["merge-sort", "heap-sort", "dijkstra", "kruskal", "kmp", "rabin-karp"] {
            assert!(catalog.get(slug).is_some(), "missing {}", slug);
        }
    }

    #[test]
    fn test_explicit_default_must_have_snippet() {
        let mut s = spec("bubble-sort", &[(LanguageTag::Python, "pass")]);
        s.default_language = Some(LanguageTag::Cpp);

        let err = AlgorithmPage::from_spec(s, LanguageTag::Cpp).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingDefault { language: LanguageTag::Cpp, .. }
        ));
    }

    #[test]
    fn test_default_falls_back_to_first_tab() {
        let s = spec(
            "bubble-sort",
            &[(LanguageTag::Java, "class A {}"), (LanguageTag::Python, "pass")],
        );
        let page = AlgorithmPage::from_spec(s, LanguageTag::Cpp).unwrap();
        assert_eq!(page.default_language, LanguageTag::Python);
    }

    #[test]
    fn test_default_uses_configured_fallback_when_present() {
        let s = spec(
            "bubble-sort",
            &[(LanguageTag::C, "int x;"), (LanguageTag::Java, "class A {}")],
        );
        let page = AlgorithmPage::from_spec(s, LanguageTag::Java).unwrap();
        assert_eq!(page.default_language, LanguageTag::Java);
    }

    #[test]
    fn test_empty_snippets_rejected() {
        let err = AlgorithmPage::from_spec(spec("empty", &[]), LanguageTag::Cpp).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyContent { .. }));
    }

    #[test]
    fn test_file_stem_defaults_from_slug() {
        let page =
            AlgorithmPage::from_spec(spec("bubble-sort", &[(LanguageTag::Cpp, "int main() {}")]), LanguageTag::Cpp)
                .unwrap();
        assert_eq!(page.file_name(LanguageTag::Cpp), "bubble_sort.cpp");
        assert_eq!(page.file_name(LanguageTag::Java), "BubbleSort.java");
        assert_eq!(page.back_link(), "← Back to Sorting Algorithms");
    }

    #[test]
    fn test_parse_rejects_duplicate_slugs() {
        let yaml = r#"
pages:
  - slug: stack
    title: Stack
    category: Data Structures
    snippets:
      cpp: "int main() {}"
  - slug: stack
    title: Stack Again
    category: Data Structures
    snippets:
      cpp: "int main() {}"
"#;
        let err = Catalog::parse(yaml, "test.yaml", LanguageTag::Cpp).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSlug { .. }));
    }

    #[test]
    fn test_parse_rejects_unknown_language_key() {
        let yaml = r#"
pages:
  - slug: stack
    title: Stack
    category: Data Structures
    snippets:
      rust: "fn main() {}"
"#;
        let err = Catalog::parse(yaml, "test.yaml", LanguageTag::Cpp).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_merge_replaces_matching_slug() {
        let mut catalog = Catalog::from_pages(vec![
            AlgorithmPage::from_spec(spec("a", &[(LanguageTag::Cpp, "old")]), LanguageTag::Cpp).unwrap(),
        ]);
        let replaced = catalog.merge(vec![
            AlgorithmPage::from_spec(spec("a", &[(LanguageTag::Cpp, "new")]), LanguageTag::Cpp).unwrap(),
            AlgorithmPage::from_spec(spec("b", &[(LanguageTag::C, "int b;")]), LanguageTag::Cpp).unwrap(),
        ]);

        assert_eq!(replaced, 1);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("a").unwrap().content.get(LanguageTag::Cpp), Some("new"));
    }

    #[test]
    fn test_categories_keep_first_appearance_order() {
        let mut b = spec("b", &[(LanguageTag::Cpp, "x")]);
        b.category = "Searching Algorithms".to_string();
        let catalog = Catalog::from_pages(vec![
            AlgorithmPage::from_spec(b, LanguageTag::Cpp).unwrap(),
            AlgorithmPage::from_spec(spec("a", &[(LanguageTag::Cpp, "x")]), LanguageTag::Cpp).unwrap(),
            AlgorithmPage::from_spec(spec("c", &[(LanguageTag::Cpp, "x")]), LanguageTag::Cpp).unwrap(),
        ]);
        assert_eq!(
            catalog.categories(),
            vec!["Searching Algorithms", "Sorting Algorithms"]
        );
    }
}
