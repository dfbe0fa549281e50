//! Category-code to extraction-strategy dispatch.

use crate::error::{Result, SearchError};
use crate::extractor::Extractor;
use std::collections::HashMap;
use tracing::debug;

/// Category code the lookup falls back to when a code has no binding.
pub const DEFAULT_CATEGORY: &str = "default";

/// Maps category codes to extraction strategies.
///
/// Each crawler owns its registry as a plain value, so conflicting
/// registrations surface at construction time instead of at crawl time.
#[derive(Debug, Clone)]
pub struct ExtractorRegistry {
    bindings: HashMap<String, Extractor>,
}

impl ExtractorRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Create a registry with the built-in strategies bound.
    ///
    /// `sss` and the fallback code map to [`Extractor::ForSale`], the job
    /// codes `jjj`, `ggg` and `bbb` to [`Extractor::Job`], and `hhh` to
    /// [`Extractor::Housing`].
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        let strategies: [(&[&str], Extractor); 3] = [
            (&[DEFAULT_CATEGORY, "sss"], Extractor::ForSale),
            (&["jjj", "ggg", "bbb"], Extractor::Job),
            (&["hhh"], Extractor::Housing),
        ];
        for (categories, extractor) in strategies {
            registry
                .register(categories, extractor)
                .expect("builtin category codes are distinct");
        }
        registry
    }

    /// Bind `extractor` to every code in `categories`.
    ///
    /// The call is atomic: when any code is already bound, or appears twice
    /// in `categories`, nothing is registered.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::DuplicateCategory`] naming the first
    /// conflicting code.
    pub fn register(&mut self, categories: &[&str], extractor: Extractor) -> Result<()> {
        for (index, category) in categories.iter().enumerate() {
            if self.bindings.contains_key(*category) || categories[..index].contains(category) {
                return Err(SearchError::DuplicateCategory {
                    category: (*category).to_string(),
                });
            }
        }

        for category in categories {
            debug!(category, ?extractor, "registered extractor");
            self.bindings.insert((*category).to_string(), extractor);
        }
        Ok(())
    }

    /// Look up the strategy for a category code.
    ///
    /// Unknown codes resolve to the binding for [`DEFAULT_CATEGORY`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NoDefaultExtractor`] when neither the code
    /// nor the fallback is bound.
    pub fn get(&self, category: &str) -> Result<Extractor> {
        self.bindings
            .get(category)
            .or_else(|| self.bindings.get(DEFAULT_CATEGORY))
            .copied()
            .ok_or_else(|| SearchError::NoDefaultExtractor {
                category: category.to_string(),
            })
    }

    /// Remove the binding for a category code.
    ///
    /// Returns whether a binding was removed; removing an absent code is
    /// a no-op.
    pub fn deregister(&mut self, category: &str) -> bool {
        let removed = self.bindings.remove(category).is_some();
        if removed {
            debug!(category, "deregistered extractor");
        }
        removed
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
