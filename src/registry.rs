/*!
 * Declarative name <-> filter mapping.
 *
 * Chain configuration names filters by short token ("twig", "html") so a
 * serialized profile stays portable across library versions. The registry
 * resolves those tokens to executable filters and back. The mapping is a
 * bijection: every registered instance has exactly one name and vice
 * versa, enforced when the registry is built. Lookups for unknown names
 * or unregistered instances yield `None` rather than failing, and batch
 * resolution silently drops unknown entries so a profile written against
 * a newer or older vocabulary still produces a usable chain.
 */

use std::collections::HashMap;
use std::sync::Arc;

use log::warn;

use crate::errors::RegistryError;
use crate::filters::{ControlCharsFilter, EntitiesFilter, Filter, HtmlFilter, PatternFilter};

/// Immutable name <-> filter bijection, fixed after construction.
#[derive(Debug)]
pub struct FilterRegistry {
    /// Names in registration order.
    names: Vec<String>,
    by_name: HashMap<String, Arc<dyn Filter>>,
}

impl FilterRegistry {
    /// Starts an empty registry builder.
    pub fn builder() -> FilterRegistryBuilder {
        FilterRegistryBuilder::new()
    }

    /// Builds the registry holding the standard vocabulary, in canonical
    /// chain order. Markup families come before variable families, since
    /// markup is the outermost syntax in real content (`<a href="{{ url }}">`
    /// must pair the anchor tag around the directive). Among overlapping
    /// variable families the more specific pattern comes earlier, so it
    /// claims the match (`%{{...}}` before `%{...}` and `{{...}}`, `[%s]`
    /// before bare `%s`, `${...}` before `{...}`).
    pub fn with_defaults() -> Self {
        let mut registry = Self {
            names: Vec::new(),
            by_name: HashMap::new(),
        };
        for filter in default_vocabulary() {
            registry.insert(filter);
        }
        registry
    }

    /// Inserts without validation. Callers guarantee the name is not yet
    /// registered: the builder checks, `with_defaults` holds distinct
    /// names by construction.
    fn insert(&mut self, filter: Arc<dyn Filter>) {
        let name = filter.name().to_string();
        self.names.push(name.clone());
        self.by_name.insert(name, filter);
    }

    /// Resolves a configuration name to its filter.
    pub fn filter_for_name(&self, name: &str) -> Option<Arc<dyn Filter>> {
        self.by_name.get(name).cloned()
    }

    /// Resolves a filter instance back to its registered name.
    pub fn name_for_filter(&self, filter: &Arc<dyn Filter>) -> Option<&str> {
        self.by_name
            .iter()
            .find(|(_, registered)| Arc::ptr_eq(registered, filter))
            .map(|(name, _)| name.as_str())
    }

    /// Resolves a sequence of names into filters, preserving input order.
    /// Unknown names are logged and dropped, never failing the batch.
    pub fn filters_for_names<S: AsRef<str>>(&self, names: &[S]) -> Vec<Arc<dyn Filter>> {
        names
            .iter()
            .filter_map(|name| {
                let name = name.as_ref();
                let filter = self.filter_for_name(name);
                if filter.is_none() {
                    warn!("Unknown filter name in chain configuration, skipping: {}", name);
                }
                filter
            })
            .collect()
    }

    /// Resolves filter instances back to names, preserving input order and
    /// dropping instances this registry never registered.
    pub fn names_for_filters(&self, filters: &[Arc<dyn Filter>]) -> Vec<&str> {
        filters
            .iter()
            .filter_map(|filter| self.name_for_filter(filter))
            .collect()
    }

    /// The full declared vocabulary, in registration order.
    pub fn all_names(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Collects registrations and validates the bijection on `build`.
#[derive(Default)]
pub struct FilterRegistryBuilder {
    filters: Vec<Arc<dyn Filter>>,
}

impl FilterRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the standard vocabulary, ready for per-job additions.
    pub fn with_defaults() -> Self {
        Self {
            filters: default_vocabulary(),
        }
    }

    /// Queues a filter for registration under its own name.
    pub fn register(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Validates the bijection and produces the registry. Registering two
    /// filters under one name, or one instance twice, is a configuration
    /// error surfaced here rather than a panic at lookup time.
    pub fn build(self) -> Result<FilterRegistry, RegistryError> {
        let mut registry = FilterRegistry {
            names: Vec::new(),
            by_name: HashMap::new(),
        };
        for filter in self.filters {
            if let Some(existing) = registry.name_for_filter(&filter) {
                return Err(RegistryError::DuplicateFilter {
                    name: existing.to_string(),
                });
            }
            let name = filter.name();
            if registry.by_name.contains_key(name) {
                return Err(RegistryError::DuplicateName(name.to_string()));
            }
            registry.insert(filter);
        }
        Ok(registry)
    }
}

/// The standard vocabulary, one fresh instance per family.
fn default_vocabulary() -> Vec<Arc<dyn Filter>> {
    vec![
        Arc::new(ControlCharsFilter::new()),
        Arc::new(EntitiesFilter::new()),
        Arc::new(PatternFilter::xliff_tags()),
        Arc::new(HtmlFilter::new()),
        Arc::new(PatternFilter::percent_double_curly()),
        Arc::new(PatternFilter::ruby_i18n()),
        Arc::new(PatternFilter::twig()),
        Arc::new(PatternFilter::dollar_curly()),
        Arc::new(PatternFilter::single_curly()),
        Arc::new(PatternFilter::percentages()),
        Arc::new(PatternFilter::double_square()),
        Arc::new(PatternFilter::square_sprintf()),
        Arc::new(PatternFilter::sprintf()),
        Arc::new(PatternFilter::snails()),
        Arc::new(PatternFilter::smart_count()),
    ]
}
