// Icon resolver - Condition keyword to visual variant
use crate::domain::chart::IconVariant;
use crate::domain::weather::normalize_keyword;
use std::collections::HashMap;

/// Maps condition keywords to icons.
///
/// Lookup is total: anything not in the table resolves to the default variant.
/// Keywords are normalized first, so "Partly Cloudy", "partly_cloudy" and
/// "partly-cloudy" all hit the same entry.
#[derive(Debug, Clone)]
pub struct IconResolver {
    mapping: HashMap<String, IconVariant>,
    default_variant: IconVariant,
}

impl IconResolver {
    pub fn new() -> Self {
        let mapping = [
            ("sunny", IconVariant::Sun),
            ("cloudy", IconVariant::Cloud),
            ("partly-cloudy", IconVariant::Cloud),
            ("rainy", IconVariant::CloudRain),
            ("snowy", IconVariant::CloudSnow),
        ]
        .into_iter()
        .map(|(keyword, variant)| (keyword.to_string(), variant))
        .collect();

        Self {
            mapping,
            default_variant: IconVariant::Sun,
        }
    }

    /// Returns a resolver with one extra (or replaced) keyword
    pub fn with_mapping(mut self, keyword: &str, variant: IconVariant) -> Self {
        self.mapping.insert(normalize_keyword(keyword), variant);
        self
    }

    pub fn with_default(mut self, variant: IconVariant) -> Self {
        self.default_variant = variant;
        self
    }

    pub fn default_variant(&self) -> IconVariant {
        self.default_variant
    }

    pub fn resolve(&self, condition: &str) -> IconVariant {
        match self.mapping.get(&normalize_keyword(condition)) {
            Some(variant) => *variant,
            None => {
                tracing::debug!("No icon for condition '{}', using default", condition);
                self.default_variant
            }
        }
    }
}

impl Default for IconResolver {
    fn default() -> Self {
        Self::new()
    }
}
