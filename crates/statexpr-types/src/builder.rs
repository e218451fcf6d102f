//! Builder for [`StatReference`]

use crate::{Dimensions, StatReference};
use statexpr_diagnostics::{Result, SE0102, StatExprError};

#[derive(Debug, Clone, Default)]
pub struct StatReferenceBuilder {
    category: Option<String>,
    name: Option<String>,
    dimensions: Dimensions,
}

impl StatReferenceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn dimension(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.dimensions.insert(key.into(), value.into());
        self
    }

    /// Replace all dimensions collected so far
    pub fn dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn build(self) -> Result<StatReference> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                return Err(StatExprError::invalid_argument(
                    SE0102,
                    "Statistic name is required",
                ));
            }
        };
        Ok(StatReference::new(self.category.unwrap_or_default(), name)
            .with_dimensions(self.dimensions))
    }
}

impl StatReference {
    pub fn builder() -> StatReferenceBuilder {
        StatReferenceBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build() {
        let r = StatReference::builder()
            .category("pvp")
            .name("kills")
            .dimension("map", "*")
            .build()
            .unwrap();
        assert_eq!(r.to_string(), "pvp.kills{map:\"*\"}");
        assert!(r.is_wildcarded());
    }

    #[test]
    fn test_build_requires_name() {
        let err = StatReference::builder().category("pvp").build().unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.code(), SE0102);

        assert!(StatReference::builder().name("  ").build().is_err());
    }

    #[test]
    fn test_dimensions_replaces() {
        let r = StatReference::builder()
            .name("n")
            .dimension("a", "1")
            .dimensions(Dimensions::from([("b".to_string(), "2".to_string())]))
            .build()
            .unwrap();
        assert_eq!(r.dimension("a"), None);
        assert_eq!(r.dimension("b"), Some("2"));
    }
}
