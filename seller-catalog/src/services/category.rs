//! Category provider
//!
//! The set of valid product categories is external configuration; the
//! catalog only checks membership.

/// Source of the currently valid category labels
pub trait CategoryProvider: Send + Sync {
    fn categories(&self) -> Vec<String>;

    fn is_known(&self, category: &str) -> bool {
        self.categories().iter().any(|c| c == category)
    }
}

/// Fixed category set, usually loaded from [`crate::Config`]
#[derive(Debug, Clone)]
pub struct StaticCategoryProvider {
    categories: Vec<String>,
}

impl StaticCategoryProvider {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories
                .into_iter()
                .map(Into::into)
                .map(|c: String| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect(),
        }
    }
}

impl CategoryProvider for StaticCategoryProvider {
    fn categories(&self) -> Vec<String> {
        self.categories.clone()
    }

    fn is_known(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blank_labels() {
        let provider = StaticCategoryProvider::new([" Makanan ", "", "Minuman"]);
        assert_eq!(provider.categories(), vec!["Makanan", "Minuman"]);
    }

    #[test]
    fn membership_is_exact() {
        let provider = StaticCategoryProvider::new(["Makanan"]);
        assert!(provider.is_known("Makanan"));
        assert!(!provider.is_known("makanan"));
        assert!(!provider.is_known("Fashion"));
    }
}
