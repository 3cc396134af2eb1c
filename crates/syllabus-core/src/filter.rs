//! Listing filter and its query-string form.
//!
//! Every criterion is optional and independent. Blank criteria are left out
//! of the query instead of being sent as empty values, so the server never
//! sees an empty-match constraint.

use crate::material::Category;

/// Listing criteria as entered in the filter bar.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialFilter {
    pub category: Option<Category>,
    pub week: String,
    pub search: String,
    pub topic: String,
    /// 1-based page number.
    pub page: u32,
}

impl Default for MaterialFilter {
    fn default() -> Self {
        Self {
            category: None,
            week: String::new(),
            search: String::new(),
            topic: String::new(),
            page: 1,
        }
    }
}

impl MaterialFilter {
    /// Query parameters for `GET /materials/`, omitting blank criteria and
    /// the first page.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(category) = self.category {
            pairs.push(("category", category.as_str().to_string()));
        }
        for (key, value) in [
            ("week", &self.week),
            ("search", &self.search),
            ("topic", &self.topic),
        ] {
            let value = value.trim();
            if !value.is_empty() {
                pairs.push((key, value.to_string()));
            }
        }
        if self.page > 1 {
            pairs.push(("page", self.page.to_string()));
        }

        pairs
    }

    /// True when no criterion narrows the listing.
    pub fn is_unfiltered(&self) -> bool {
        self.category.is_none()
            && self.week.trim().is_empty()
            && self.search.trim().is_empty()
            && self.topic.trim().is_empty()
    }

    /// Sets the category from a `<select>` value; `""` means all categories.
    pub fn set_category(&mut self, value: &str) {
        self.category = value.parse().ok();
        self.page = 1;
    }

    pub fn set_week(&mut self, value: String) {
        self.week = value;
        self.page = 1;
    }

    pub fn set_search(&mut self, value: String) {
        self.search = value;
        self.page = 1;
    }

    pub fn set_topic(&mut self, value: String) {
        self.topic = value;
        self.page = 1;
    }

    pub fn go_to_page(&mut self, page: u32) {
        self.page = page.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(filter: &MaterialFilter) -> Vec<&'static str> {
        filter.query_pairs().into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn test_empty_filter_produces_no_query() {
        let filter = MaterialFilter::default();
        assert!(filter.query_pairs().is_empty());
        assert!(filter.is_unfiltered());
    }

    #[test]
    fn test_blank_fields_never_appear() {
        // Every combination of the three main criteria being set or blank
        for mask in 0u8..8 {
            let mut filter = MaterialFilter::default();
            if mask & 1 != 0 {
                filter.set_category("lab");
            }
            if mask & 2 != 0 {
                filter.set_week("3".into());
            } else {
                filter.set_week("   ".into());
            }
            if mask & 4 != 0 {
                filter.set_search("graph".into());
            }

            let keys = keys(&filter);
            assert_eq!(keys.contains(&"category"), mask & 1 != 0);
            assert_eq!(keys.contains(&"week"), mask & 2 != 0);
            assert_eq!(keys.contains(&"search"), mask & 4 != 0);
            assert!(!keys.contains(&"topic"));
            assert!(filter.query_pairs().iter().all(|(_, v)| !v.is_empty()));
        }
    }

    #[test]
    fn test_values_are_trimmed() {
        let mut filter = MaterialFilter::default();
        filter.set_search("  binary search ".into());
        assert_eq!(
            filter.query_pairs(),
            vec![("search", "binary search".to_string())]
        );
    }

    #[test]
    fn test_all_categories_option_clears_category() {
        let mut filter = MaterialFilter::default();
        filter.set_category("theory");
        assert_eq!(filter.category, Some(Category::Theory));
        filter.set_category("");
        assert_eq!(filter.category, None);
    }

    #[test]
    fn test_changing_criteria_resets_page() {
        let mut filter = MaterialFilter::default();
        filter.go_to_page(3);
        assert_eq!(keys(&filter), vec!["page"]);
        filter.set_topic("recursion".into());
        assert_eq!(filter.page, 1);
        assert_eq!(keys(&filter), vec!["topic"]);
    }

    #[test]
    fn test_page_never_below_one() {
        let mut filter = MaterialFilter::default();
        filter.go_to_page(0);
        assert_eq!(filter.page, 1);
    }
}
