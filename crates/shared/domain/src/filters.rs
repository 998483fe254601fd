//! Input/output allow-lists contributed by modules.

use serde::{Deserialize, Serialize};

/// The six fixed allow-list categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterCategory {
    Output,
    Get,
    Cookie,
    Post,
    Server,
    Pages,
}

impl FilterCategory {
    pub const ALL: [Self; 6] =
        [Self::Output, Self::Get, Self::Cookie, Self::Post, Self::Server, Self::Pages];

    /// Serialized key of the category.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Output => "allowed_output",
            Self::Get => "allowed_get",
            Self::Cookie => "allowed_cookie",
            Self::Post => "allowed_post",
            Self::Server => "allowed_server",
            Self::Pages => "allowed_pages",
        }
    }
}

/// Allow-lists for every category. All six are always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterSet {
    pub allowed_output: Vec<String>,
    pub allowed_get: Vec<String>,
    pub allowed_cookie: Vec<String>,
    pub allowed_post: Vec<String>,
    pub allowed_server: Vec<String>,
    pub allowed_pages: Vec<String>,
}

impl FilterSet {
    #[must_use]
    pub fn get(&self, category: FilterCategory) -> &[String] {
        match category {
            FilterCategory::Output => &self.allowed_output,
            FilterCategory::Get => &self.allowed_get,
            FilterCategory::Cookie => &self.allowed_cookie,
            FilterCategory::Post => &self.allowed_post,
            FilterCategory::Server => &self.allowed_server,
            FilterCategory::Pages => &self.allowed_pages,
        }
    }

    fn get_mut(&mut self, category: FilterCategory) -> &mut Vec<String> {
        match category {
            FilterCategory::Output => &mut self.allowed_output,
            FilterCategory::Get => &mut self.allowed_get,
            FilterCategory::Cookie => &mut self.allowed_cookie,
            FilterCategory::Post => &mut self.allowed_post,
            FilterCategory::Server => &mut self.allowed_server,
            FilterCategory::Pages => &mut self.allowed_pages,
        }
    }

    pub fn push(&mut self, category: FilterCategory, entry: impl Into<String>) {
        self.get_mut(category).push(entry.into());
    }

    /// Per category: `self`'s entries followed by `other`'s. No reordering, no dedup.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        let Self {
            allowed_output,
            allowed_get,
            allowed_cookie,
            allowed_post,
            allowed_server,
            allowed_pages,
        } = other;
        self.allowed_output.extend(allowed_output);
        self.allowed_get.extend(allowed_get);
        self.allowed_cookie.extend(allowed_cookie);
        self.allowed_post.extend(allowed_post);
        self.allowed_server.extend(allowed_server);
        self.allowed_pages.extend(allowed_pages);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        FilterCategory::ALL.iter().all(|c| self.get(*c).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_appends_per_category() {
        let mut a = FilterSet::default();
        a.push(FilterCategory::Pages, "home");
        a.push(FilterCategory::Get, "page");
        let mut b = FilterSet::default();
        b.push(FilterCategory::Pages, "compose");
        b.push(FilterCategory::Pages, "home");

        let merged = a.merge(b);
        assert_eq!(merged.allowed_pages, vec!["home", "compose", "home"]);
        assert_eq!(merged.allowed_get, vec!["page"]);
        assert!(merged.allowed_cookie.is_empty());
    }

    #[test]
    fn empty_set_serializes_all_categories() {
        let json = serde_json::to_value(FilterSet::default()).unwrap();
        for category in FilterCategory::ALL {
            assert_eq!(json[category.key()], serde_json::json!([]));
        }
    }
}
