//! Working set and derived views: substring filtering and bucket partition.

use serde::Serialize;

use crate::model::{Category, Item};

/// The immutable working set of directory entries.
///
/// Built once per load and replaced wholesale on reload; views over it are
/// derived per query via [`Directory::search`], never stored.
#[derive(Debug, Default)]
pub struct Directory {
    items: Vec<Item>,
}

/// A filtered working set partitioned into the three fixed buckets.
///
/// Input order is preserved within each bucket.
#[derive(Debug, Serialize)]
pub struct Buckets<'a> {
    pub ai: Vec<&'a Item>,
    pub analytics: Vec<&'a Item>,
    pub other: Vec<&'a Item>,
}

impl Directory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Filter by case-insensitive substring over name and description, then
    /// partition into buckets.
    ///
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Buckets<'_> {
        let needle = query.to_lowercase();

        let mut buckets = Buckets {
            ai: Vec::new(),
            analytics: Vec::new(),
            other: Vec::new(),
        };

        for item in &self.items {
            if !needle.is_empty() && !matches(item, &needle) {
                continue;
            }
            match item.category {
                Category::Ai => buckets.ai.push(item),
                Category::Analytics => buckets.analytics.push(item),
                Category::Other => buckets.other.push(item),
            }
        }

        buckets
    }
}

fn matches(item: &Item, needle: &str) -> bool {
    item.name.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
}

impl Buckets<'_> {
    /// Total entries across all three buckets.
    pub fn total(&self) -> usize {
        self.ai.len() + self.analytics.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_items;

    fn directory() -> Directory {
        let input = "\
Name,Description,Url,Type
Alpha,Does alpha things,https://a.example,AI
Beta,Does beta things,https://b.example,Analytics
Gamma,Misc tool,https://c.example,Other
";
        Directory::new(parse_items(input).unwrap())
    }

    fn names<'a>(items: &'a [&'a Item]) -> Vec<&'a str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn empty_query_returns_full_set_in_order() {
        let dir = directory();
        let buckets = dir.search("");
        assert_eq!(buckets.total(), dir.len());
        assert_eq!(names(&buckets.ai), ["Alpha"]);
        assert_eq!(names(&buckets.analytics), ["Beta"]);
        assert_eq!(names(&buckets.other), ["Gamma"]);
    }

    #[test]
    fn query_filters_all_buckets() {
        let dir = directory();
        let buckets = dir.search("beta");
        assert!(buckets.ai.is_empty());
        assert_eq!(names(&buckets.analytics), ["Beta"]);
        assert!(buckets.other.is_empty());
    }

    #[test]
    fn query_is_case_insensitive_and_matches_descriptions() {
        let dir = directory();
        let buckets = dir.search("MISC");
        assert_eq!(names(&buckets.other), ["Gamma"]);
    }

    #[test]
    fn unmatched_query_empties_every_bucket() {
        let dir = directory();
        let buckets = dir.search("zzz-no-such-tool");
        assert!(buckets.is_empty());
        assert!(buckets.ai.is_empty());
        assert!(buckets.analytics.is_empty());
        assert!(buckets.other.is_empty());
    }

    #[test]
    fn bucket_partition_preserves_input_order() {
        let input = "\
Name,Description,Url,Type
One,first,https://1.example,AI
Two,second,https://2.example,Other
Three,third,https://3.example,AI
Four,fourth,https://4.example,Tooling
";
        let dir = Directory::new(parse_items(input).unwrap());
        let buckets = dir.search("");
        assert_eq!(names(&buckets.ai), ["One", "Three"]);
        // Unrecognized categories join the Other bucket, in input order.
        assert_eq!(names(&buckets.other), ["Two", "Four"]);
    }

    #[test]
    fn mixed_case_types_share_a_bucket() {
        let input = "\
Name,Description,Url,Type
A,x,https://a.example,ai
B,y,https://b.example,AI
C,z,https://c.example, Ai
";
        let dir = Directory::new(parse_items(input).unwrap());
        let buckets = dir.search("");
        assert_eq!(buckets.ai.len(), 3);
    }

    #[test]
    fn buckets_serialize_for_the_json_view() {
        let dir = directory();
        let json = serde_json::to_value(dir.search("beta")).unwrap();
        assert_eq!(json["ai"].as_array().unwrap().len(), 0);
        assert_eq!(json["analytics"][0]["name"], "Beta");
        assert_eq!(json["analytics"][0]["category"], "Analytics");
    }
}
