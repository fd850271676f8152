//! Web-search shaped results.
//!
//! Search backends return `{"web": {"results": [...]}, "news": {...}, ...}`.
//! Those payloads are large and mostly noise to a model, so they get a
//! compact numbered listing instead of a JSON dump.

use serde_json::Value;

/// Web results listed individually; the rest are counted.
pub const MAX_LISTED_RESULTS: usize = 5;

/// Secondary result categories, in display order.
pub const CATEGORIES: [&str; 3] = ["news", "images", "videos"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub description: String,
}

impl SearchHit {
    fn from_value(value: &Value) -> Self {
        let field = |key: &str, fallback: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or(fallback)
                .to_string()
        };
        Self {
            title: field("title", "No title"),
            url: field("url", "No URL"),
            description: field("description", "No description"),
        }
    }
}

/// Recognized search payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchShape {
    /// `web.results` was non-empty. Holds the listed hits and the full count.
    Web { hits: Vec<SearchHit>, total: usize },
    /// No web results, but at least one category had some.
    Categories(Vec<(&'static str, usize)>),
}

impl SearchShape {
    /// Recognize a search payload. Returns `None` for anything else.
    ///
    /// A `news`/`images`/`videos` key alone is not enough: at least one
    /// category needs a non-empty `results` list, otherwise the payload is
    /// rendered as generic JSON.
    pub fn detect(value: &Value) -> Option<Self> {
        let map = value.as_object()?;

        let web = map
            .get("web")
            .and_then(|w| w.get("results"))
            .and_then(Value::as_array)
            .filter(|r| !r.is_empty());
        if let Some(results) = web {
            let hits = results
                .iter()
                .take(MAX_LISTED_RESULTS)
                .map(SearchHit::from_value)
                .collect();
            return Some(SearchShape::Web {
                hits,
                total: results.len(),
            });
        }

        let counts: Vec<(&'static str, usize)> = CATEGORIES
            .iter()
            .filter_map(|&category| {
                let count = map
                    .get(category)?
                    .get("results")?
                    .as_array()
                    .map(Vec::len)?;
                (count > 0).then_some((category, count))
            })
            .collect();

        (!counts.is_empty()).then_some(SearchShape::Categories(counts))
    }

    pub fn render(&self, tool_name: &str) -> String {
        match self {
            SearchShape::Web { hits, total } => {
                let mut lines = vec![format!("Tool {tool_name} found {total} results:\n")];
                for (i, hit) in hits.iter().enumerate() {
                    lines.push(format!("{}. **{}**", i + 1, hit.title));
                    lines.push(format!("   URL: {}", hit.url));
                    lines.push(format!("   {}\n", hit.description));
                }
                if *total > hits.len() {
                    lines.push(format!("... and {} more results", total - hits.len()));
                }
                lines.join("\n")
            }
            SearchShape::Categories(counts) => {
                let mut lines = vec![format!("Tool {tool_name} results:\n")];
                for (category, count) in counts {
                    lines.push(format!("\n{}: {count} items found", capitalize(category)));
                }
                lines.join("\n")
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn web_payload(n: usize) -> Value {
        let results: Vec<Value> = (1..=n)
            .map(|i| {
                json!({
                    "title": format!("Result {i}"),
                    "url": format!("https://example.com/{i}"),
                    "description": format!("Description {i}")
                })
            })
            .collect();
        json!({"web": {"results": results}})
    }

    #[test]
    fn test_seven_results_lists_five() {
        let shape = SearchShape::detect(&web_payload(7)).unwrap();
        let text = shape.render("brave_web_search");

        assert!(text.starts_with("Tool brave_web_search found 7 results:\n"));
        assert!(text.contains("1. **Result 1**"));
        assert!(text.contains("5. **Result 5**"));
        assert!(!text.contains("6. **Result 6**"));
        assert!(text.contains("   URL: https://example.com/3"));
        assert!(text.ends_with("... and 2 more results"));
    }

    #[test]
    fn test_exactly_five_has_no_trailer() {
        let text = SearchShape::detect(&web_payload(5)).unwrap().render("s");
        assert!(!text.contains("more results"));
    }

    #[test]
    fn test_missing_hit_fields_use_fallbacks() {
        let value = json!({"web": {"results": [{"url": "https://a"}, 42]}});
        let SearchShape::Web { hits, .. } = SearchShape::detect(&value).unwrap() else {
            panic!("expected web shape");
        };
        assert_eq!(hits[0].title, "No title");
        assert_eq!(hits[0].url, "https://a");
        assert_eq!(hits[1].description, "No description");
    }

    #[test]
    fn test_category_counts() {
        let value = json!({
            "web": {"results": []},
            "news": {"results": [1, 2, 3]},
            "videos": {"results": [1]},
            "images": {"results": []}
        });
        let text = SearchShape::detect(&value).unwrap().render("search");
        assert_eq!(
            text,
            "Tool search results:\n\n\nNews: 3 items found\n\nVideos: 1 items found"
        );
    }

    #[test]
    fn test_not_a_search_shape() {
        assert!(SearchShape::detect(&json!({"news": {"results": []}})).is_none());
        assert!(SearchShape::detect(&json!({"title": "x"})).is_none());
        assert!(SearchShape::detect(&json!([1, 2])).is_none());
        assert!(SearchShape::detect(&json!({"web": {"results": "nope"}})).is_none());
    }
}
