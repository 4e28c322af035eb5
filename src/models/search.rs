use super::api::SearchResult;

/// Results shown per page of search results
pub const RESULTS_PER_PAGE: usize = 10;

/// Default maximum length of a shortened title
pub const TITLE_LIMIT: usize = 17;

/// A completed search: the query and everything it returned
#[derive(Debug, Clone)]
pub struct Search {
    pub query: String,
    pub results: Vec<SearchResult>,
}

impl Search {
    pub fn new(query: &str, results: Vec<SearchResult>) -> Self {
        Self {
            query: query.to_string(),
            results,
        }
    }

    /// Results for a 1-based page, empty when out of range
    pub fn page(&self, page: usize) -> &[SearchResult] {
        if page == 0 {
            return &[];
        }
        let start = (page - 1).saturating_mul(RESULTS_PER_PAGE);
        if start >= self.results.len() {
            return &[];
        }
        let end = (start + RESULTS_PER_PAGE).min(self.results.len());
        &self.results[start..end]
    }

    pub fn num_pages(&self) -> usize {
        self.results.len().div_ceil(RESULTS_PER_PAGE)
    }
}

/// Shorten a title to whole words fitting within `limit` characters
pub fn limit_title(title: &str, limit: usize) -> String {
    if title.chars().count() <= limit {
        return title.to_string();
    }

    let mut kept: Vec<&str> = Vec::new();
    let mut length = 0;
    for word in title.split_whitespace() {
        length += word.chars().count();
        if length > limit {
            break;
        }
        kept.push(word);
    }

    format!("{} ...", kept.join(" "))
}
