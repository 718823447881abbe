use crate::history::HistoryList;

/// Whitespace-separated query tokens, lowercased once per recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryTokens {
    tokens: Vec<String>,
}

impl QueryTokens {
    pub fn parse(query: &str) -> Self {
        Self {
            tokens: query.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// An entry matches when it contains every token, in any order. No tokens
    /// matches everything.
    pub fn matches(&self, entry: &str) -> bool {
        if self.tokens.is_empty() {
            return true;
        }

        let lowered = entry.to_lowercase();
        self.tokens.iter().all(|token| lowered.contains(token.as_str()))
    }
}

pub fn matches(entry: &str, query: &str) -> bool {
    QueryTokens::parse(query).matches(entry)
}

/// Entries of `history` matching `query`, in history order.
pub fn filter<'a>(history: &'a HistoryList, query: &str) -> Vec<&'a str> {
    let tokens = QueryTokens::parse(query);
    history
        .entries()
        .iter()
        .map(String::as_str)
        .filter(|entry| tokens.matches(entry))
        .collect()
}
