//! Feature dictionary: raw feature tokens to dense feature ids.

use hcbr_core::types::{Case, FeatureId};
use std::collections::HashMap;

/// Interns feature tokens in first-seen order, so ids are dense in
/// `[0, len)` and never reused.
#[derive(Debug, Clone, Default)]
pub struct FeatureDictionary {
    index: HashMap<String, FeatureId>,
    tokens: Vec<String>,
}

impl FeatureDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of `token`, assigning the next free id on first sight.
    pub fn intern(&mut self, token: &str) -> FeatureId {
        if let Some(&id) = self.index.get(token) {
            return id;
        }
        let id = FeatureId(self.tokens.len() as u32);
        self.tokens.push(token.to_string());
        self.index.insert(token.to_string(), id);
        id
    }

    /// Id of an already interned token.
    pub fn get(&self, token: &str) -> Option<FeatureId> {
        self.index.get(token).copied()
    }

    /// Original token for an id.
    pub fn token(&self, id: FeatureId) -> Option<&str> {
        self.tokens.get(id.index()).map(String::as_str)
    }

    /// Intern every token and build a well-formed case from them.
    ///
    /// Repeated tokens within one case collapse to a single feature.
    pub fn encode<'a>(&mut self, tokens: impl IntoIterator<Item = &'a str>) -> Case {
        let ids: Vec<FeatureId> = tokens.into_iter().map(|t| self.intern(t)).collect();
        Case::new(ids)
    }

    /// Number of distinct features seen.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
