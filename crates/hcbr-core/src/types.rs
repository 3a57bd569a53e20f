//! Shared types used across the case-base model and the runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense identifier of a feature, assigned by the feature dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FeatureId(pub u32);

impl FeatureId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Position of this feature in the model's per-feature tables.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for FeatureId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Binary outcome attached to a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Zero,
    One,
}

impl Label {
    /// Both classes, in table order.
    pub const ALL: [Label; 2] = [Label::Zero, Label::One];

    pub fn from_bool(value: bool) -> Self {
        if value {
            Label::One
        } else {
            Label::Zero
        }
    }

    pub fn as_bool(self) -> bool {
        matches!(self, Label::One)
    }

    /// Row of this class in the strength table.
    pub fn index(self) -> usize {
        match self {
            Label::Zero => 0,
            Label::One => 1,
        }
    }
}

impl From<bool> for Label {
    fn from(value: bool) -> Self {
        Label::from_bool(value)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// A case: strictly ascending, duplicate-free set of feature ids.
///
/// Every downstream set operation relies on this ordering, so the only
/// ways to build a `Case` either establish it (`new`) or check it
/// (`from_sorted`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Case {
    features: Vec<FeatureId>,
}

impl Case {
    /// Build a case from features in any order, dropping duplicates.
    pub fn new(features: impl IntoIterator<Item = FeatureId>) -> Self {
        let mut features: Vec<FeatureId> = features.into_iter().collect();
        features.sort_unstable();
        features.dedup();
        Self { features }
    }

    /// Wrap features that are already strictly ascending.
    ///
    /// # Panics
    ///
    /// Panics if `features` is not strictly ascending.
    pub fn from_sorted(features: Vec<FeatureId>) -> Self {
        assert!(
            features.windows(2).all(|w| w[0] < w[1]),
            "case features must be strictly ascending and unique"
        );
        Self { features }
    }

    pub fn features(&self) -> &[FeatureId] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = FeatureId> + '_ {
        self.features.iter().copied()
    }

    pub fn contains(&self, feature: FeatureId) -> bool {
        self.features.binary_search(&feature).is_ok()
    }
}

impl FromIterator<FeatureId> for Case {
    fn from_iter<I: IntoIterator<Item = FeatureId>>(iter: I) -> Self {
        Case::new(iter)
    }
}

impl<'a> IntoIterator for &'a Case {
    type Item = &'a FeatureId;
    type IntoIter = std::slice::Iter<'a, FeatureId>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}
