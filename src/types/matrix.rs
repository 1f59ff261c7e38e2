use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub type Score = f64;

/// Lookups for an unknown PETS id yield zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PetsScores(BTreeMap<String, Score>);

impl PetsScores {
    pub fn score_for(&self, pets_id: &str) -> Score {
        self.0.get(pets_id).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Score)> for PetsScores {
    fn from_iter<I: IntoIterator<Item = (K, Score)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(key, score)| (key.into(), score)).collect())
    }
}

impl<'de> Deserialize<'de> for PetsScores {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?;
        Ok(raw
            .unwrap_or_default()
            .into_iter()
            .map(|(pets_id, value)| (pets_id, coerce_score(&value)))
            .collect())
    }
}

pub fn coerce_score(value: &Value) -> Score {
    value
        .as_f64()
        .filter(|score| score.is_finite())
        .unwrap_or(0.0)
}

fn lenient_score<'de, D>(deserializer: D) -> std::result::Result<Score, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_score).unwrap_or(0.0))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreMatrixEntry {
    pub l2_name: String,
    pub l1_name: String,
    #[serde(default)]
    pub l1_category: String,
    #[serde(default, deserialize_with = "lenient_score")]
    pub l1_weight: Score,
    #[serde(default, deserialize_with = "lenient_score")]
    pub l2_weight: Score,
    #[serde(default)]
    pub pets_scores: PetsScores,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreMatrix {
    entries: Vec<ScoreMatrixEntry>,
}

impl ScoreMatrix {
    pub fn new(entries: Vec<ScoreMatrixEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ScoreMatrixEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find_leaf(&self, l2_name: &str) -> Option<&ScoreMatrixEntry> {
        self.entries.iter().find(|entry| entry.l2_name == l2_name)
    }

    pub fn duplicate_leaf_names(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for entry in &self.entries {
            if !seen.insert(entry.l2_name.as_str()) && !duplicates.contains(&entry.l2_name) {
                duplicates.push(entry.l2_name.clone());
            }
        }
        duplicates
    }
}
