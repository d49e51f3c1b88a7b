//! Score series: per-instrument model scores for one trading date.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from instrument id to score, ordered by instrument id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSeries(BTreeMap<String, f64>);

impl ScoreSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the score of an instrument, returning the previous one.
    pub fn insert(&mut self, instrument: impl Into<String>, score: f64) -> Option<f64> {
        self.0.insert(instrument.into(), score)
    }

    pub fn get(&self, instrument: &str) -> Option<f64> {
        self.0.get(instrument).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, f64)> for ScoreSeries {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ScoreSeries {
    type Item = (&'a String, &'a f64);
    type IntoIter = std::collections::btree_map::Iter<'a, String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites() {
        let mut s = ScoreSeries::new();
        assert!(s.insert("SH600000", 0.1).is_none());
        assert_eq!(s.insert("SH600000", 0.3), Some(0.1));
        assert_eq!(s.len(), 1);
        assert_eq!(s.get("SH600000"), Some(0.3));
    }

    #[test]
    fn test_collect_orders_by_instrument() {
        let s: ScoreSeries = vec![
            ("B".to_string(), 0.9),
            ("A".to_string(), 0.1),
            ("C".to_string(), -0.2),
        ]
        .into_iter()
        .collect();
        let ids: Vec<_> = s.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }
}
