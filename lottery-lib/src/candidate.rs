use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type CandidateId = String;
pub type Weight = u64;

/// Anything holding tickets in a draw.
pub trait Weighted {
    fn weight(&self) -> Weight;
}

/// An entry eligible to win.
///
/// Only `weight` takes part in the selection. Name, group and metrics are
/// carried along untouched so that the winner can be presented afterwards.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub id: CandidateId,
    pub weight: Weight,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub metrics: BTreeMap<String, String>,
}

impl Candidate {
    pub fn new(id: impl Into<CandidateId>, weight: Weight) -> Self {
        Self {
            id: id.into(),
            weight,
            name: String::new(),
            group: String::new(),
            metrics: BTreeMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn with_metric(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metrics.insert(key.into(), value.into());
        self
    }
}

impl Weighted for Candidate {
    fn weight(&self) -> Weight {
        self.weight
    }
}

#[cfg(any(test, feature = "proptest"))]
mod arbitrary {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    impl Arbitrary for Candidate {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
            ("[a-z0-9]{1,12}", 0..1_000u64, "[A-Za-z ]{0,16}", "[a-z]{0,6}")
                .prop_map(|(id, weight, name, group)| {
                    Candidate::new(id, weight).with_name(name).with_group(group)
                })
                .boxed()
        }
    }

    /// Pools of up to `max_len` candidates with unique ids.
    pub fn arbitrary_pool(max_len: usize) -> impl Strategy<Value = Vec<Candidate>> {
        vec(any::<Candidate>(), 0..=max_len).prop_map(|candidates| {
            candidates
                .into_iter()
                .enumerate()
                .map(|(i, candidate)| Candidate {
                    id: format!("{}-{}", i, candidate.id),
                    ..candidate
                })
                .collect()
        })
    }
}

#[cfg(any(test, feature = "proptest"))]
pub use arbitrary::arbitrary_pool;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_with_defaults() {
        let candidate: Candidate = serde_json::from_str(r#"{"id": "alice", "weight": 3}"#).unwrap();
        assert_eq!(candidate, Candidate::new("alice", 3));
    }

    #[test]
    fn display_attributes_survive() {
        let candidate: Candidate = serde_json::from_str(
            r#"{"id": "bob", "weight": 0, "name": "Bob", "group": "ops", "metrics": {"commits": "12"}}"#,
        )
        .unwrap();
        assert_eq!(
            candidate,
            Candidate::new("bob", 0)
                .with_name("Bob")
                .with_group("ops")
                .with_metric("commits", "12")
        );
        assert_eq!(candidate.weight(), 0);
    }
}
