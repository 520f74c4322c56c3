use serde::{Deserialize, Serialize};

/// What a single submission hands back to the caller:
/// the submitted value, the previous newest value and their pairwise average.
#[must_use]
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub last_number: f64,
    pub prev_number: f64,
    pub avg_number: f64,
}

/// Derived view over the whole series. Recomputed fresh on every read.
///
/// An empty series yields all zeroes, `average` included.
#[must_use]
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct AggregateView {
    pub count: usize,
    pub sum: f64,
    pub average: f64,
}
