//! The numeric aggregator: translates raw submissions into derived values.

use crate::aggregator::average::Average;
use crate::aggregator::models::{AggregateView, Submission};
use crate::prelude::*;
use crate::store::NumberStore;

pub mod average;
pub mod models;

#[derive(Clone)]
pub struct Aggregator {
    store: Arc<dyn NumberStore>,
}

impl Aggregator {
    pub fn new(store: Arc<dyn NumberStore>) -> Self {
        Self { store }
    }

    /// Appends the value to the series and returns it together with
    /// the pairwise average of the two most recent submissions.
    ///
    /// The first-ever submission has no predecessor, `prev_number` is `0` then.
    /// Store failures surface unchanged, nothing is retried here.
    #[instrument(skip(self), level = "debug")]
    pub async fn submit(&self, value: f64) -> Result<Submission> {
        let snapshot = self.store.append(value).await?;
        let prev_number = snapshot.previous.unwrap_or_default();
        Ok(Submission {
            last_number: snapshot.last,
            prev_number,
            avg_number: (snapshot.last + prev_number) / 2.0,
        })
    }

    /// Computes the aggregate view over the whole series.
    #[instrument(skip_all, level = "debug")]
    pub async fn statistics(&self) -> Result<AggregateView> {
        let series = self.store.retrieve_all().await?;
        let mut average = Average::default();
        for value in &series {
            average.push(*value);
        }
        Ok(AggregateView {
            count: average.count(),
            sum: average.sum(),
            average: average.average(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryNumberStore;

    fn aggregator() -> Aggregator {
        Aggregator::new(Arc::new(MemoryNumberStore::default()))
    }

    #[tokio::test]
    async fn first_submission_ok() -> crate::Result {
        let submission = aggregator().submit(5.0).await?;
        assert_eq!(
            submission,
            Submission {
                last_number: 5.0,
                prev_number: 0.0,
                avg_number: 2.5,
            },
        );
        Ok(())
    }

    #[tokio::test]
    async fn second_submission_ok() -> crate::Result {
        let aggregator = aggregator();
        aggregator.submit(5.0).await?;
        let submission = aggregator.submit(3.0).await?;
        assert_eq!(
            submission,
            Submission {
                last_number: 3.0,
                prev_number: 5.0,
                avg_number: 4.0,
            },
        );
        Ok(())
    }

    #[tokio::test]
    async fn pairwise_average_is_not_rounded_ok() -> crate::Result {
        let aggregator = aggregator();
        aggregator.submit(3.0).await?;
        let submission = aggregator.submit(2.0).await?;
        assert_eq!(submission.avg_number, 2.5);
        Ok(())
    }

    #[tokio::test]
    async fn empty_statistics_ok() -> crate::Result {
        let view = aggregator().statistics().await?;
        assert_eq!(
            view,
            AggregateView {
                count: 0,
                sum: 0.0,
                average: 0.0,
            },
        );
        Ok(())
    }

    #[tokio::test]
    async fn statistics_reflect_each_submission_ok() -> crate::Result {
        let aggregator = aggregator();
        for (n, value) in [3.0, 2.0, 7.0].into_iter().enumerate() {
            aggregator.submit(value).await?;
            assert_eq!(aggregator.statistics().await?.count, n + 1);
        }
        let view = aggregator.statistics().await?;
        assert_eq!(view.sum, 12.0);
        assert_eq!(view.average, 4.0);
        Ok(())
    }

    #[tokio::test]
    async fn statistics_are_idempotent_ok() -> crate::Result {
        let aggregator = aggregator();
        aggregator.submit(1.0).await?;
        aggregator.submit(2.0).await?;
        assert_eq!(aggregator.statistics().await?, aggregator.statistics().await?);
        Ok(())
    }
}
