//! Runs a sequence of filters over the catalog candidates.

use crate::context::UserContext;
use crate::traits::Filter;
use catalog::MediaRecord;
use tracing::debug;

/// An ordered list of filters, built up with [`FilterPipeline::add_filter`].
///
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(AlreadyWatchedFilter)
///     .add_filter(MinimumRatingFilter::new(8.0))
///     .add_filter(GenrePreferenceFilter);
///
/// let survivors = pipeline.apply(candidates, &context);
/// ```
#[derive(Default)]
pub struct FilterPipeline {
    stages: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.stages.push(Box::new(filter));
        self
    }

    /// Keep the candidates that pass every stage, in their original order.
    pub fn apply<'a>(
        &self,
        candidates: Vec<&'a MediaRecord>,
        context: &UserContext,
    ) -> Vec<&'a MediaRecord> {
        self.stages.iter().fold(candidates, |remaining, stage| {
            let before = remaining.len();
            let kept = stage.apply(remaining, context);
            debug!("{}: kept {} of {} candidates", stage.name(), kept.len(), before);
            kept
        })
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
