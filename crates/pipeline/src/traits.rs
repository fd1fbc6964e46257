//! The `Filter` trait: one recommendation criterion over a candidate list.

use crate::context::UserContext;
use catalog::MediaRecord;

/// A single criterion a candidate must meet to be recommended.
///
/// Candidates are borrowed from the catalog. A filter consumes the list and
/// returns the records it keeps, in the order it received them. Filtering
/// cannot fail.
pub trait Filter {
    /// Short label used in log output
    fn name(&self) -> &str;

    fn apply<'a>(
        &self,
        candidates: Vec<&'a MediaRecord>,
        context: &UserContext,
    ) -> Vec<&'a MediaRecord>;
}
