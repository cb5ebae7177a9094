use crate::error::Result;
use crate::split::monthly::Split;
use crate::table::Table;

/// The capability contract a cross-validation splitter exposes to generic
/// evaluation code: a split count and a finite sequence of train/test
/// identifier pairs. Every call recomputes from the table argument, so
/// splitting is restartable across invocations.
pub trait CrossValidator {
    type Splits: Iterator<Item = Split>;

    /// Number of splitting iterations this splitter reports for `table`.
    fn get_n_splits(&self, table: &Table) -> Result<usize>;

    /// Produce the train/test pairs for `table`.
    fn split(&self, table: &Table) -> Result<Self::Splits>;
}
