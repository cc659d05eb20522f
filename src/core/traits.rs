//! Core traits for SVM configuration handling

use crate::native::SolverParams;

/// Parameter update capability
///
/// Each configuration component (formulation, kernel, execution) is a pure
/// function from its own fields to a transformation of the solver parameter
/// record. Updates consume and return the record instead of mutating shared
/// state, so the write order stays visible at the call site.
pub trait ParamUpdate {
    /// Write this component's fields onto the solver parameter record.
    fn update(&self, params: SolverParams) -> SolverParams;
}

/// Apply a sequence of updates in order, starting from `base`.
///
/// The sequence order is the precedence order: a later update legitimately
/// overrides any field written by an earlier one.
pub fn apply_updates<'a, I>(base: SolverParams, updates: I) -> SolverParams
where
    I: IntoIterator<Item = &'a dyn ParamUpdate>,
{
    updates
        .into_iter()
        .fold(base, |params, stage| stage.update(params))
}
