//! Dependency extraction

use indexmap::IndexSet;
use serde::Serialize;
use statexpr_ast::Assignment;
use statexpr_types::StatReference;

/// The statistic an expression defines and the distinct statistics it reads
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatDependencies {
    /// Target of the assignment
    pub derived: StatReference,
    /// Every other reference, deduplicated, in first-encounter order
    pub dependents: IndexSet<StatReference>,
}

impl StatDependencies {
    pub fn depends_on(&self, reference: &StatReference) -> bool {
        self.dependents.contains(reference)
    }

    /// Derived reference first, then the dependents
    pub fn iter(&self) -> impl Iterator<Item = &StatReference> {
        std::iter::once(&self.derived).chain(&self.dependents)
    }
}

/// Walk the tree once, depth-first and left to right
pub fn extract_dependencies(assignment: &Assignment, default_category: &str) -> StatDependencies {
    let mut refs = assignment
        .stat_refs()
        .into_iter()
        .map(|(node, _)| StatReference::from_ast(node, default_category));

    // stat_refs always starts with the assignment target
    let derived = refs
        .next()
        .unwrap_or_else(|| StatReference::from_ast(&assignment.target, default_category));
    let dependents: IndexSet<StatReference> = refs.collect();

    log::debug!(
        "{} depends on {} distinct statistics",
        derived,
        dependents.len()
    );

    StatDependencies {
        derived,
        dependents,
    }
}
