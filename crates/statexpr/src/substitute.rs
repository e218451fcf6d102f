//! Substitution of known statistic values back into the source text

use statexpr_ast::{Expression, ListExpr, RefSite, StatRef, format_number, rewrite_stat_refs};
use statexpr_diagnostics::{Result, StatExprError};
use statexpr_eval::EvalError;
use statexpr_types::{SampleValues, StatReference};

/// Re-parse `source` and replace each right-hand reference found in `values`.
///
/// A single value (or an empty list, read as zero) becomes a number. Several
/// values become a comma-separated list, which only an aggregate call can take.
pub(crate) fn substitute(
    source: &str,
    default_category: &str,
    values: &SampleValues,
) -> Result<String> {
    let mut assignment = statexpr_parser::parse(source)?;

    rewrite_stat_refs(&mut assignment.expression, &mut |node: &StatRef, site: RefSite| {
        let reference = StatReference::from_ast(node, default_category);
        match values.get(&reference) {
            Some(list) => replacement(source, &reference, list, site).map(Some),
            None => Ok(None),
        }
    })?;

    Ok(assignment.to_string())
}

fn replacement(
    source: &str,
    reference: &StatReference,
    list: &[f64],
    site: RefSite,
) -> Result<Expression> {
    log::trace!("substituting {} value(s) for {}", list.len(), reference);

    match list {
        [] => Ok(Expression::number(0.0)),
        [value] => Ok(Expression::number(*value)),
        _ if site.inside_aggregate => {
            let text = list
                .iter()
                .map(|v| format_number(*v))
                .collect::<Vec<_>>()
                .join(",");
            let elements = statexpr_parser::parse_aggregate_arguments(&text)?;
            Ok(Expression::List(ListExpr { elements }))
        }
        _ => Err(multiple_values(source, reference, list.len(), site)),
    }
}

fn multiple_values(source: &str, reference: &StatReference, count: usize, site: RefSite) -> StatExprError {
    EvalError::MultipleValuesOutsideAggregate {
        reference: reference.to_string(),
        count,
        span: Some(site.span),
    }
    .into_error(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kills(map: &str) -> StatReference {
        StatReference::new("pvp", "kills")
            .with_dimensions([("map".to_string(), map.to_string())].into())
    }

    #[test]
    fn test_target_is_never_replaced() {
        let values = SampleValues::from([(StatReference::new("pvp", "total"), vec![9.0])]);
        let out = substitute("total = total + 1", "pvp", &values).unwrap();
        assert_eq!(out, "total = 9 + 1");
    }

    #[test]
    fn test_unknown_references_are_kept() {
        let values = SampleValues::from([(kills("foo"), vec![2.0])]);
        let out = substitute("r = kills{map:\"foo\"} / deaths", "pvp", &values).unwrap();
        assert_eq!(out, "r = 2 / deaths");
    }

    #[test]
    fn test_list_outside_aggregate_fails() {
        let values = SampleValues::from([(kills("*"), vec![1.0, 2.0])]);
        let err = substitute("r = kills{map:\"*\"} + 1", "pvp", &values).unwrap_err();
        assert!(err.is_evaluation());
        assert!(
            err.message()
                .starts_with("Unrecoverable error during expression evaluation.")
        );
        assert_eq!(err.location().map(|l| l.column), Some(5));
    }
}
