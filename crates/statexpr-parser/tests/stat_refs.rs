//! Tests for statistic references and assignments

use pretty_assertions::assert_eq;
use statexpr_ast::*;
use statexpr_parser::{parse, parse_aggregate_arguments, parse_stat_ref};

#[test]
fn test_simple_reference() {
    let r = parse_stat_ref("kills").unwrap();
    assert_eq!(r.inner, StatRef::new("kills"));
    assert_eq!((r.span.start, r.span.end), (0, 5));
}

#[test]
fn test_category_and_dimensions() {
    let r = parse_stat_ref("pvp.kills{map:\"*\", mode : \"ctf\"}").unwrap();
    assert_eq!(
        r.inner,
        StatRef::new("kills")
            .with_category("pvp")
            .with_dimension("map", "*")
            .with_dimension("mode", "ctf")
    );
    assert_eq!(r.dimensions[0].value, WILDCARD);
}

#[test]
fn test_dimension_values_allow_dots_and_dashes() {
    let r = parse_stat_ref("time{level:\"1-2.final\"}").unwrap();
    assert_eq!(r.dimensions, vec![Dimension::new("level", "1-2.final")]);
}

#[test]
fn test_whitespace_before_dimensions() {
    let r = parse_stat_ref("  kills {map:\"foo\"}  ").unwrap();
    assert_eq!(r.to_string(), "kills{map:\"foo\"}");
}

#[test]
fn test_empty_dimension_clause_is_rejected() {
    assert!(parse_stat_ref("kills{}").is_err());
}

#[test]
fn test_assignment() {
    let assignment = parse("ratio{map:\"*\"} = kills{map:\"*\"} / shots{map:\"*\"}").unwrap();
    assert_eq!(assignment.target.name, "ratio");
    assert_eq!(
        assignment.to_string(),
        "ratio{map:\"*\"} = kills{map:\"*\"} / shots{map:\"*\"}"
    );

    let refs: Vec<&str> = assignment
        .stat_refs()
        .into_iter()
        .map(|(r, _)| r.name.as_str())
        .collect();
    assert_eq!(refs, vec!["ratio", "kills", "shots"]);
}

#[test]
fn test_assignment_renders_canonical_spacing() {
    let assignment = parse("foo=10+20*(  -5+15  )").unwrap();
    assert_eq!(assignment.to_string(), "foo = 10 + 20 * (-5 + 15)");
}

#[test]
fn test_multiline_source() {
    let assignment = parse("foo =\n  SUM(a,\n      b)").unwrap();
    assert_eq!(assignment.to_string(), "foo = SUM(a, b)");
}

#[test]
fn test_aggregate_arguments() {
    let args = parse_aggregate_arguments("1,2.5, x").unwrap();
    let rendered: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    assert_eq!(rendered, vec!["1", "2.5", "x"]);
}

#[test]
fn test_aggregate_arguments_reject_trailing_comma() {
    assert!(parse_aggregate_arguments("1, 2,").is_err());
}
