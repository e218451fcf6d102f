//! Property tests for arithmetic and dependency extraction

use proptest::prelude::*;
use statexpr::{Placeholders, StatValues, compile};

fn operand() -> impl Strategy<Value = f64> {
    prop_oneof![
        (0.0f64..1.0e6),
        (0u32..10_000).prop_map(f64::from),
        Just(0.0),
    ]
}

fn operator() -> impl Strategy<Value = char> {
    prop_oneof![Just('+'), Just('-'), Just('*'), Just('/')]
}

fn ieee(left: f64, op: char, right: f64) -> f64 {
    match op {
        '+' => left + right,
        '-' => left - right,
        '*' => left * right,
        _ => left / right,
    }
}

proptest! {
    #[test]
    fn binary_arithmetic_matches_ieee(left in operand(), op in operator(), right in operand()) {
        let source = format!("a = {left:?} {op} {right:?}");
        let value = compile(&source, "c")
            .unwrap()
            .evaluate(&StatValues::new(), &Placeholders::new())
            .unwrap();
        let expected = ieee(left, op, right);

        if expected.is_nan() {
            prop_assert!(value.is_nan());
        } else {
            prop_assert_eq!(value, expected);
        }
    }

    #[test]
    fn dependents_are_distinct(names in prop::collection::vec(0usize..5, 1..20)) {
        let body = names
            .iter()
            .map(|i| format!("s{i}"))
            .collect::<Vec<_>>()
            .join(" + ");
        let source = format!("derived = {body}");
        let expr = compile(&source, "c").unwrap();

        let mut distinct = names.clone();
        distinct.sort_unstable();
        distinct.dedup();

        prop_assert_eq!(expr.dependencies().dependents.len(), distinct.len());
        prop_assert_eq!(expr.dependencies().derived.name(), "derived");
    }

    #[test]
    fn substitution_preserves_value(kills in 0u32..1000, deaths in 1u32..1000) {
        let expr = compile("kdr = kills / deaths", "c").unwrap();
        let samples = statexpr::SampleValues::from([
            (statexpr::StatReference::new("c", "kills"), vec![f64::from(kills)]),
            (statexpr::StatReference::new("c", "deaths"), vec![f64::from(deaths)]),
        ]);

        let rewritten = compile(&expr.substitute(&samples).unwrap(), "c").unwrap();
        let direct = expr.evaluate_samples(&samples).unwrap();
        prop_assert_eq!(rewritten.evaluate_values(&StatValues::new()).unwrap(), direct);
    }
}
