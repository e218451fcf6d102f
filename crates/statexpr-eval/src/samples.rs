//! Expansion of per-statistic sample lists into single-value maps

use crate::error::{EvalError, EvalResult};
use statexpr_types::{Placeholders, SampleValues, StatReference, StatValues};

/// Prefix of the synthetic dimension value standing in for `*` in sample `i`
pub const SAMPLE_MARKER_PREFIX: &str = "sample_";

/// Turn sample lists into the value map and placeholders to evaluate with.
///
/// When `derived` is concrete, sample `i` of a wildcarded statistic becomes a
/// distinct concrete statistic whose `*` dimensions read `sample_<i>`, so
/// aggregates see every sample. A statistic without wildcards keeps its
/// identity and its last sample wins.
///
/// When `derived` is wildcarded the expression is placeholder-bound: the
/// derived dimensions become the placeholders and each list must hold exactly
/// one value.
pub fn expand_samples(
    samples: &SampleValues,
    derived: &StatReference,
) -> EvalResult<(StatValues, Placeholders)> {
    if derived.is_wildcarded() {
        let mut values = StatValues::with_capacity(samples.len());
        for (reference, list) in samples {
            let [value] = list.as_slice() else {
                return Err(EvalError::InvalidSampleCount {
                    reference: reference.to_string(),
                    count: list.len(),
                });
            };
            values.insert(reference.clone(), *value);
        }
        return Ok((values, derived.dimensions().clone()));
    }

    let mut values = StatValues::new();
    for (reference, list) in samples {
        for (index, value) in list.iter().enumerate() {
            let marker = format!("{SAMPLE_MARKER_PREFIX}{index}");
            values.insert(reference.replace_wildcards(&marker), *value);
        }
    }
    log::trace!("expanded {} sample lists into {} values", samples.len(), values.len());
    Ok((values, Placeholders::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stat(name: &str, map: &str) -> StatReference {
        StatReference::new("c", name)
            .with_dimensions([("map".to_string(), map.to_string())].into())
    }

    #[test]
    fn test_wildcard_samples_become_distinct() {
        let samples = SampleValues::from([(stat("kills", "*"), vec![1.0, 2.0, 3.0])]);
        let (values, placeholders) = expand_samples(&samples, &StatReference::new("c", "total")).unwrap();

        assert!(placeholders.is_empty());
        assert_eq!(values.len(), 3);
        assert_eq!(values.get(&stat("kills", "sample_2")), Some(&3.0));
    }

    #[test]
    fn test_concrete_reference_keeps_last_sample() {
        let samples = SampleValues::from([(StatReference::new("c", "shots"), vec![4.0, 9.0])]);
        let (values, _) = expand_samples(&samples, &StatReference::new("c", "total")).unwrap();
        assert_eq!(values.get(&StatReference::new("c", "shots")), Some(&9.0));
    }

    #[test]
    fn test_placeholder_mode_uses_derived_dimensions() {
        let samples = SampleValues::from([(stat("kills", "*"), vec![5.0])]);
        let (values, placeholders) = expand_samples(&samples, &stat("ratio", "*")).unwrap();
        assert_eq!(placeholders.get("map").map(String::as_str), Some("*"));
        assert_eq!(values.get(&stat("kills", "*")), Some(&5.0));
    }

    #[test]
    fn test_placeholder_mode_rejects_multiple_samples() {
        let samples = SampleValues::from([(stat("kills", "*"), vec![1.0, 2.0])]);
        let err = expand_samples(&samples, &stat("ratio", "*")).unwrap_err();
        assert_eq!(
            err,
            EvalError::InvalidSampleCount {
                reference: "c.kills{map:\"*\"}".into(),
                count: 2,
            }
        );
    }

    #[test]
    fn test_placeholder_mode_rejects_empty_list() {
        let samples = SampleValues::from([(stat("kills", "*"), vec![])]);
        assert!(expand_samples(&samples, &stat("ratio", "*")).is_err());
    }
}
