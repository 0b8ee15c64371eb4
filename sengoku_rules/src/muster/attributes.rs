//! Attribute rolls for freshly provisioned characters.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// Roll starting attributes from a province baseline.
///
/// The attribute list is shuffled and the attribute drawn at position `i`
/// is worth `baseline - i`, floored at zero. The draw order is the only
/// randomness: earlier draws keep more of the baseline. Attributes missing
/// from the baseline count as zero.
///
/// Role-specific +1 bumps (the player's chosen advantage, a random
/// attribute for AI characters) are applied by the factory afterwards, not
/// folded into this pass.
pub fn roll_attributes(
    attributes: &[String],
    baseline: &BTreeMap<String, f64>,
    rng: &mut impl Rng,
) -> BTreeMap<String, f64> {
    let mut order: Vec<&String> = attributes.iter().collect();
    order.shuffle(rng);
    order
        .into_iter()
        .enumerate()
        .map(|(idx, attr)| {
            let base = baseline.get(attr).copied().unwrap_or(0.0);
            (attr.clone(), (base - idx as f64).max(0.0))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn attrs(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_every_attribute_gets_a_non_negative_value() {
        let attributes = attrs(&["str", "wit", "honor", "luck", "valor"]);
        let baseline = BTreeMap::from([("str".to_string(), 2.0), ("wit".to_string(), 0.5)]);

        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let rolled = roll_attributes(&attributes, &baseline, &mut rng);

            assert_eq!(rolled.len(), attributes.len());
            for attr in &attributes {
                assert!(rolled[attr] >= 0.0, "{attr} rolled negative");
            }
        }
    }

    #[test]
    fn test_single_attribute_keeps_its_baseline() {
        // Position 0 in the shuffle carries no decay.
        let attributes = attrs(&["str"]);
        let baseline = BTreeMap::from([("str".to_string(), 7.5)]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let rolled = roll_attributes(&attributes, &baseline, &mut rng);
        assert_eq!(rolled["str"], 7.5);
    }

    #[test]
    fn test_positional_decay_is_one_per_slot() {
        // With a flat baseline the rolled values reveal each attribute's
        // shuffle position: they must be exactly {100, 99, ..., 100-(n-1)}.
        let attributes = attrs(&["a", "b", "c", "d", "e"]);
        let baseline: BTreeMap<String, f64> =
            attributes.iter().map(|a| (a.clone(), 100.0)).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let rolled = roll_attributes(&attributes, &baseline, &mut rng);
        let mut values: Vec<f64> = rolled.values().copied().collect();
        values.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_eq!(values, vec![100.0, 99.0, 98.0, 97.0, 96.0]);
    }

    #[test]
    fn test_missing_baseline_counts_as_zero() {
        let attributes = attrs(&["str", "wit"]);
        let baseline = BTreeMap::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let rolled = roll_attributes(&attributes, &baseline, &mut rng);
        assert_eq!(rolled["str"], 0.0);
        assert_eq!(rolled["wit"], 0.0);
    }

    #[test]
    fn test_same_seed_same_roll() {
        let attributes = attrs(&["str", "wit", "honor"]);
        let baseline = BTreeMap::from([
            ("str".to_string(), 5.0),
            ("wit".to_string(), 3.0),
            ("honor".to_string(), 4.0),
        ]);

        let roll = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            roll_attributes(&attributes, &baseline, &mut rng)
        };
        assert_eq!(roll(9), roll(9));
    }
}
