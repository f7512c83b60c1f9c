use mst_core::AlgebraicSystem;
use mst_struct::Structure;
use mst_variety::{EnumerationOptions, Qualifier, VarietyEnumerator, VarietyKind};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = VarietyKind> {
    prop_oneof![Just(VarietyKind::Classes), Just(VarietyKind::Instances)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn parallel_output_is_sequential_output(
        order in 1u8..=11,
        kind in kind_strategy(),
        limit in 1usize..400,
        chunk_size in 1u64..64,
        threads in 1usize..4,
        min_level in 0u8..4,
        spread in 0u8..6,
    ) {
        let system = AlgebraicSystem::new(0, order).unwrap();
        let qualifier = Qualifier::new().with_levels(min_level, min_level + spread);
        let enumerator = VarietyEnumerator::new(system);
        let sequential = enumerator
            .run(kind, Some(&qualifier), &EnumerationOptions::with_limit(limit))
            .unwrap();
        let options = EnumerationOptions {
            chunk_size,
            ..EnumerationOptions::with_limit(limit).parallel(threads)
        };
        let parallel = enumerator.run(kind, Some(&qualifier), &options).unwrap();

        let seq: Vec<u64> = sequential.structures.iter().map(Structure::number).collect();
        let par: Vec<u64> = parallel.structures.iter().map(Structure::number).collect();
        prop_assert_eq!(seq, par);
        prop_assert_eq!(sequential.candidates_visited, parallel.candidates_visited);
        prop_assert!(!parallel.cancelled);
    }

    #[test]
    fn instance_results_ascend_and_respect_the_limit(order in 1u8..=12, limit in 1usize..200) {
        let system = AlgebraicSystem::new(0, order).unwrap();
        let found = VarietyEnumerator::new(system)
            .enumerate(VarietyKind::Instances, None, &EnumerationOptions::with_limit(limit))
            .unwrap();
        let expected = (1u128 << order).min(limit as u128) as usize;
        prop_assert_eq!(found.len(), expected);
        prop_assert!(found.windows(2).all(|w| w[0].number() < w[1].number()));
    }
}
