use mst_core::AlgebraicSystem;
use mst_desc::{Descriptor, DescriptorProfile};
use mst_struct::Structure;
use proptest::prelude::*;

fn in_bounds(value: f32) -> bool {
    (0.0..=100.0 + 1e-3).contains(&value)
}

#[test]
fn every_structure_of_order_ten_is_bounded() {
    let system = AlgebraicSystem::new(2, 10).unwrap();
    for number in 0..(1u64 << 10) {
        let s = Structure::from_number(system, number).unwrap();
        let profile = DescriptorProfile::compute(&s);
        for descriptor in Descriptor::ALL {
            assert!(in_bounds(profile.get(descriptor)), "{s}: {descriptor:?}");
        }
    }
}

proptest! {
    #[test]
    fn descriptors_stay_in_range(order in 1u8..=64, raw in any::<u64>(), degree in 0u8..4) {
        let system = AlgebraicSystem::new(degree, order).unwrap();
        let s = Structure::from_number(system, raw & system.mask()).unwrap();
        let profile = DescriptorProfile::compute(&s);
        for descriptor in Descriptor::ALL {
            prop_assert!(in_bounds(profile.get(descriptor)), "{:?} = {}", descriptor, profile.get(descriptor));
        }
    }

    #[test]
    fn descriptors_are_reproducible(order in 1u8..=32, raw in any::<u64>()) {
        let system = AlgebraicSystem::new(1, order).unwrap();
        let a = Structure::from_number(system, raw & system.mask()).unwrap();
        let b = Structure::from_code(system, a.structural_code()).unwrap();
        prop_assert_eq!(DescriptorProfile::compute(&a), DescriptorProfile::compute(&b));
    }
}
