use mst_core::AlgebraicSystem;
use mst_struct::{BitRange, Structure};

fn structure(order: u8, code: &str) -> Structure {
    Structure::from_code(AlgebraicSystem::new(2, order).unwrap(), code).unwrap()
}

#[test]
fn level_accessors() {
    let s = structure(12, "0,4,7");
    assert_eq!(s.place_at_level(2).unwrap(), 7);
    assert_eq!(s.distance_at_level(1), 3);
    assert_eq!(s.distance_at_level(3), 0);
    let err = s.place_at_level(3).unwrap_err();
    assert_eq!(err.code(), "level-out-of-range");
    assert_eq!(err.info().context.get("level").map(String::as_str), Some("3"));
}

#[test]
fn ranges_follow_distances_when_first_place_is_zero() {
    let s = structure(12, "0,4,7");
    assert_eq!(s.range_at_level(0).unwrap(), BitRange { start: 0, length: 4 });
    assert_eq!(s.range_at_level(1).unwrap(), BitRange { start: 4, length: 3 });
    assert_eq!(s.range_at_level(2).unwrap(), BitRange { start: 7, length: 5 });
}

#[test]
fn last_range_is_clipped_at_cycle_end() {
    // Places {2, 5, 9} in order 12: the last run 9..14 overshoots by 2.
    let s = structure(12, "2,5,9");
    assert_eq!(s.range_at_level(0).unwrap(), BitRange { start: 2, length: 3 });
    assert_eq!(s.range_at_level(2).unwrap(), BitRange { start: 9, length: 3 });
}

#[test]
fn single_level_range_is_clipped() {
    // One place at 3: distance 8 spans 3..11, overshooting the order by 3.
    let s = structure(8, "3");
    assert_eq!(s.range_at_level(0).unwrap(), BitRange { start: 3, length: 5 });
    let at_zero = structure(8, "0");
    assert_eq!(at_zero.range_at_level(0).unwrap(), BitRange { start: 0, length: 8 });
}

#[test]
fn range_past_level_is_an_error() {
    let s = structure(8, "1,2");
    assert_eq!(s.range_at_level(2).unwrap_err().code(), "level-out-of-range");
    assert!(structure(8, "").range_at_level(0).is_err());
}

#[test]
fn ranges_never_leave_the_cycle() {
    let system = AlgebraicSystem::new(2, 10).unwrap();
    for number in 1..(1u64 << 10) {
        let s = Structure::from_number(system, number).unwrap();
        for level in 0..s.level() as usize {
            let range = s.range_at_level(level).unwrap();
            assert!(
                u32::from(range.start) + u32::from(range.length) <= 10,
                "{s} level {level}: {range:?}"
            );
        }
    }
}
