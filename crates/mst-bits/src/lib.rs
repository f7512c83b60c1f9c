#![deny(missing_docs)]
#![doc = "Stateless rotation, popcount and class-number arithmetic over `order`-bit cyclic fields packed into a `u64`."]

mod number;

pub use number::{
    bit_at, class_number, count_off_in_range, count_on, count_on_in_range, distance_schema,
    is_class_number, is_off, is_on, is_subset, mask, places, rotate_left_one, rotate_to,
    rotation_period,
};
