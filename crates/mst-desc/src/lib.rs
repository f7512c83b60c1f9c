#![deny(missing_docs)]
#![doc = "Descriptors derived from the places and distances of a structure. Every \
function is pure and depends only on `(order, places, distances)`; results are \
percentages in `[0, 100]`."]

mod arith;
pub mod behavior;
mod layout;
mod profile;
mod spread;

pub use arith::{beat, complexity};
pub use behavior::{behavior, is_empty_struct, is_valid_struct};
pub use layout::{balance, filling};
pub use profile::{Descriptor, DescriptorProfile};
pub use spread::{entropy, variance};
