#![deny(missing_docs)]
#![doc = "Enumeration of structure classes, instances and modality substructures, \
filtered by descriptor qualifiers and capped by a result limit."]

/// Cooperative cancellation.
pub mod cancel;
/// The variety enumerator.
pub mod enumerate;
/// Enumeration kinds.
pub mod kind;
/// Run options.
pub mod options;
/// Qualifiers and structure predicates.
pub mod qualifier;
/// Serializable run reports.
pub mod report;
mod space;

pub use cancel::CancellationToken;
pub use enumerate::{enumerate, EnumerationOutcome, VarietyEnumerator, TRACTABLE_ORDER};
pub use kind::VarietyKind;
pub use options::EnumerationOptions;
pub use qualifier::{
    load_qualifier, AcceptAll, DescriptorRange, LevelRange, Qualifier, QualifierDecision,
    RejectAll, StructurePredicate,
};
pub use report::EnumerationReport;
