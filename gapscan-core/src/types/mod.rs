//! Data model for the comparison engine.
//! Attribute sets and dimension templates are inputs, verdicts are
//! per-comparison intermediates, gap records are the durable output.

pub mod attributes;
pub mod collections;
pub mod dimensions;
pub mod gap;
pub mod verdict;

pub use attributes::{AttributeValue, DeviceAttributeSet};
pub use collections::{FxHashMap, FxHashSet};
pub use dimensions::{ComparatorKind, DimensionCategory, DimensionDefinition, DimensionTemplate};
pub use gap::{GapRecord, GapStatus, GapType, RiskTier, SeverityCategory, StandardCriticality};
pub use verdict::ComparisonVerdict;
