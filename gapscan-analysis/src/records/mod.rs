//! Gap record building: identifiers, remediation text, risk notes.

pub mod builder;
pub mod remediation;

pub use builder::{build_records, unix_now};
pub use remediation::{effort_weeks, remediation_for};
