//! Completion criteria for vidflow progress scoring.
//!
//! Every field that contributes to a phase's progress is looked up in a static
//! table keyed by `(aspect, field)`, yielding one of eight
//! [`CompletionCriteria`] kinds. The [`evaluate`] module then decides whether
//! the field's current [`FieldValue`] satisfies that kind.
//!
//! Both halves are pure: no I/O, no logging, no errors. Unknown keys fail
//! closed to [`CompletionCriteria::FilledOnly`], mismatched value shapes
//! evaluate to "not done".

pub mod aspect;
pub mod evaluate;
pub mod table;

pub use aspect::Aspect;
pub use evaluate::{FIXME_MARKER, FieldValue, is_complete};
pub use table::{CRITERIA_TABLE, CompletionCriteria, criteria_for, criteria_for_key, fields};
