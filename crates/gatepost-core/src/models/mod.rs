mod category;
mod identity;
mod verdict;

pub use category::PatternCategory;
pub use identity::IdentityRecord;
pub use verdict::{Finding, FindingKind, IdentityField, ScanVerdict};
