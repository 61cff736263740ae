use crate::models::ScanVerdict;

/// Outbound-content PII screening.
///
/// Implementations are pure functions of the content and their construction
/// configuration: no I/O, nothing retained between calls, safe to invoke
/// concurrently. A well-formed scan never fails; an empty finding list is
/// the expected clear outcome.
pub trait IScreener: Send + Sync {
    /// Scan one piece of outbound content.
    fn check(&self, content: &str) -> ScanVerdict;
}
