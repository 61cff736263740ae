//! The outbound-submission guard: every user-authored string goes through
//! the screening engine immediately before transmission.

use gatepost_screen::ScreenEngine;

/// Screen each labeled outbound field; return an error naming the triggered
/// kinds (never the matched text) if any field is blocked.
///
/// With the pass-through override active this warns and lets everything
/// through — the override removes every guarantee and must stay loud.
pub fn screen_outbound(engine: &ScreenEngine, fields: &[(&str, &str)]) -> anyhow::Result<()> {
    if engine.is_disabled() {
        tracing::warn!("PII screening disabled by override; submitting unchecked content");
        eprintln!("warning: PII screening is disabled; outbound content is NOT checked");
        return Ok(());
    }

    for (label, content) in fields {
        let verdict = engine.check(content);
        if verdict.blocked {
            anyhow::bail!(
                "submission aborted: {} appears to contain PII ({})",
                label,
                verdict.labels().join(", ")
            );
        }
    }
    Ok(())
}
