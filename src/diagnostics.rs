//! Diagnostic sink for the menu core
//!
//! The core reports what it is doing (index moves, stored results) to a
//! [`Diagnostics`] collaborator. Nothing it records feeds back into the
//! menu's decisions.

/// Records one diagnostic message
pub trait Diagnostics {
    fn record(&self, message: &str);
}

/// Forwards diagnostics to `tracing` at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn record(&self, message: &str) {
        tracing::debug!(target: "interactive_menu::core", "{}", message);
    }
}

/// Discards every diagnostic
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Diagnostics for Silent {
    fn record(&self, _message: &str) {}
}

impl<F> Diagnostics for F
where
    F: Fn(&str),
{
    fn record(&self, message: &str) {
        self(message)
    }
}
