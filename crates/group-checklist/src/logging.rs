//! Target names for filtering the widget layer's `tracing` output.

/// Target names for log filtering.
pub mod targets {
    /// Widget target.
    pub const WIDGET: &str = "group_checklist::widget";
    /// Signal emission target.
    pub const SIGNAL: &str = "group_checklist::signal";
    /// Presentation option reader target.
    pub const OPTIONS: &str = "group_checklist::options";
}
