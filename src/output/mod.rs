/// Writes the rendered report to standard output.
pub mod formatter;
/// Builds the plain-text validation report.
pub mod report;
