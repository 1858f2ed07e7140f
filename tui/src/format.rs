/// Elapsed-time readout, one decimal place.
pub(crate) fn format_elapsed(seconds: f64) -> String {
    format!("Time: {seconds:.1}s")
}

/// Field contents padded to the field width.
pub(crate) fn format_points_field(text: &str, width: usize) -> String {
    format!("[{text:<width$}]")
}

/// Button face, e.g. `[ Play ]`.
pub(crate) fn format_button(label: &str) -> String {
    format!("[ {label} ]")
}
