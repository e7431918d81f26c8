//! Python bindings, built with the `python` feature.

use crate::chat::ChatFilter;
use crate::config::PalindromeConfig;
use crate::highlight::PalindromeHighlighter;
use pyo3::prelude::*;

/// Mask denylisted words in a line
/// Returns: (filtered_text, masked_count)
#[pyfunction]
fn mask_text(text: String) -> PyResult<(String, u64)> {
    let out = ChatFilter::default().filter(&text);
    Ok((out.text, out.masked as u64))
}

/// Mask many lines at once (parallel, order preserved)
#[pyfunction]
fn mask_lines(lines: Vec<String>) -> PyResult<Vec<(String, u64)>> {
    let results = ChatFilter::default()
        .filter_all(&lines)
        .into_iter()
        .map(|out| (out.text, out.masked as u64))
        .collect();
    Ok(results)
}

/// Wrap palindromic words in a marker
/// Returns: (highlighted_text, palindrome_count)
#[pyfunction]
#[pyo3(signature = (text, marker = "**"))]
fn highlight_palindromes(text: String, marker: &str) -> PyResult<(String, u64)> {
    let config = PalindromeConfig {
        marker: marker.to_string(),
        ..Default::default()
    };
    let highlighter = PalindromeHighlighter::new(config)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
    let out = highlighter.highlight(&text);
    Ok((out.text, out.count as u64))
}

#[pymodule]
fn rust_text_filter(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mask_text, m)?)?;
    m.add_function(wrap_pyfunction!(mask_lines, m)?)?;
    m.add_function(wrap_pyfunction!(highlight_palindromes, m)?)?;
    Ok(())
}
