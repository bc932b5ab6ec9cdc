//! Resolution of image sources against the application base path.

use crate::config::BasePath;

/// Joins the base path and a root-relative path verbatim. No encoding or validation.
pub fn resolve_source(base_path: &BasePath, path: &str) -> String {
    let mut src = String::with_capacity(base_path.as_str().len() + path.len());
    src.push_str(base_path.as_str());
    src.push_str(path);
    src
}
