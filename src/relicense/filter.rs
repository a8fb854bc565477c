//! Optional literal pre-filter applied before similarity scoring

/// Skips files that do not contain a marker string.
///
/// This is a fast path only: a file that passes is still scored, and a
/// filter without a marker accepts everything.
#[derive(Debug, Clone, Default)]
pub struct PreFilter {
    marker: Option<String>,
}

impl PreFilter {
    pub fn new(marker: Option<String>) -> Self {
        // An empty marker would match everything anyway.
        let marker = marker.filter(|m| !m.is_empty());
        Self { marker }
    }

    pub fn accepts(&self, text: &str) -> bool {
        match &self.marker {
            Some(marker) => text.contains(marker.as_str()),
            None => true,
        }
    }
}
