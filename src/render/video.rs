//! Video id extraction from authored platform URLs.

use regex::Regex;

/// Extracts 11-character YouTube video ids from the URL shapes editors
/// actually paste: `watch?v=`, `youtu.be/`, and `/embed/`.
pub struct VideoIdExtractor {
    patterns: Vec<Regex>,
}

impl VideoIdExtractor {
    /// Create an extractor with the known URL patterns compiled.
    pub fn new() -> Self {
        let patterns = [
            r"[?&]v=([A-Za-z0-9_-]{11})(?:[&#]|$)",
            r"youtu\.be/([A-Za-z0-9_-]{11})(?:[?&#/]|$)",
            r"/embed/([A-Za-z0-9_-]{11})(?:[?&#/]|$)",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("video id pattern is valid"))
        .collect();

        Self { patterns }
    }

    /// Extract a video id from a URL, or None if no known shape matches.
    pub fn extract(&self, url: &str) -> Option<String> {
        self.patterns
            .iter()
            .find_map(|re| re.captures(url))
            .map(|caps| caps[1].to_string())
    }

    /// Build the embeddable player URL for an extracted id.
    pub fn embed_url(video_id: &str) -> String {
        format!("https://www.youtube.com/embed/{}", video_id)
    }
}

impl Default for VideoIdExtractor {
    fn default() -> Self {
        Self::new()
    }
}
