//! YouTube video-id extraction for catalog entries carrying a source link.
//!
//! The link field accepts either a full URL or a bare video id, so readers
//! get the canonical 11-character id back regardless of which form was
//! submitted. Unrecognizable input is not an error; the entry simply has no
//! derivable id.

use std::sync::OnceLock;

use regex::Regex;

/// Matches the video id in the URL forms we accept: `watch?v=`, `youtu.be/`,
/// `embed/`, and `shorts/`.
const URL_PATTERN: &str =
    r"(?:youtube\.com/(?:watch\?(?:.*&)?v=|embed/|shorts/)|youtu\.be/)([A-Za-z0-9_-]{11})";

/// Matches a bare 11-character video id.
const BARE_ID_PATTERN: &str = r"^[A-Za-z0-9_-]{11}$";

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(URL_PATTERN).expect("video URL pattern is valid"))
}

fn bare_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(BARE_ID_PATTERN).expect("video id pattern is valid"))
}

/// Extract the 11-character video id from a link or bare id.
///
/// Returns `None` when the input matches neither form.
pub fn extract_video_id(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(captures) = url_regex().captures(trimmed) {
        return Some(captures[1].to_string());
    }

    if bare_id_regex().is_match(trimmed) {
        return Some(trimmed.to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn extracts_from_watch_url_with_extra_params() {
        assert_eq!(
            extract_video_id("https://youtube.com/watch?list=PL123&v=dQw4w9WgXcQ&t=42").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn extracts_from_short_url() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn extracts_from_embed_and_shorts_urls() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/shorts/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn accepts_a_bare_id() {
        assert_eq!(
            extract_video_id("dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(extract_video_id(""), None);
        assert_eq!(extract_video_id("not a link"), None);
        assert_eq!(extract_video_id("https://example.com/watch?v=short"), None);
        assert_eq!(extract_video_id("tooshort"), None);
    }
}
