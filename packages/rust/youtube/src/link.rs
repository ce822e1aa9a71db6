//! YouTube link parsing.
//!
//! Recognizes the three common video link shapes: `youtu.be/<id>` short
//! links, `/shorts/<id>` paths, and the standard `watch?v=<id>` form.

use url::Url;

/// Extract the video id from a YouTube link.
///
/// Returns `None` for unparseable URLs, non-video links, and empty id
/// segments. The host is not otherwise validated: any URL with a `v` query
/// parameter yields that parameter.
pub fn parse_video_id(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;

    if url.host_str() == Some("youtu.be") {
        let id = url.path().strip_prefix('/').unwrap_or(url.path());
        return (!id.is_empty()).then(|| id.to_string());
    }

    if url.path().starts_with("/shorts/") {
        let id = url.path().split('/').nth(2).unwrap_or("");
        return (!id.is_empty()).then(|| id.to_string());
    }

    url.query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_url() {
        assert_eq!(
            parse_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".into())
        );
    }

    #[test]
    fn watch_url_with_extra_params() {
        assert_eq!(
            parse_video_id("https://www.youtube.com/watch?v=abc123&list=PL456&index=2"),
            Some("abc123".into())
        );
    }

    #[test]
    fn mobile_host_still_uses_v_param() {
        assert_eq!(
            parse_video_id("https://m.youtube.com/watch?v=xyz789"),
            Some("xyz789".into())
        );
    }

    #[test]
    fn short_link() {
        assert_eq!(
            parse_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".into())
        );
    }

    #[test]
    fn short_link_ignores_query() {
        assert_eq!(
            parse_video_id("https://youtu.be/dQw4w9WgXcQ?t=30"),
            Some("dQw4w9WgXcQ".into())
        );
    }

    #[test]
    fn shorts_path() {
        assert_eq!(
            parse_video_id("https://www.youtube.com/shorts/abCDeFg"),
            Some("abCDeFg".into())
        );
    }

    #[test]
    fn empty_segments_yield_none() {
        assert_eq!(parse_video_id("https://youtu.be/"), None);
        assert_eq!(parse_video_id("https://www.youtube.com/shorts/"), None);
        assert_eq!(parse_video_id("https://www.youtube.com/watch?v="), None);
    }

    #[test]
    fn non_video_links_yield_none() {
        assert_eq!(
            parse_video_id("https://www.youtube.com/playlist?list=PL123"),
            None
        );
        assert_eq!(parse_video_id("https://vimeo.com/76979871"), None);
        // Embed URLs are not a recognized shape.
        assert_eq!(parse_video_id("https://www.youtube.com/embed/abc123"), None);
    }

    #[test]
    fn invalid_input_yields_none() {
        assert_eq!(parse_video_id("not a link"), None);
        assert_eq!(parse_video_id(""), None);
        assert_eq!(parse_video_id("youtube.com/watch?v=missing-scheme"), None);
    }
}
