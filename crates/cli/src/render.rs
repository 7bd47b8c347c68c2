//! Plain-text rendering of the view state.

use std::fmt::Write;

use apod_client::ViewState;
use apod_core::date::format_iso_date;
use apod_core::text::excerpt;
use apod_core::RequestState;

/// Explanation excerpt length when not printing in full.
const EXCERPT_CHARS: usize = 300;

pub(crate) fn render(state: &ViewState, full: bool) -> String {
    let mut out = String::new();

    let record = match &state.picture {
        RequestState::Success(record) => record,
        RequestState::Failed(_) => return "Something went wrong.\n".to_string(),
        RequestState::Idle | RequestState::Loading => return "Loading NASA data...\n".to_string(),
    };

    if !record.is_image() {
        let _ = writeln!(out, "NASA APOD");
        let _ = writeln!(
            out,
            "Today's media is not an image. Please select another date."
        );
        let _ = writeln!(out, "{}", record.url);
        return out;
    }

    let _ = writeln!(out, "{}", record.title);
    let _ = writeln!(out, "{}", format_iso_date(record.date));
    let _ = writeln!(out, "{}", record.url);
    if let Some(hd) = &record.hd_url {
        let _ = writeln!(out, "HD: {}", hd);
    }
    let _ = writeln!(out);

    let explanation = if full {
        record.explanation.clone()
    } else {
        excerpt(&record.explanation, EXCERPT_CHARS)
    };
    let _ = writeln!(out, "{}", explanation);

    match &state.commentary {
        RequestState::Success(commentary) => {
            let _ = writeln!(out);
            let _ = writeln!(out, "AI Says: {}", commentary.text);
        }
        RequestState::Loading => {
            let _ = writeln!(out);
            let _ = writeln!(out, "AI is thinking...");
        }
        RequestState::Idle | RequestState::Failed(_) => {}
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use apod_core::{CommentaryResult, FetchError, MediaType, PictureRecord};
    use time::macros::date;

    fn nebula(explanation: &str) -> PictureRecord {
        PictureRecord {
            date: date!(2024 - 01 - 01),
            title: "Nebula".to_string(),
            explanation: explanation.to_string(),
            media_type: MediaType::Image,
            url: "https://x/img.jpg".to_string(),
            hd_url: Some("https://x/hd.jpg".to_string()),
        }
    }

    fn loaded(record: PictureRecord) -> ViewState {
        ViewState {
            picture: RequestState::Success(record),
            ..ViewState::default()
        }
    }

    #[test]
    fn renders_an_image_record() {
        let out = render(&loaded(nebula("A bright nebula...")), false);
        assert!(out.starts_with("Nebula\n2024-01-01\nhttps://x/img.jpg\nHD: https://x/hd.jpg\n"));
        assert!(out.contains("A bright nebula..."));
        assert!(!out.contains("AI Says"));
    }

    #[test]
    fn long_explanations_are_excerpted_unless_full() {
        let long = "x".repeat(EXCERPT_CHARS + 50);
        let short = render(&loaded(nebula(&long)), false);
        assert!(short.contains(&format!("{}...", "x".repeat(EXCERPT_CHARS))));
        assert!(!short.contains(&"x".repeat(EXCERPT_CHARS + 1)));

        let full = render(&loaded(nebula(&long)), true);
        assert!(full.contains(&long));
    }

    #[test]
    fn renders_commentary() {
        let mut state = loaded(nebula("A bright nebula..."));
        state.commentary = RequestState::Success(CommentaryResult::now("Stars are born"));
        assert!(render(&state, false).ends_with("AI Says: Stars are born\n"));

        state.commentary = RequestState::Loading;
        assert!(render(&state, false).contains("AI is thinking..."));
    }

    #[test]
    fn video_gets_a_notice() {
        let mut record = nebula("A launch.");
        record.media_type = MediaType::Video;
        let out = render(&loaded(record), false);
        assert!(out.contains("not an image"));
        assert!(out.contains("https://x/img.jpg"));
    }

    #[test]
    fn failure_and_loading_views() {
        let failed = ViewState {
            picture: RequestState::Failed(FetchError::PictureFetchFailed),
            ..ViewState::default()
        };
        assert_eq!(render(&failed, false), "Something went wrong.\n");
        assert_eq!(render(&ViewState::default(), false), "Loading NASA data...\n");
    }
}
