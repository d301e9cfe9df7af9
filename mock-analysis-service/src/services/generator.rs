use crate::models::requests::AnalysisRequest;
use crate::services::templates::Genre;
use crate::utils::text::{char_count, has_special_chars};

pub const NO_CONTENT_MESSAGE: &str =
    "No content was provided for analysis. Please enter more content.";

const SHORT_CONTENT_LIMIT: usize = 50;
const DETAILED_CONTENT_LIMIT: usize = 1000;
const VERY_DETAILED_CONTENT_LIMIT: usize = 5000;

/// Analysis depth chosen from the reading content length (in characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentDepth {
    Empty,
    TooShort,
    Basic,
    Detailed,
    VeryDetailed,
}

impl ContentDepth {
    pub fn classify(length: usize) -> ContentDepth {
        match length {
            0 => ContentDepth::Empty,
            n if n < SHORT_CONTENT_LIMIT => ContentDepth::TooShort,
            n if n > VERY_DETAILED_CONTENT_LIMIT => ContentDepth::VeryDetailed,
            n if n > DETAILED_CONTENT_LIMIT => ContentDepth::Detailed,
            _ => ContentDepth::Basic,
        }
    }

    /// Heading label and lead-in wording for the full analysis.
    fn wording(self) -> (&'static str, &'static str) {
        match self {
            ContentDepth::VeryDetailed => (
                "very detailed analysis",
                "an in-depth reading of the rich material provided",
            ),
            ContentDepth::Detailed => ("detailed analysis", "a reading of ample material"),
            _ => ("basic analysis", "a reading of the material provided"),
        }
    }
}

/// Builds the templated analysis text. Deterministic for a given request.
pub fn generate_analysis(request: &AnalysisRequest) -> String {
    let genre_tag = request.genre.trim().to_uppercase();
    let template = Genre::from_tag(&genre_tag).template();
    let length = char_count(&request.reading_content);

    let depth = ContentDepth::classify(length);
    match depth {
        ContentDepth::Empty => return NO_CONTENT_MESSAGE.to_string(),
        ContentDepth::TooShort => {
            return format!(
                "The content for '{}' is too short. More text is needed for an analysis of {}.",
                request.book_title, template.analysis_focus
            )
        }
        _ => {}
    }

    let (detail, lead_in) = depth.wording();
    let special_chars = if has_special_chars(&request.reading_content) {
        ", with special characters and symbols handled properly"
    } else {
        ""
    };

    format!(
        "\"{title}\" by {author} - {genre} {detail}\n\
         \n\
         Based on {lead_in}, this work is {sample}\n\
         \n\
         Key characteristics:\n\
         • The analysis of {focus} comes through clearly\n\
         • Core elements such as {keywords} are covered systematically\n\
         • {length} characters of text provided an appropriate amount of content{special_chars}\n\
         \n\
         Overall: this book is a valuable work offering readers useful insight in the field of {genre_lower}.",
        title = request.book_title,
        author = request.book_author,
        genre = genre_tag,
        sample = template.sample_content,
        focus = template.analysis_focus,
        keywords = template.keywords[..3].join(", "),
        genre_lower = genre_tag.to_lowercase(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(genre: &str, content: &str) -> AnalysisRequest {
        AnalysisRequest {
            user_id: "user-1".to_string(),
            book_id: "book-1".to_string(),
            book_title: "The Vegetarian".to_string(),
            book_author: "Han Kang".to_string(),
            genre: genre.to_string(),
            reading_content: content.to_string(),
        }
    }

    #[test]
    fn classifies_boundaries() {
        let cases = [
            (0, ContentDepth::Empty),
            (1, ContentDepth::TooShort),
            (49, ContentDepth::TooShort),
            (50, ContentDepth::Basic),
            (1000, ContentDepth::Basic),
            (1001, ContentDepth::Detailed),
            (5000, ContentDepth::Detailed),
            (5001, ContentDepth::VeryDetailed),
        ];
        for (length, expected) in cases {
            assert_eq!(ContentDepth::classify(length), expected, "length {}", length);
        }
    }

    #[test]
    fn empty_content_gets_fixed_message() {
        assert_eq!(generate_analysis(&request("FICTION", "")), NO_CONTENT_MESSAGE);
    }

    #[test]
    fn short_content_names_title_and_focus() {
        let text = generate_analysis(&request("FICTION", &"a".repeat(49)));
        assert!(text.contains("too short"));
        assert!(text.contains("The Vegetarian"));
        assert!(text.contains(Genre::Fiction.template().analysis_focus));
    }

    #[test]
    fn wording_follows_length_bucket() {
        let basic = generate_analysis(&request("SCIENCE", &"a".repeat(50)));
        assert!(basic.contains("basic analysis"));

        let at_thousand = generate_analysis(&request("SCIENCE", &"a".repeat(1000)));
        assert!(at_thousand.contains("basic analysis"));

        let detailed = generate_analysis(&request("SCIENCE", &"a".repeat(1001)));
        assert!(detailed.contains("detailed analysis"));
        assert!(!detailed.contains("very detailed analysis"));

        let at_five_thousand = generate_analysis(&request("SCIENCE", &"a".repeat(5000)));
        assert!(!at_five_thousand.contains("very detailed analysis"));

        let very = generate_analysis(&request("SCIENCE", &"a".repeat(5001)));
        assert!(very.contains("very detailed analysis"));
    }

    #[test]
    fn hangul_length_is_counted_in_characters() {
        // 25 Hangul syllables are 75 bytes but still too short.
        let text = generate_analysis(&request("FICTION", &"가".repeat(25)));
        assert!(text.contains("too short"));
    }

    #[test]
    fn fiction_embeds_its_focus_and_keywords() {
        let content = "인물 갈등과 주제를 다룬 본문입니다. ".repeat(4);
        assert!(char_count(&content) >= 50);

        let text = generate_analysis(&request("FICTION", &content));
        let template = Genre::Fiction.template();
        assert!(text.contains(template.analysis_focus));
        assert!(text.contains("character, conflict, theme"));
        assert!(text.contains("FICTION basic analysis"));
    }

    #[test]
    fn unknown_genre_uses_non_fiction_template_but_keeps_tag() {
        let text = generate_analysis(&request("poetry", &"b".repeat(60)));
        assert!(text.contains(Genre::NonFiction.template().analysis_focus));
        assert!(text.contains("POETRY basic analysis"));
        assert!(text.contains("in the field of poetry"));
    }

    #[test]
    fn mentions_special_characters_only_when_present() {
        let plain = generate_analysis(&request("HISTORY", &"c".repeat(60)));
        assert!(!plain.contains("special characters"));

        let quoted = format!("{}\"quoted\" {{braces}}", "c".repeat(60));
        let special = generate_analysis(&request("HISTORY", &quoted));
        assert!(special.contains("special characters"));
    }

    #[test]
    fn is_deterministic() {
        let req = request("PHILOSOPHY", &"d".repeat(2000));
        assert_eq!(generate_analysis(&req), generate_analysis(&req));
    }
}
