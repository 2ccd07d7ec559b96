use std::sync::LazyLock;

use regex::Regex;

use crate::style;

pub fn get_system_prompt() -> &'static str {
    r#"You are a highly skilled writing assistant specialized in transforming robotic or overly technical text into clear, engaging, and human-like blog-style content.

Your task is to:
- Maintain the original meaning and factual accuracy.
- Use a natural, conversational tone appropriate for blog readers.
- Organize content using clear **headings**, **subheadings**, and **bullet points** or **numbered lists** where appropriate.
- Highlight key ideas with formatting if needed (e.g., bold or italics).
- Add helpful transitions and context to improve readability.
- Ensure the final result reads like a professional and informative blog post.
- Keep the blog post at least 1500 words minimum."#
}

/// The user turn: style instructions, then the original text, then an open
/// "Humanized version:" slot for the model to fill.
pub fn build_user_prompt(text: &str, style_id: &str) -> String {
    format!(
        "{}\n\nOriginal text:\n{}\n\nHumanized version:",
        style::resolve(style_id),
        text
    )
}

// Non-greedy and dot-matches-newline so each span is removed on its own.
static THINK_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<think>.*?</think>").expect("valid think-block regex"));

/// Strip `<think>...</think>` reasoning spans and surrounding whitespace.
/// An unterminated `<think>` is left alone.
pub fn sanitize_output(text: &str) -> String {
    let mut s = text.to_string();
    // Removing one span can splice its neighbours into a new complete pair.
    while THINK_BLOCK.is_match(&s) {
        s = THINK_BLOCK.replace_all(&s, "").into_owned();
    }
    s.trim().to_string()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_output() {
        assert_eq!(sanitize_output("A<think>B</think>C"), "AC");
        assert_eq!(
            sanitize_output("<think>\nplanning\nthe rewrite\n</think>\n\nHello, world!\n"),
            "Hello, world!"
        );
        assert_eq!(
            sanitize_output("one <think>x</think>two <think>y</think>three"),
            "one two three"
        );
        assert_eq!(sanitize_output("  Hello, world!  "), "Hello, world!");
        assert_eq!(sanitize_output(""), "");
    }

    #[test]
    fn test_sanitize_spliced_markers() {
        assert_eq!(sanitize_output("<thi<think>x</think>nk>secret</think>Answer"), "Answer");
        assert_eq!(sanitize_output("<<think>a</think>think>b</thi<think>c</think>nk>done"), "done");
    }

    #[test]
    fn test_sanitize_keeps_unterminated_marker() {
        assert_eq!(sanitize_output("<think>never closed"), "<think>never closed");
        assert_eq!(sanitize_output("done</think> tail"), "done</think> tail");
    }

    #[test]
    fn test_sanitize_idempotent() {
        let samples = [
            "A<think>B</think>C",
            "  plain text  ",
            "<think>a</think><think>b</think>",
            "<thi<think>x</think>nk>secret</think>Answer",
            "<<think>a</think>think>b</thi<think>c</think>nk>done",
            "\n\n# Heading\n\n- bullet\n",
        ];
        for raw in samples {
            let once = sanitize_output(raw);
            assert_eq!(sanitize_output(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn test_build_user_prompt() {
        let prompt = build_user_prompt("The system is operational.", "professional");
        assert!(prompt.starts_with(style::resolve("professional")));
        assert!(prompt.ends_with("\n\nOriginal text:\nThe system is operational.\n\nHumanized version:"));
    }

    #[test]
    fn test_build_user_prompt_unknown_style() {
        assert_eq!(
            build_user_prompt("hi", "nope"),
            build_user_prompt("hi", "conversational")
        );
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t"), 0);
        assert_eq!(word_count("one two\nthree\tfour "), 4);
    }
}
