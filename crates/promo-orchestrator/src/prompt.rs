//! Prompt builders for the drafting stages
//!
//! Each builder composes a fixed specialist directive with the verbatim
//! caller input. The revision prompt enumerates the three original posts,
//! 1-indexed, followed by the feedback text.

use promo_core::POST_COUNT;

const CONTENT_DIRECTIVE: &str = "You are a specialist in creating social media content. \
Generate three social media posts in an authentic, creative style full of energy, \
hashtags, and modern expressions. Be concise.";

const REVISION_DIRECTIVE: &str = "You are a specialist in revising advertising texts. \
Revise the given three posts based on the provided feedback while maintaining the \
social media style.";

/// Build the content stage prompt for a marketing request
pub fn build_content_prompt(question: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(CONTENT_DIRECTIVE);
    prompt.push_str("\n\n");
    prompt.push_str(&format!("User request: {}\n", question));
    prompt.push_str("Generate three social media posts with an authentic and creative tone.\n");

    prompt
}

/// Build the revision stage prompt from the original posts and feedback.
///
/// Only the first three posts are enumerated.
pub fn build_revision_prompt(posts: &[String], feedback: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(REVISION_DIRECTIVE);
    prompt.push_str("\n\nOriginal posts:\n");
    for (idx, post) in posts.iter().take(POST_COUNT).enumerate() {
        prompt.push_str(&format!("{}. {}\n", idx + 1, post));
    }
    prompt.push_str(&format!("\nUser feedback: {}\n\n", feedback));
    prompt.push_str("Revise the posts incorporating the requested improvements.\n");

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_prompt_embeds_request() {
        let prompt = build_content_prompt("promote a new coffee blend");
        assert!(prompt.contains("User request: promote a new coffee blend"));
        assert!(prompt.contains("three social media posts"));
    }

    #[test]
    fn test_revision_prompt_enumerates_posts() {
        let posts = vec![
            "Post A".to_string(),
            "Post B".to_string(),
            "Post C".to_string(),
        ];
        let prompt = build_revision_prompt(&posts, "make it funnier");

        assert!(prompt.contains("1. Post A"));
        assert!(prompt.contains("2. Post B"));
        assert!(prompt.contains("3. Post C"));
        assert!(prompt.contains("User feedback: make it funnier"));
    }

    #[test]
    fn test_revision_prompt_caps_at_three() {
        let posts: Vec<String> = (1..=5).map(|n| format!("Post {}", n)).collect();
        let prompt = build_revision_prompt(&posts, "shorter");

        assert!(prompt.contains("3. Post 3"));
        assert!(!prompt.contains("4. Post 4"));
    }

    #[test]
    fn test_revision_prompt_with_empty_feedback() {
        let posts = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let prompt = build_revision_prompt(&posts, "");
        assert!(prompt.contains("User feedback: \n"));
    }
}
