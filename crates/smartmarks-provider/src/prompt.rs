//! Taxonomy prompt sent to every provider.

/// Fixed system instruction describing the folder taxonomy.
pub const SYSTEM_PROMPT: &str = r#"You are a bookmark organizer. Your goal is to keep the folder structure CLEAN and FLATTENED.
RULES:
1. MAX DEPTH: 2 levels only (Category / SubCategory). Never 3.
2. GROUP BY DOMAIN:
   - If the URL is "reddit.com/...", the path MUST be "Social Media/Reddit".
   - If the URL is "youtube.com/...", the path MUST be "Entertainment/YouTube".
   - If the URL is "github.com/...", the path MUST be "Development/GitHub".

3. USE THIS STANDARD LIST for the Top-Level Folder (Level 1) if possible:
   - Development
   - Social Media
   - Entertainment
   - News & Reading
   - Shopping
   - Education
   - Tools & Utilities
   - Finance
   - Work
   - Other

4. AVOID "Generic Adjective" folders.
   - BAD: "Entertainment/Web Content/Interesting"
   - GOOD: "Social Media/Reddit" (even for subreddits)

5. Output ONLY the path string (e.g., "Social Media/Reddit"). No "Here is the path" text."#;

/// User message describing one bookmark.
pub fn user_content(title: &str, url: &str) -> String {
    format!("Title: {}\nURL: {}", title, url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_content_format() {
        assert_eq!(
            user_content("Intro to React Hooks", "https://youtube.com/watch?v=x"),
            "Title: Intro to React Hooks\nURL: https://youtube.com/watch?v=x"
        );
    }

    #[test]
    fn test_prompt_lists_top_level_folders() {
        for folder in ["Development", "Social Media", "Tools & Utilities", "Other"] {
            assert!(SYSTEM_PROMPT.contains(folder));
        }
    }
}
