//! Word-by-word typing effect for the hero title

/// Pause before the first word appears
pub const TYPING_START_DELAY_MS: u32 = 1000;

/// Pause between two words
pub const TYPING_WORD_DELAY_MS: u32 = 200;

/// Reveals a title one word at a time
#[derive(Debug, Clone)]
pub struct TypingEffect {
    words: Vec<String>,
    shown: usize,
    text: String,
}

impl TypingEffect {
    /// Prepare the effect for a title; words are split on single spaces.
    pub fn new(title: &str) -> Self {
        Self {
            words: title.split(' ').map(str::to_string).collect(),
            shown: 0,
            text: String::new(),
        }
    }

    /// Text currently displayed
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_finished(&self) -> bool {
        self.shown >= self.words.len()
    }

    /// Append the next word followed by a space.
    ///
    /// Returns the new text, or `None` once every word is shown.
    pub fn next_word(&mut self) -> Option<&str> {
        let word = self.words.get(self.shown)?;
        self.text.push_str(word);
        self.text.push(' ');
        self.shown += 1;
        Some(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let effect = TypingEffect::new("Digital Excellence");
        assert_eq!(effect.text(), "");
        assert!(!effect.is_finished());
    }

    #[test]
    fn test_words_appear_in_order_with_trailing_space() {
        let mut effect = TypingEffect::new("We build products");
        assert_eq!(effect.next_word(), Some("We "));
        assert_eq!(effect.next_word(), Some("We build "));
        assert_eq!(effect.next_word(), Some("We build products "));
        assert!(effect.is_finished());
        assert_eq!(effect.next_word(), None);
    }

    #[test]
    fn test_double_spaces_keep_empty_words() {
        let mut effect = TypingEffect::new("a  b");
        while effect.next_word().is_some() {}
        assert_eq!(effect.text(), "a  b ");
    }
}
