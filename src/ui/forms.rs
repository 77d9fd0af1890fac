use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Label shown in front of the typed address.
pub(crate) const ADDRESS_PROMPT: &str = "Go to: ";

/// State of the "go to address" prompt.
#[derive(Default, Clone)]
pub(crate) struct AddressForm {
    pub(crate) text: String,
    pub(crate) error: Option<String>,
}

impl AddressForm {
    /// Seed the prompt with the current address so it can be edited in place.
    pub(crate) fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            error: None,
        }
    }

    /// Append a character, ignoring control input.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.text.push(ch);
        self.error = None;
        true
    }

    /// Remove the last character.
    pub(crate) fn backspace(&mut self) {
        self.text.pop();
        self.error = None;
    }

    pub(crate) fn clear(&mut self) {
        self.text.clear();
        self.error = None;
    }

    /// The typed address with surrounding whitespace removed.
    pub(crate) fn address(&self) -> &str {
        self.text.trim()
    }

    /// Render the prompt line.
    pub(crate) fn build_line(&self) -> Line<'static> {
        let (display, style) = if self.text.is_empty() {
            (
                "#/<volume>/<book>/<chapter>[/<verses>]".to_string(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (self.text.clone(), Style::default().fg(Color::Yellow))
        };

        Line::from(vec![Span::raw(ADDRESS_PROMPT), Span::styled(display, style)])
    }

    pub(crate) fn value_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_clears_previous_error() {
        let mut form = AddressForm::with_text("#/new-testament");
        form.error = Some("nope".into());
        assert!(form.push_char('/'));
        assert_eq!(form.text, "#/new-testament/");
        assert!(form.error.is_none());
    }

    #[test]
    fn control_characters_are_rejected() {
        let mut form = AddressForm::default();
        assert!(!form.push_char('\u{7}'));
        assert!(form.text.is_empty());
    }

    #[test]
    fn address_is_trimmed() {
        let form = AddressForm::with_text("  #/a/b/1 ");
        assert_eq!(form.address(), "#/a/b/1");
        assert_eq!(form.value_len(), 10);
    }
}
