//! Name validation and the greet operation

use std::fmt;

use crate::dialog::Dialog;
use crate::error::{Error, Result};
use crate::text;

/// A trimmed, non-empty name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    /// Trim surrounding whitespace and reject what is left if it is empty.
    ///
    /// Whitespace inside the name is kept as typed.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Greeting line for this name, e.g. `你好，Alice！`.
    pub fn greeting(&self) -> String {
        format!("{}{}{}", text::GREETING_PREFIX, self.0, text::GREETING_SUFFIX)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decide which dialog a click on the greet button shows.
///
/// Never fails: an empty name turns into the warning dialog.
pub fn greet(input: &str) -> Dialog {
    match Name::parse(input) {
        Ok(name) => {
            tracing::debug!(%name, "Greeting");
            Dialog::info(text::GREETING_TITLE, name.greeting())
        }
        Err(Error::EmptyName) => {
            tracing::debug!("Greet pressed with an empty name");
            Dialog::empty_name()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::Severity;
    use proptest::prelude::*;

    #[test]
    fn test_trims_surrounding_whitespace() {
        let dialog = greet("  Alice  ");
        assert_eq!(dialog.severity, Severity::Info);
        assert_eq!(dialog.title, "问候");
        assert_eq!(dialog.message, "你好，Alice！");
    }

    #[test]
    fn test_empty_input_warns() {
        let dialog = greet("");
        assert_eq!(dialog.severity, Severity::Warning);
        assert_eq!(dialog.title, "提示");
        assert_eq!(dialog.message, "请输入名字哦～");
    }

    #[test]
    fn test_spaces_only_warns() {
        assert_eq!(greet("   "), greet(""));
    }

    #[test]
    fn test_keeps_internal_whitespace() {
        assert_eq!(greet("李 雷").message, "你好，李 雷！");
    }

    #[test]
    fn test_tabs_and_newlines_are_trimmed() {
        assert_eq!(greet("\t Bob\n").message, "你好，Bob！");
        assert_eq!(greet("\t\r\n").severity, Severity::Warning);
    }

    #[test]
    fn test_ideographic_space_is_whitespace() {
        // U+3000 is what CJK input methods insert for a full-width space
        assert_eq!(Name::parse("\u{3000}"), Err(Error::EmptyName));
        assert_eq!(greet("\u{3000}小明\u{3000}").message, "你好，小明！");
    }

    #[test]
    fn test_name_parse() {
        let name = Name::parse(" Ada ").unwrap();
        assert_eq!(name.as_str(), "Ada");
        assert_eq!(name.to_string(), "Ada");
        assert_eq!(Name::parse(" \t "), Err(Error::EmptyName));
    }

    proptest! {
        #[test]
        fn prop_whitespace_only_always_warns(input in "[ \t\r\n\u{3000}]{0,16}") {
            prop_assert_eq!(greet(&input), Dialog::empty_name());
        }

        #[test]
        fn prop_non_blank_always_greets_trimmed(
            lead in "[ \t]{0,4}",
            core in "[a-zA-Z李雷]([a-zA-Z 李雷]{0,10}[a-zA-Z李雷])?",
            trail in "[ \t]{0,4}",
        ) {
            let input = format!("{lead}{core}{trail}");
            let dialog = greet(&input);
            prop_assert_eq!(dialog.severity, Severity::Info);
            prop_assert_eq!(dialog.title, "问候");
            prop_assert_eq!(dialog.message, format!("你好，{core}！"));
        }
    }
}
