//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::{Options, termwidth};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn room_titlebar_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn stat_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn path_style(&self) -> ColoredString;
    fn exit_style(&self) -> ColoredString;
    fn success_style(&self) -> ColoredString;
    fn failure_style(&self) -> ColoredString;
    fn treasure_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn section_style(&self) -> ColoredString {
        let bracketed = format!("[{self}]");
        bracketed.truecolor(75, 80, 75)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn room_titlebar_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn stat_style(&self) -> ColoredString {
        self.bold().truecolor(200, 200, 200)
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn path_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn exit_style(&self) -> ColoredString {
        self.italic().truecolor(220, 180, 40)
    }
    fn success_style(&self) -> ColoredString {
        self.truecolor(80, 220, 80)
    }
    fn failure_style(&self) -> ColoredString {
        self.truecolor(230, 80, 80)
    }
    fn treasure_style(&self) -> ColoredString {
        self.bold().truecolor(230, 230, 30)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold().truecolor(140, 140, 255)
    }
}

impl GameStyle for String {
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn room_titlebar_style(&self) -> ColoredString {
        self.as_str().room_titlebar_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn stat_style(&self) -> ColoredString {
        self.as_str().stat_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn path_style(&self) -> ColoredString {
        self.as_str().path_style()
    }
    fn exit_style(&self) -> ColoredString {
        self.as_str().exit_style()
    }
    fn success_style(&self) -> ColoredString {
        self.as_str().success_style()
    }
    fn failure_style(&self) -> ColoredString {
        self.as_str().failure_style()
    }
    fn treasure_style(&self) -> ColoredString {
        self.as_str().treasure_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
}

/// Wrapping options for ordinary paragraphs, capped at 80 columns.
pub fn normal_block() -> Options<'static> {
    Options::new(termwidth().min(80))
}

/// Wrapping options for text nested under a heading.
pub fn indented_block() -> Options<'static> {
    normal_block().initial_indent("    ").subsequent_indent("    ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_emit_escape_codes() {
        colored::control::set_override(true);
        assert!("hi".room_titlebar_style().to_string().contains('\u{1b}'));
        assert!(String::from("hi").treasure_style().to_string().contains('\u{1b}'));
    }

    #[test]
    fn section_is_bracketed() {
        assert!("scene".section_style().to_string().contains("[scene]"));
    }

    #[test]
    fn indented_block_indents() {
        assert_eq!(indented_block().initial_indent, "    ");
    }
}
