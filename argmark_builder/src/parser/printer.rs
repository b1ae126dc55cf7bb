use crate::api::Registry;
use crate::constant::*;
use crate::matcher::Entry;

/// Renders the help listing of a [`Registry`].
///
/// Each descriptor is rendered in registration order, as a block followed by a blank line.
/// Every form (along with the value help label, for value flags) is padded out to the column width, and the help text follows in the next column.
/// Help text is never wrapped; use line breaks `'\n'` in the help text to spread it over multiple lines.
/// When any form of a descriptor overflows the column, all its forms are listed first, with the help text beneath them.
///
/// ### Example
/// ```
/// # use argmark_builder as argmark;
/// use argmark::{Flag, HelpPrinter, Registry, ValueFlag};
///
/// let mut registry = Registry::new();
/// registry.add(Flag::new(["-v", "--verbose"], "Log things verbosely.").unwrap()).unwrap();
/// registry
///     .add(ValueFlag::string(["-i", "--input"], "The input.\nRequired.", "<path>").unwrap())
///     .unwrap();
///
/// assert_eq!(
///     HelpPrinter::default().render(&registry),
///     "-v                Log things verbosely.\n\
///      --verbose         \n\
///      \n\
///      -i <path>         The input.\n\
///      --input <path>    Required.\n\
///      \n"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpPrinter {
    column_width: usize,
}

impl Default for HelpPrinter {
    fn default() -> Self {
        Self {
            column_width: DEFAULT_COLUMN_WIDTH,
        }
    }
}

impl HelpPrinter {
    /// Use `width` characters for the form column (default: 18).
    pub fn column_width(mut self, width: usize) -> Self {
        self.column_width = width;
        self
    }

    /// Render the help listing.
    pub fn render(&self, registry: &Registry) -> String {
        let mut out = String::default();

        for entry in registry.entries() {
            for line in self.render_entry(entry) {
                out.push_str(&line);
                out.push('\n');
            }

            out.push('\n');
        }

        out
    }

    fn render_entry(&self, entry: &Entry) -> Vec<String> {
        let width = self.column_width;
        let blank = format!("{:width$}", "");
        // Padded, but never truncated.
        let form_texts: Vec<String> = entry
            .forms()
            .iter()
            .map(|form| {
                let text = match entry.value_help() {
                    Some(value_help) => format!("{form} {value_help}"),
                    None => form.clone(),
                };
                format!("{text:width$}")
            })
            .collect();
        let help_lines = help_lines(entry.help());
        let stacked = form_texts.iter().any(|text| text.chars().count() > width);

        if stacked {
            form_texts
                .into_iter()
                .chain(help_lines.iter().map(|line| format!("{blank}{line}")))
                .collect()
        } else {
            let rows = std::cmp::max(form_texts.len(), help_lines.len());
            (0..rows)
                .map(|i| {
                    let left = form_texts.get(i).unwrap_or(&blank);
                    let right = help_lines.get(i).copied().unwrap_or_default();
                    format!("{left}{right}")
                })
                .collect()
        }
    }
}

// Trailing empty lines are dropped, except that an empty help text is a single (empty) line.
fn help_lines(help: &str) -> Vec<&str> {
    if help.is_empty() {
        return vec![""];
    }

    let mut lines: Vec<&str> = help.split('\n').collect();

    while lines.last().map_or(false, |line| line.is_empty()) {
        lines.pop();
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Flag, ValueFlag};
    use rstest::rstest;

    const LONG_HELP: &str = "This is a help text that is way\nto long. So we stretch it out to multiple\nlines. Hopefully this is readable.";

    #[test]
    fn render_empty() {
        assert_eq!(HelpPrinter::default().render(&Registry::new()), "");
    }

    #[test]
    fn render_listing() {
        // Setup
        let mut registry = Registry::new();
        registry
            .add(Flag::new(["-v", "--verbose"], "Log things verbosely. Optional.").unwrap())
            .unwrap();
        registry
            .add(Flag::new(["-d", "--dispose-all-the-things"], LONG_HELP).unwrap())
            .unwrap();
        registry
            .add(ValueFlag::string(["-i", "--input"], LONG_HELP, "<path>").unwrap())
            .unwrap();

        // Execute
        let help = registry.help();

        // Verify
        assert_eq!(
            help,
            concat!(
                "-v                Log things verbosely. Optional.\n",
                "--verbose         \n",
                "\n",
                "-d                \n",
                "--dispose-all-the-things\n",
                "                  This is a help text that is way\n",
                "                  to long. So we stretch it out to multiple\n",
                "                  lines. Hopefully this is readable.\n",
                "\n",
                "-i <path>         This is a help text that is way\n",
                "--input <path>    to long. So we stretch it out to multiple\n",
                "                  lines. Hopefully this is readable.\n",
                "\n",
            )
        );
    }

    #[test]
    fn render_idempotent() {
        let mut registry = Registry::new();
        registry.add(Flag::new(["-v"], "V.\nMore.").unwrap()).unwrap();
        registry
            .add(ValueFlag::integer(["--a-rather-long-form"], "Long.", "<n>").unwrap())
            .unwrap();
        let printer = HelpPrinter::default();
        assert_eq!(printer.render(&registry), printer.render(&registry));
        assert_eq!(registry.help(), printer.render(&registry));
    }

    #[rstest]
    // Exactly filling the column stays compact (no gap before the help).
    #[case(vec!["--exactly-18-chars"], "H.", "--exactly-18-charsH.\n\n")]
    // Overflowing by a single character stacks.
    #[case(vec!["--exactly-19-chars!"], "H.", "--exactly-19-chars!\n                  H.\n\n")]
    #[case(vec!["-v"], "", "-v                \n\n")]
    #[case(vec!["-v", "--verbose"], "", "-v                \n--verbose         \n\n")]
    #[case(vec!["-v"], "one\ntwo\nthree", "-v                one\n                  two\n                  three\n\n")]
    #[case(vec!["-v"], "one\n\n", "-v                one\n\n")]
    #[case(vec!["-v"], "one\n\ntwo", "-v                one\n                  \n                  two\n\n")]
    fn render_flag(#[case] forms: Vec<&str>, #[case] help: &str, #[case] expected: &str) {
        let mut registry = Registry::new();
        registry.add(Flag::new(forms, help).unwrap()).unwrap();
        assert_eq!(registry.help(), expected);
    }

    #[test]
    fn render_value_overflow() {
        // The value help label counts towards the column.
        let mut registry = Registry::new();
        registry
            .add(ValueFlag::string(["-o", "--output"], "Out.", "<some-path>").unwrap())
            .unwrap();
        assert_eq!(
            registry.help(),
            "-o <some-path>    \n--output <some-path>\n                  Out.\n\n"
        );
    }

    #[test]
    fn render_empty_value_help() {
        let mut registry = Registry::new();
        registry
            .add(ValueFlag::boolean(["-a"], "A.", "").unwrap())
            .unwrap();
        assert_eq!(registry.help(), "-a                A.\n\n");
    }

    #[test]
    fn render_column_width() {
        let mut registry = Registry::new();
        registry
            .add(ValueFlag::integer(["-b", "--bbb"], "B.\nMore.\nEven more.", "<n>").unwrap())
            .unwrap();
        assert_eq!(
            HelpPrinter::default().column_width(10).render(&registry),
            "-b <n>    B.\n--bbb <n> More.\n          Even more.\n\n"
        );
    }

    #[rstest]
    #[case("", vec![""])]
    #[case("one", vec!["one"])]
    #[case("one\n", vec!["one"])]
    #[case("\n", vec![])]
    #[case("one\ntwo", vec!["one", "two"])]
    #[case("\none", vec!["", "one"])]
    fn split_help(#[case] help: &str, #[case] expected: Vec<&str>) {
        assert_eq!(help_lines(help), expected);
    }
}
