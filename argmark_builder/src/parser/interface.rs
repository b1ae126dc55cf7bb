use std::io::{self, Write};

use crate::parser::ParseError;

/// Where parse failures and help listings are written.
pub trait UserInterface {
    /// Write a message (ex: the help listing).
    fn print(&self, message: String);

    /// Write a parse failure.
    fn print_error(&self, error: ParseError);
}

/// Writes messages to stdout, and errors to stderr.
#[derive(Debug)]
pub struct ConsoleInterface {}

impl Default for ConsoleInterface {
    fn default() -> Self {
        Self {}
    }
}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        // Stdout may be closed (ex: piped into `head`); the listing is then dropped.
        write_message(&mut io::stdout().lock(), &message).ok();
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("Parse error: {error}");
    }
}

// Messages are written as is; help listings already end with their block separator.
fn write_message(out: &mut impl Write, message: &str) -> io::Result<()> {
    out.write_all(message.as_bytes())?;
    out.flush()
}

#[cfg(test)]
pub(crate) mod util {
    use crate::parser::{ParseError, UserInterface};
    use std::cell::RefCell;

    pub(crate) struct InMemoryInterface {
        message: RefCell<Option<Vec<String>>>,
        error: RefCell<Option<String>>,
    }

    impl Default for InMemoryInterface {
        fn default() -> Self {
            Self {
                message: RefCell::new(None),
                error: RefCell::new(None),
            }
        }
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            // Allows for print() to be called many times, concatenating the messages.
            self.message
                .borrow_mut()
                .get_or_insert_with(Vec::default)
                .push(message);
        }

        fn print_error(&self, error: ParseError) {
            // Assumes print_error() is only ever called once.
            self.error.borrow_mut().replace(error.to_string());
        }
    }

    impl InMemoryInterface {
        pub(crate) fn consume(self) -> (Option<String>, Option<String>) {
            let InMemoryInterface { message, error } = self;

            (
                message.take().map(|messages| messages.join("\n")),
                error.take(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Flag, Registry};

    #[test]
    fn write_message_verbatim() {
        // Setup
        let mut registry = Registry::new();
        registry.add(Flag::new(["-v"], "V.").unwrap()).unwrap();
        let help = registry.help();
        let mut out: Vec<u8> = Vec::default();

        // Execute
        write_message(&mut out, &help).unwrap();

        // Verify
        let written = String::from_utf8(out).unwrap();
        assert_eq!(written, help);
        assert!(!written.ends_with("\n\n\n"), "{written:?}");
    }
}
