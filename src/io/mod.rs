//! Output abstraction
//!
//! Presenters write through [`OutputWriter`] so tests can capture what
//! would have been printed.

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Writes to stdout
pub struct TerminalOutput;

impl OutputWriter for TerminalOutput {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Test utilities. Public so integration tests under `tests/` can capture
/// presenter output; not meant for production callers.
pub mod test_utils {
    use super::OutputWriter;

    /// Mock output writer for testing: collects every line in memory
    #[derive(Debug, Default)]
    pub struct MockOutput {
        pub messages: Vec<String>,
    }

    impl MockOutput {
        pub fn new() -> Self {
            Self::default()
        }

        /// Everything written so far, concatenated.
        pub fn text(&self) -> String {
            self.messages.concat()
        }
    }

    impl OutputWriter for MockOutput {
        fn writeln(&mut self, message: &str) {
            self.messages.push(format!("{}\n", message));
        }
    }

}
