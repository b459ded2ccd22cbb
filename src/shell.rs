//! Line-oriented session used by the interactive mode.
//!
//! Lines are collected until they form complete input, so a definition can
//! be spread over several lines as long as a block is still open. All
//! forms of a session share one operator table.

use tracing::debug;

use crate::{
    ast::functions::TopLevel,
    errors::errors::{Error, ErrorImpl},
    parse_source,
    parser::operators::OperatorTable,
};

pub const HELP_COMMAND: &str = "help;";

pub const HELP_TEXT: &str = "\
Enter SEL expressions or definitions; each parsed form is printed.
  func name(a, b) body              define a function
  func unary OP (v) body            define a prefix operator
  func binary OP PREC (a, b) body   define a binary operator, PREC in 1..18
An open `{` continues the input on the next line.";

/// Outcome of feeding one line into a [`Shell`].
#[derive(Debug)]
pub enum LineResult {
    /// The buffered input parsed into these forms.
    Forms(Vec<TopLevel>),
    /// A block is still open; more lines are needed.
    Incomplete,
    Help,
    /// Parsing failed. `source` is the buffered input the error points into.
    Failed { error: Error, source: String },
}

pub struct Shell {
    operators: OperatorTable,
    pending: String,
}

impl Shell {
    pub fn new(operators: OperatorTable) -> Self {
        Shell {
            operators,
            pending: String::new(),
        }
    }

    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    /// True while an unfinished block is buffered.
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn feed(&mut self, line: &str) -> LineResult {
        if !self.is_pending() && line.trim() == HELP_COMMAND {
            return LineResult::Help;
        }

        self.pending.push_str(line);
        if !self.pending.ends_with('\n') {
            self.pending.push('\n');
        }

        // Re-parsing the whole buffer re-declares any operator it declares,
        // with the same precedence.
        match parse_source(&self.pending, None, &mut self.operators) {
            Ok(forms) => {
                self.pending.clear();
                LineResult::Forms(forms)
            }
            Err(error) if error.kind() == &ErrorImpl::UnterminatedBlock => {
                debug!(bytes = self.pending.len(), "block still open, reading on");
                LineResult::Incomplete
            }
            Err(error) => LineResult::Failed {
                error,
                source: std::mem::take(&mut self.pending),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bodies(result: LineResult) -> Vec<String> {
        match result {
            LineResult::Forms(forms) => forms
                .iter()
                .map(|form| form.function().to_string())
                .collect(),
            other => panic!("expected forms, got {:?}", other),
        }
    }

    #[test]
    fn test_single_line() {
        let mut shell = Shell::new(OperatorTable::default());

        assert_eq!(bodies(shell.feed("a + b * c\n")), vec!["__anon_expr() = (+ a (* b c))"]);
        assert!(!shell.is_pending());
    }

    #[test]
    fn test_definition_over_several_lines() {
        let mut shell = Shell::new(OperatorTable::default());

        assert!(matches!(shell.feed("func f(x) {\n"), LineResult::Incomplete));
        assert!(shell.is_pending());
        assert!(matches!(shell.feed("  x * 2;\n"), LineResult::Incomplete));

        assert_eq!(bodies(shell.feed("}\n")), vec!["f(x) = {(* x 2)}"]);
        assert!(!shell.is_pending());
    }

    #[test]
    fn test_operators_carry_over_lines() {
        let mut shell = Shell::new(OperatorTable::default());

        shell.feed("func binary ~ 10(a, b) a\n");
        assert_eq!(shell.operators().lookup("~"), Some(10));
        assert_eq!(bodies(shell.feed("a ~ b + c\n")), vec!["__anon_expr() = (~ a (+ b c))"]);
    }

    #[test]
    fn test_failed_line_clears_buffer() {
        let mut shell = Shell::new(OperatorTable::default());

        match shell.feed("(a + b\n") {
            LineResult::Failed { error, source } => {
                assert_eq!(error.kind(), &ErrorImpl::UnmatchedParen);
                assert_eq!(source, "(a + b\n");
            }
            other => panic!("expected a failure, got {:?}", other),
        }
        assert!(!shell.is_pending());
        assert_eq!(bodies(shell.feed("a\n")), vec!["__anon_expr() = a"]);
    }

    #[test]
    fn test_help_command() {
        let mut shell = Shell::new(OperatorTable::default());

        assert!(matches!(shell.feed("help;\n"), LineResult::Help));
        assert!(!shell.is_pending());
    }
}
