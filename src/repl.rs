use std::io::{self, BufRead, Write};

use crate::{Evaluation, config::Config, error::EvalError, get_result};

const MENU: &str = "\nWelcome to this Expression Evaluator program! Please choose an action to \
                    perform...\n[P] Program Description\n[E] Evaluate Expression(s)\n[X] \
                    Exit\n\nChoice: ";

const DESCRIPTION: &str = "\n\n\t\t==== PROGRAM DESCRIPTION ====\n\n\
Menu Descriptions:\n\n\
- [P] Program Description: Prints out the program description.\n\
- [E] Evaluate Expression(s): Enters a loop to evaluate expressions.\n\
Each iteration takes an infix expression as input and displays its \
equivalent postfix expression and its result.\n\
- [X] Exit: Terminates the program.\n\n\
Grammar:\n\
expression := term { (+ | -) term }\n\
term       := factor { (* | / | %) factor }\n\
factor     := NUMBER | ( expression )\n\n\
\t\t============================\n\n";

const CONTINUE: &str = "\n\nDo you want to evaluate another expression?\n\n[X] NO\n[other] \
                        YES\n\nChoice: ";

/// A choice in the top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `P`
    ProgramDescription,
    /// `E`
    Evaluate,
    /// `X`
    Exit,
}

impl MenuChoice {
    /// Reads a choice from the first non-blank character of a line,
    /// ignoring case.
    ///
    /// ## Example
    /// ```
    /// use postfixer::repl::MenuChoice;
    ///
    /// assert_eq!(MenuChoice::parse("  e\n"), Some(MenuChoice::Evaluate));
    /// assert_eq!(MenuChoice::parse("q"), None);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match first_char(line)? {
            'P' => Some(Self::ProgramDescription),
            'E' => Some(Self::Evaluate),
            'X' => Some(Self::Exit),
            _ => None,
        }
    }
}

fn first_char(line: &str) -> Option<char> {
    line.trim_start().chars().next().map(|c| c.to_ascii_uppercase())
}

/// Formats the numeric part of an evaluation the way the loop prints it.
///
/// Division by zero prints as `undefined`.
#[must_use]
pub fn format_value(value: &Result<f64, EvalError>) -> String {
    match value {
        Ok(v) => v.to_string(),
        Err(EvalError::DivisionByZero { .. }) => "undefined".to_string(),
        Err(e) => e.to_string(),
    }
}

/// Writes the postfix form and result of an evaluation.
pub fn write_evaluation<W: Write>(output: &mut W,
                                  evaluation: &Evaluation,
                                  show_infix: bool)
                                  -> io::Result<()> {
    if show_infix {
        writeln!(output, "\nInfix expression: {}", evaluation.infix)?;
    }
    write!(output,
           "\nPostfix expression: {}\nResult of evaluation: {}",
           evaluation.postfix,
           format_value(&evaluation.value))
}

/// Evaluates every non-blank line of a script.
///
/// Results go to `output` and rejected lines to `errors`, each with the line
/// that caused it. Returns `false` if any line failed to lex or parse.
/// Division by zero is a result (`undefined`), not a failure.
///
/// # Example
/// ```
/// use postfixer::{config::Config, repl::evaluate_script};
///
/// let (mut output, mut errors) = (Vec::new(), Vec::new());
/// let ok = evaluate_script("1 + 2\n\n4 (5)\n", &Config::default(), false, &mut output, &mut errors)
///     .unwrap();
///
/// assert!(!ok);
/// assert!(String::from_utf8(output).unwrap().contains("Result of evaluation: 3"));
/// assert!(String::from_utf8(errors).unwrap().starts_with("Invalid infix expression '4 (5)'."));
/// ```
pub fn evaluate_script<W, E>(script: &str,
                             config: &Config,
                             show_infix: bool,
                             output: &mut W,
                             errors: &mut E)
                             -> io::Result<bool>
    where W: Write,
          E: Write
{
    let mut succeeded = true;

    for line in script.lines().filter(|line| !line.trim().is_empty()) {
        match get_result(line, config) {
            Ok(evaluation) => {
                write_evaluation(output, &evaluation, show_infix)?;
                writeln!(output)?;
            },
            Err(e) => {
                writeln!(errors, "Invalid infix expression '{line}'. {e}")?;
                succeeded = false;
            },
        }
    }

    Ok(succeeded)
}

/// Whether the evaluation loop handed control back to the menu or ran out
/// of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    BackToMenu,
    EndOfInput,
}

/// An interactive session over a line reader and a writer.
pub struct Session<R, W> {
    input:      R,
    output:     W,
    config:     Config,
    show_infix: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with the given settings.
    pub const fn new(input: R, output: W, config: Config) -> Self {
        Self { input,
               output,
               config,
               show_infix: false }
    }

    /// Also prints the inorder rendering of each expression.
    #[must_use]
    pub const fn show_infix(mut self, show_infix: bool) -> Self {
        self.show_infix = show_infix;
        self
    }

    /// Consumes the session and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the user exits or input ends.
    ///
    /// # Example
    /// ```
    /// use postfixer::{config::Config, repl::Session};
    ///
    /// let input = "e\n34 + 35\nx\nx\n".as_bytes();
    /// let mut session = Session::new(input, Vec::new(), Config::default());
    /// session.run().unwrap();
    ///
    /// let output = String::from_utf8(session.into_output()).unwrap();
    /// assert!(output.contains("Postfix expression: 34 35 + "));
    /// assert!(output.contains("Result of evaluation: 69"));
    /// ```
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.prompt(MENU)?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::ProgramDescription) => self.output.write_all(DESCRIPTION.as_bytes())?,
                Some(MenuChoice::Evaluate) => {
                    if self.evaluation_loop()? == Flow::EndOfInput {
                        return Ok(());
                    }
                },
                Some(MenuChoice::Exit) => return Ok(()),
                None => writeln!(self.output, "\nInvalid input, try again.")?,
            }
        }
    }

    fn evaluation_loop(&mut self) -> io::Result<Flow> {
        loop {
            self.prompt("\nInput an infix expression: ")?;
            let Some(line) = self.read_line()? else {
                return Ok(Flow::EndOfInput);
            };

            match get_result(&line, &self.config) {
                Ok(evaluation) => {
                    write_evaluation(&mut self.output, &evaluation, self.show_infix)?;
                },
                Err(e) => {
                    writeln!(self.output, "Invalid infix expression. {e}\nPlease try again.")?;
                    continue;
                },
            }

            self.prompt(CONTINUE)?;
            match self.read_line()? {
                None => return Ok(Flow::EndOfInput),
                Some(line) if first_char(&line) == Some('X') => return Ok(Flow::BackToMenu),
                Some(_) => {},
            }
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
