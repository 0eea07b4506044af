//! Menu-driven text console over a [`Session`].
//!
//! The console is generic over its input and output streams so that whole
//! sessions can be scripted from in-memory buffers.

mod command;
mod render;
mod session;

use std::io::{self, BufRead, Write};

pub use self::{
    command::{Command, MenuChoice, UnknownChoice, parse_path},
    session::{GraphView, Response, Session},
};
use crate::{
    Directedness, Representation,
    config::{SessionConfig, parse_yes_no},
    tracing_support::debug,
};

/// Errors that end a console session early.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("input ended before the question was answered")]
    UnexpectedEof,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `message`, then reads one line with surrounding whitespace
    /// removed.
    pub fn prompt(&mut self, message: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::UnexpectedEof);
        }
        Ok(line.trim().to_string())
    }

    /// Asks whether the graph is undirected until a yes/no answer is given.
    pub fn ask_directedness(&mut self) -> Result<Directedness, ConsoleError> {
        loop {
            let answer = self.prompt("Will the graph be undirected? (y/n): ")?;
            match parse_yes_no(&answer) {
                Ok(undirected) => return Ok(Directedness::from_undirected(undirected)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    /// Runs the menu loop until the user quits or the input ends, and hands
    /// the session back.
    pub fn run(&mut self, mut session: Session) -> Result<Session, ConsoleError> {
        let title = session.store().representation().title();
        let mode = match session.directedness() {
            Directedness::Directed => "Directed",
            Directedness::Undirected => "Undirected",
        };
        writeln!(self.output, "\n--- {mode} graph ({title}) created ---")?;

        loop {
            self.write_menu(title)?;
            let command = match self.read_command() {
                Ok(Some(command)) => command,
                Ok(None) => {
                    writeln!(self.output, "Invalid option. Try again.")?;
                    continue;
                }
                Err(ConsoleError::UnexpectedEof) => Command::Quit,
                Err(err) => return Err(err),
            };
            if command == Command::ShowGraph {
                writeln!(self.output, "\n--- Current graph ({title}) ---")?;
            }
            let quit = command == Command::Quit;
            let response = session.execute(command);
            write!(self.output, "{response}")?;
            if quit {
                self.output.flush()?;
                return Ok(session);
            }
        }
    }

    fn write_menu(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.output, "\n--- Menu ({title}) ---")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{choice}")?;
        }
        Ok(())
    }

    /// Reads a menu key and then every argument that entry needs.  Returns
    /// `None` for an unknown key.
    fn read_command(&mut self) -> Result<Option<Command>, ConsoleError> {
        let key = self.prompt("Choose an option: ")?;
        let choice = match key.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(err) => {
                debug!(%err, "menu choice rejected");
                return Ok(None);
            }
        };
        let command = match choice {
            MenuChoice::ShowGraph => Command::ShowGraph,
            MenuChoice::InsertVertex => {
                Command::InsertVertex(self.prompt("Name of the vertex to insert: ")?)
            }
            MenuChoice::InsertEdge => Command::InsertEdge {
                origin: self.prompt("Origin vertex: ")?,
                destination: self.prompt("Destination vertex: ")?,
            },
            MenuChoice::RemoveVertex => {
                Command::RemoveVertex(self.prompt("Name of the vertex to remove: ")?)
            }
            MenuChoice::RemoveEdge => Command::RemoveEdge {
                origin: self.prompt("Origin of the edge: ")?,
                destination: self.prompt("Destination of the edge: ")?,
            },
            MenuChoice::ListNeighbors => {
                Command::ListNeighbors(self.prompt("List neighbors of which vertex: ")?)
            }
            MenuChoice::CheckEdge => Command::CheckEdge {
                origin: self.prompt("Check origin: ")?,
                destination: self.prompt("Check destination: ")?,
            },
            MenuChoice::ShowDegrees => Command::ShowDegrees,
            MenuChoice::ValidatePath => Command::ValidatePath(parse_path(
                &self.prompt("Enter the path (vertices separated by commas): ")?,
            )),
            MenuChoice::Quit => Command::Quit,
        };
        Ok(Some(command))
    }
}

/// Runs a full console session: asks for the mode unless one is given, then
/// drives the menu loop.
pub fn run<R: BufRead, W: Write>(
    input: R,
    output: W,
    representation: Representation,
    directedness: Option<Directedness>,
) -> Result<Session, ConsoleError> {
    let mut console = Console::new(input, output);
    let directedness = match directedness {
        Some(directedness) => directedness,
        None => console.ask_directedness()?,
    };
    console.run(Session::new(SessionConfig::new(representation, directedness)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphStore;

    fn script(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    fn output(console: Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_prompt_trims_and_reports_eof() {
        let mut console = script("  A  \n");
        assert_eq!(console.prompt("? ").unwrap(), "A");
        assert!(matches!(
            console.prompt("? "),
            Err(ConsoleError::UnexpectedEof)
        ));
        assert_eq!(output(console), "? ? ");
    }

    #[test]
    fn test_ask_directedness_repeats_until_answered() {
        let mut console = script("maybe\ns\n");
        assert_eq!(console.ask_directedness().unwrap(), Directedness::Undirected);
        assert!(output(console).contains("expected a yes/no answer"));

        let mut console = script("n\n");
        assert_eq!(console.ask_directedness().unwrap(), Directedness::Directed);
    }

    #[test]
    fn test_ask_directedness_fails_on_eof() {
        let mut console = script("");
        assert!(matches!(
            console.ask_directedness(),
            Err(ConsoleError::UnexpectedEof)
        ));
    }

    #[test]
    fn test_run_executes_commands_until_quit() {
        let input = "3\nA\nB\n7\nA\nB\n0\n2\nC\n";
        let mut console = script(input);
        let session = console
            .run(Session::new(SessionConfig::new(
                Representation::EdgeList,
                Directedness::Directed,
            )))
            .unwrap();
        assert!(session.store().edge_exists(&"A".into(), &"B".into()));
        assert!(!session.store().contains_vertex(&"C".into()));
        let text = output(console);
        assert!(text.contains("--- Directed graph (Edge List) created ---"));
        assert!(text.contains("Edge A -> B inserted."));
        assert!(text.contains("YES, edge A -> B exists."));
        assert!(text.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_run_rejects_unknown_choice() {
        let mut console = script("x\n0\n");
        console.run(Session::new(SessionConfig::default())).unwrap();
        assert!(output(console).contains("Invalid option. Try again."));
    }

    #[test]
    fn test_run_quits_at_end_of_input() {
        let mut console = script("2\nA\n3\nA\n");
        let session = console.run(Session::new(SessionConfig::default())).unwrap();
        assert_eq!(session.store().num_vertices(), 1);
        assert!(output(console).ends_with("Exiting...\n"));
    }

    #[test]
    fn test_run_prompts_for_mode() {
        let session = run(
            "s\n3\nA\nB\n0\n".as_bytes(),
            Vec::new(),
            Representation::AdjacencyMatrix,
            None,
        )
        .unwrap();
        assert_eq!(session.directedness(), Directedness::Undirected);
        assert!(session.store().edge_exists(&"B".into(), &"A".into()));
    }
}
