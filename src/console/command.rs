use std::{fmt, str::FromStr};

/// One entry of the console menu, selected by its key.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum MenuChoice {
    ShowGraph,
    InsertVertex,
    InsertEdge,
    RemoveVertex,
    RemoveEdge,
    ListNeighbors,
    CheckEdge,
    ShowDegrees,
    ValidatePath,
    Quit,
}

impl MenuChoice {
    /// Menu entries in display order.  `Quit` is listed last but keyed `0`.
    pub const ALL: [MenuChoice; 10] = [
        MenuChoice::ShowGraph,
        MenuChoice::InsertVertex,
        MenuChoice::InsertEdge,
        MenuChoice::RemoveVertex,
        MenuChoice::RemoveEdge,
        MenuChoice::ListNeighbors,
        MenuChoice::CheckEdge,
        MenuChoice::ShowDegrees,
        MenuChoice::ValidatePath,
        MenuChoice::Quit,
    ];

    pub fn key(self) -> char {
        match self {
            MenuChoice::ShowGraph => '1',
            MenuChoice::InsertVertex => '2',
            MenuChoice::InsertEdge => '3',
            MenuChoice::RemoveVertex => '4',
            MenuChoice::RemoveEdge => '5',
            MenuChoice::ListNeighbors => '6',
            MenuChoice::CheckEdge => '7',
            MenuChoice::ShowDegrees => '8',
            MenuChoice::ValidatePath => '9',
            MenuChoice::Quit => '0',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ShowGraph => "Show graph",
            MenuChoice::InsertVertex => "Insert vertex",
            MenuChoice::InsertEdge => "Insert edge",
            MenuChoice::RemoveVertex => "Remove vertex",
            MenuChoice::RemoveEdge => "Remove edge",
            MenuChoice::ListNeighbors => "List neighbors of a vertex",
            MenuChoice::CheckEdge => "Check whether an edge exists",
            MenuChoice::ShowDegrees => "Show vertex degrees",
            MenuChoice::ValidatePath => "Validate a path",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// Returned when a menu key is not recognized.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid option {0:?}")]
pub struct UnknownChoice(pub String);

impl FromStr for MenuChoice {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        MenuChoice::ALL
            .into_iter()
            .find(|choice| key.len() == 1 && key.starts_with(choice.key()))
            .ok_or_else(|| UnknownChoice(key.to_string()))
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>2}. {}", self.key(), self.label())
    }
}

/// A fully specified request to the session, one per menu entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    ShowGraph,
    InsertVertex(String),
    InsertEdge { origin: String, destination: String },
    RemoveVertex(String),
    RemoveEdge { origin: String, destination: String },
    ListNeighbors(String),
    CheckEdge { origin: String, destination: String },
    ShowDegrees,
    ValidatePath(Vec<String>),
    Quit,
}

impl Command {
    /// Short name used in log spans.
    pub fn name(&self) -> &'static str {
        match self {
            Command::ShowGraph => "show_graph",
            Command::InsertVertex(_) => "insert_vertex",
            Command::InsertEdge { .. } => "insert_edge",
            Command::RemoveVertex(_) => "remove_vertex",
            Command::RemoveEdge { .. } => "remove_edge",
            Command::ListNeighbors(_) => "list_neighbors",
            Command::CheckEdge { .. } => "check_edge",
            Command::ShowDegrees => "show_degrees",
            Command::ValidatePath(_) => "validate_path",
            Command::Quit => "quit",
        }
    }
}

/// Splits a comma-separated list of vertex names, trimming whitespace and
/// dropping blank entries.
pub fn parse_path(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
