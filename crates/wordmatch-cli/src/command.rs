use wordmatch_core::Position;
use wordmatch_game::CategoryDefinition;

pub(crate) const HELP: &str = "\
Commands:
  swap R1 C1 R2 C2   swap two adjacent cells (rows and columns start at 0)
  R1 C1 R2 C2        same as swap
  show               print the board
  score              print the score
  help               show this list
  quit               leave the game
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Empty,
    Swap(Position, Position),
    Show,
    Score,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum CommandError {
    #[display("unknown command: {input:?}")]
    Unknown { input: String },
    #[display("swap needs four numbers: R1 C1 R2 C2")]
    SwapArity,
    #[display("not a cell index: {input:?}")]
    InvalidIndex { input: String },
}

pub(crate) fn parse(line: &str) -> Result<Command, CommandError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&first, rest)) = words.split_first() else {
        return Ok(Command::Empty);
    };
    match first.to_lowercase().as_str() {
        "swap" | "s" => parse_swap(rest),
        "show" | "board" => Ok(Command::Show),
        "score" => Ok(Command::Score),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ if first.parse::<usize>().is_ok() => parse_swap(&words),
        _ => Err(CommandError::Unknown {
            input: line.trim().to_owned(),
        }),
    }
}

fn parse_swap(args: &[&str]) -> Result<Command, CommandError> {
    let [r1, c1, r2, c2] = args else {
        return Err(CommandError::SwapArity);
    };
    let index = |s: &str| {
        s.parse::<usize>().map_err(|_| CommandError::InvalidIndex {
            input: s.to_owned(),
        })
    };
    Ok(Command::Swap(
        Position::new(index(r1)?, index(c1)?),
        Position::new(index(r2)?, index(c2)?),
    ))
}

/// Parses `NAME=word,word,...` from the command line.
pub(crate) fn parse_definition(s: &str) -> Result<CategoryDefinition, String> {
    let (name, words) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=word,word,..., got {s:?}"))?;
    Ok(CategoryDefinition {
        name: name.to_owned(),
        words: words.split(',').map(str::to_owned).collect(),
    })
}
