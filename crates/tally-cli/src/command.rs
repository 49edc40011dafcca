//! REPL command parsing and execution

use anyhow::{bail, Context, Result};
use serde_json::json;
use tally::{Calculator, CalcContext, RectangleCalculator, TallyError, Value};

/// Help shown by the `help` command.
pub const HELP: &str = "\
Commands:
  add <x> <y>            x + y
  sub <x> <y>            x - y
  mul <x> <y>            x * y
  div <x> <y>            x / y (always a float)
  area <length> <width>  rectangle area
  perimeter <l> <w>      rectangle perimeter
  history [n]            show the operation history (last n entries)
  reset                  clear the operation history
  help                   show this message
  exit                   leave the session";

/// Arithmetic operation selected by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Arith { op: ArithOp, x: Value, y: Value },
    Area { length: f64, width: f64 },
    Perimeter { length: f64, width: f64 },
    History(Option<usize>),
    Reset,
    Help,
    Exit,
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Value(Value),
    Text(String),
    Failed(TallyError),
    Exit,
}

impl Reply {
    /// Render for the console, plain or as JSON.
    pub fn render(&self, json: bool) -> Option<String> {
        let rendered = match (self, json) {
            (Reply::Exit, _) => return None,
            (Reply::Value(v), false) => v.to_string(),
            (Reply::Text(t), false) => t.clone(),
            (Reply::Failed(e), false) => format!("Error: {}", e),
            // JSON has no inf/NaN; serde_json would write them as null
            (Reply::Value(Value::Float(f)), true) if !f.is_finite() => {
                json!({ "result": Value::Float(*f).to_string() }).to_string()
            }
            (Reply::Value(v), true) => json!({ "result": v }).to_string(),
            (Reply::Text(t), true) => json!({ "result": t }).to_string(),
            (Reply::Failed(e), true) => json!({ "error": e.to_string() }).to_string(),
        };
        Some(rendered)
    }

    /// Whether the command failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, Reply::Failed(_))
    }
}

/// Parse one line of input. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let command = match words.as_slice() {
        [] => return Ok(None),
        [op @ ("add" | "sub" | "mul" | "div"), x, y] => Command::Arith {
            op: match *op {
                "add" => ArithOp::Add,
                "sub" => ArithOp::Sub,
                "mul" => ArithOp::Mul,
                _ => ArithOp::Div,
            },
            x: Value::parse_lenient(x),
            y: Value::parse_lenient(y),
        },
        ["area", length, width] => Command::Area {
            length: parse_dimension(length)?,
            width: parse_dimension(width)?,
        },
        ["perimeter", length, width] => Command::Perimeter {
            length: parse_dimension(length)?,
            width: parse_dimension(width)?,
        },
        ["history"] => Command::History(None),
        ["history", n] => Command::History(Some(
            n.parse()
                .with_context(|| format!("history limit must be a non-negative integer, got '{}'", n))?,
        )),
        ["reset"] => Command::Reset,
        ["help"] => Command::Help,
        ["exit" | "quit"] => Command::Exit,
        [name, ..] => bail!("unknown command or wrong number of arguments: '{}' (try 'help')", name),
    };
    Ok(Some(command))
}

fn parse_dimension(word: &str) -> Result<f64> {
    word.parse()
        .with_context(|| format!("dimension must be a number, got '{}'", word))
}

/// One calculator session: a history-keeping calculator and a rectangle
/// calculator.
#[derive(Debug, Default)]
pub struct Session {
    calculator: Calculator,
    rectangles: RectangleCalculator,
}

impl Session {
    /// Create a session with the given calculator configuration.
    pub fn new(ctx: CalcContext) -> Self {
        Self {
            calculator: Calculator::with_context(ctx),
            rectangles: RectangleCalculator::new(),
        }
    }

    /// Run a command against this session.
    pub fn execute(&mut self, command: Command) -> Reply {
        let outcome = match command {
            Command::Arith { op, x, y } => match op {
                ArithOp::Add => self.calculator.add(x, y),
                ArithOp::Sub => self.calculator.subtract(x, y),
                ArithOp::Mul => self.calculator.multiply(x, y),
                ArithOp::Div => self.calculator.divide(x, y),
            },
            Command::Area { length, width } => self
                .rectangles
                .calculate_area(length, width)
                .map(Value::Float),
            Command::Perimeter { length, width } => self
                .rectangles
                .calculate_perimeter(length, width)
                .map(Value::Float),
            Command::History(limit) => {
                return Reply::Text(self.calculator.get_history(limit));
            }
            Command::Reset => return Reply::Text(self.calculator.reset_history().to_string()),
            Command::Help => return Reply::Text(HELP.to_string()),
            Command::Exit => return Reply::Exit,
        };

        match outcome {
            Ok(value) => Reply::Value(value),
            Err(err) => Reply::Failed(err),
        }
    }
}
