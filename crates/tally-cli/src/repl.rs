//! Interactive calculator session

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, info};

use crate::command::{parse_line, Reply, Session};
use tally::CalcContext;

const PROMPT: &str = "tally> ";

/// Read commands until `exit`, Ctrl-C or Ctrl-D.
pub fn run(ctx: CalcContext, json: bool) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut session = Session::new(ctx);
    info!("starting session (type 'help' for commands)");

    loop {
        let line = match rl.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("Error: {:#}", err);
                continue;
            }
        };
        rl.add_history_entry(line.trim())?;

        let reply = session.execute(command);
        match reply.render(json) {
            Some(output) => println!("{}", output),
            None => break,
        }
        if let Reply::Failed(err) = &reply {
            debug!(error = %err, "command failed");
        }
    }

    info!("session ended");
    Ok(())
}
