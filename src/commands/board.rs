//! Interactive board command (`vialis board`)

use std::io::{self, BufRead, Write};

use crate::board::session::{BoardCommand, BoardSession, parse_command};
use crate::error::Result;
use crate::interact::ConsoleInteraction;
use crate::remote::{Config, HttpTicketSource};

/// Run the interactive board: one initial fetch, then a line-oriented
/// operator loop. A page-reload equivalent is the `reload` command; there
/// is no other recovery path.
pub async fn cmd_board() -> Result<()> {
    let config = Config::load()?;
    let source = HttpTicketSource::from_config(&config)?;

    let mut session = BoardSession::new(&source);
    session.load().await;

    let mut interaction = ConsoleInteraction;
    print_frame(&session)?;

    loop {
        // The lock is taken per read: card prompts re-lock stdin while a
        // command is being handled.
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            print_frame(&session)?;
            continue;
        }

        match parse_command(&line) {
            Some(BoardCommand::Quit) => break,
            Some(BoardCommand::Reload) => session.load().await,
            Some(BoardCommand::Control { control, index }) => {
                session.activate(index, control, &mut interaction);
            }
            Some(BoardCommand::Nav(label)) => {
                if !session.navigate(&label) {
                    println!("No such section: {}", label);
                }
            }
            Some(BoardCommand::Help) => {
                session.navigate("help");
            }
            None => println!("Unrecognized command (try `help`)."),
        }
        print_frame(&session)?;
    }

    Ok(())
}

fn print_frame(session: &BoardSession<'_>) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout)?;
    for line in session.frame() {
        writeln!(stdout, "{}", line)?;
    }
    write!(stdout, "vialis> ")?;
    stdout.flush()?;
    Ok(())
}
