// Line-oriented command loop: one command in, at most one response line out

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::{command::Command, hotel::Hotel, response::Response};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Skip,
    Exit,
    Respond(Response),
}

// Parses and applies a single line. Malformed input becomes an ERROR response.
pub fn evaluate(hotel: &mut Hotel, line: &str) -> Step {
    match Command::parse(line) {
        Ok(None) => Step::Skip,
        Ok(Some(command)) => {
            debug!(?command, "executing");
            match hotel.execute(command) {
                Some(response) => Step::Respond(response),
                None => Step::Exit,
            }
        }
        Err(e) => {
            warn!(error = ?e, line, "rejected input line");
            Step::Respond(Response::error(e))
        }
    }
}

// Runs until EXIT or end of input, flushing after every response.
// Bytes that are not UTF-8 are decoded lossily so one bad line cannot end the session.
pub fn run<R: BufRead, W: Write>(
    hotel: &mut Hotel,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);

        match evaluate(hotel, line) {
            Step::Skip => continue,
            Step::Exit => {
                info!("exit requested");
                return Ok(());
            }
            Step::Respond(response) => {
                writeln!(output, "{response}")?;
                output.flush()?;
            }
        }
    }

    info!("end of input");
    Ok(())
}
