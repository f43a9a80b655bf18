// Parsing of one input line into a typed command.
// Tokens are whitespace-delimited, so guest names and dates cannot contain spaces.

use std::str::SplitWhitespace;

use thiserror::Error;

use crate::room_catalog::RoomNumber;

// Every variant is reported on the wire as the same generic message,
// the detail is only for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid command")]
    UnknownCommand(String),

    #[error("Invalid command")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Invalid command")]
    InvalidRoomNumber(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Book {
        room_number: RoomNumber,
        guest_name: String,
        check_in_date: String,
    },
    Checkout {
        room_number: RoomNumber,
    },
    DisplayAll,
    // Kept as text: an unknown type simply matches no room
    Available {
        room_type: String,
    },
    Search {
        room_number: RoomNumber,
    },
    Waitlist {
        name: String,
        room_type: String,
        date: String,
    },
    ShowWait,
    History,
    Exit,
}

struct Args<'a> {
    command: &'static str,
    tokens: SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn text(&mut self, argument: &'static str) -> Result<String, CommandError> {
        self.tokens
            .next()
            .map(str::to_string)
            .ok_or(CommandError::MissingArgument {
                command: self.command,
                argument,
            })
    }

    fn room_number(&mut self) -> Result<RoomNumber, CommandError> {
        let token = self.tokens.next().ok_or(CommandError::MissingArgument {
            command: self.command,
            argument: "room number",
        })?;
        token
            .parse()
            .map_err(|_| CommandError::InvalidRoomNumber(token.to_string()))
    }
}

impl Command {
    // Blank lines parse to None. Tokens past the expected arguments are ignored.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(action) = tokens.next() else {
            return Ok(None);
        };

        let command = match action {
            "BOOK" => {
                let mut args = Args {
                    command: "BOOK",
                    tokens,
                };
                Command::Book {
                    room_number: args.room_number()?,
                    guest_name: args.text("guest name")?,
                    check_in_date: args.text("check-in date")?,
                }
            }
            "CHECKOUT" => {
                let mut args = Args {
                    command: "CHECKOUT",
                    tokens,
                };
                Command::Checkout {
                    room_number: args.room_number()?,
                }
            }
            "DISPLAYALL" => Command::DisplayAll,
            "AVAILABLE" => {
                let mut args = Args {
                    command: "AVAILABLE",
                    tokens,
                };
                Command::Available {
                    room_type: args.text("room type")?,
                }
            }
            "SEARCH" => {
                let mut args = Args {
                    command: "SEARCH",
                    tokens,
                };
                Command::Search {
                    room_number: args.room_number()?,
                }
            }
            "WAITLIST" => {
                let mut args = Args {
                    command: "WAITLIST",
                    tokens,
                };
                Command::Waitlist {
                    name: args.text("name")?,
                    room_type: args.text("room type")?,
                    date: args.text("date")?,
                }
            }
            "SHOWWAIT" => Command::ShowWait,
            "HISTORY" => Command::History,
            "EXIT" => Command::Exit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}
