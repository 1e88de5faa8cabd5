use std::{
    io::{self, BufRead},
    thread::{self, JoinHandle},
};

use crossbeam_channel::Sender;
use log::debug;

/// Keyboard commands, one per input line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Command {
    Toggle,
    Faster,
    Slower,
    Restart,
    Quit,
}

impl Command {
    pub(super) fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "" | "p" => Some(Self::Toggle),
            "+" | "f" => Some(Self::Faster),
            "-" | "s" => Some(Self::Slower),
            "r" => Some(Self::Restart),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Read stdin on its own thread and forward commands to the playback loop.
/// The sender is dropped when stdin closes.
pub(super) fn spawn(sender: Sender<Command>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("spritzer-controls".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                match Command::parse(&line) {
                    Some(command) => {
                        if sender.send(command).is_err() {
                            break;
                        }
                    }
                    None => debug!("controls: ignoring {:?}", line),
                }
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_command_lines() {
        assert_eq!(Command::parse("\n"), Some(Command::Toggle));
        assert_eq!(Command::parse(" + "), Some(Command::Faster));
        assert_eq!(Command::parse("s"), Some(Command::Slower));
        assert_eq!(Command::parse("r"), Some(Command::Restart));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
        assert_eq!(Command::parse("hello"), None);
    }
}
