// ABOUTME: Line-oriented interactive shell for fitprofile-cli
// ABOUTME: Splits the command word from its arguments and dispatches to the parsers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::help_text;
use fitprofile::constants::messages::MESSAGE_UNKNOWN_COMMAND;
use fitprofile::constants::syntax::{COMMAND_CURRENT, COMMAND_MODIFY};
use fitprofile::display::ProfilePanel;
use fitprofile::parser::{CurrentCommandParser, ModifyCommandParser};
use fitprofile::profile::ProfileUpdater;
use fitprofile::storage::ProfileStore;
use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// What the shell should do after a line
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print the message and read the next line
    Continue(String),
    /// Leave the shell
    Exit,
}

/// Dispatches shell lines against one profile
pub struct Shell<'a, S: ProfileStore> {
    updater: &'a mut ProfileUpdater<S>,
    panel: Arc<Mutex<ProfilePanel>>,
}

impl<'a, S: ProfileStore> Shell<'a, S> {
    /// Attach a shell to `updater`, subscribing its panel to profile changes
    pub fn new(updater: &'a mut ProfileUpdater<S>) -> Self {
        let panel = Arc::new(Mutex::new(ProfilePanel::from_state(updater.state())));
        updater.subscribe(Box::new(Arc::clone(&panel)));
        Self { updater, panel }
    }

    /// Handle one input line
    pub fn dispatch(&mut self, line: &str) -> Outcome {
        let line = line.trim();
        let (word, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        debug!(command = word, "Dispatching shell command");

        let message = match word {
            "" => String::new(),
            COMMAND_MODIFY => match ModifyCommandParser.parse(args, &mut *self.updater) {
                Ok(command) => command.execute().to_string(),
                Err(e) => e.to_string(),
            },
            COMMAND_CURRENT => match CurrentCommandParser.parse(args) {
                Ok(command) => command.execute().to_string(),
                Err(e) => e.to_string(),
            },
            "show" => self.render_panel(),
            "help" => help_text(),
            "exit" | "quit" => return Outcome::Exit,
            other => format!("{MESSAGE_UNKNOWN_COMMAND}: {other}"),
        };
        Outcome::Continue(message)
    }

    fn render_panel(&self) -> String {
        match self.panel.lock() {
            Ok(panel) => panel.to_string(),
            Err(poisoned) => poisoned.into_inner().to_string(),
        }
    }
}

/// Read lines from `input` until `exit` or end of input
pub fn run<S, R, W>(updater: &mut ProfileUpdater<S>, input: R, mut output: W) -> io::Result<()>
where
    S: ProfileStore,
    R: BufRead,
    W: Write,
{
    let mut shell = Shell::new(updater);
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        match shell.dispatch(&line?) {
            Outcome::Exit => break,
            Outcome::Continue(message) => {
                if !message.is_empty() {
                    writeln!(output, "{message}")?;
                }
            }
        }
        write!(output, "> ")?;
        output.flush()?;
    }
    writeln!(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitprofile::constants::messages;
    use fitprofile::storage::MemoryStore;

    fn updater() -> ProfileUpdater<MemoryStore> {
        ProfileUpdater::load(MemoryStore::new()).unwrap()
    }

    #[test]
    fn test_modify_then_show_reflects_panel() {
        let mut updater = updater();
        let mut shell = Shell::new(&mut updater);

        let Outcome::Continue(feedback) = shell.dispatch("modify height/1.8 weight/72") else {
            panic!("shell exited");
        };
        assert!(feedback.starts_with(messages::MESSAGE_MODIFY_SUCCESS));

        let Outcome::Continue(panel) = shell.dispatch("show") else {
            panic!("shell exited");
        };
        assert_eq!(panel, "Height : 1.8m\nWeight : 72kg\nBMI : 22.2");
    }

    #[test]
    fn test_errors_are_reported_not_fatal() {
        let mut updater = updater();
        let mut shell = Shell::new(&mut updater);
        assert_eq!(
            shell.dispatch("modify"),
            Outcome::Continue(messages::invalid_command_format(messages::MODIFY_USAGE))
        );
        assert_eq!(
            shell.dispatch("current 0"),
            Outcome::Continue(messages::invalid_command_format(messages::CURRENT_USAGE))
        );
        assert_eq!(
            shell.dispatch("current 2"),
            Outcome::Continue("Selected workout 2 as current".into())
        );
        assert_eq!(shell.dispatch("exit"), Outcome::Exit);
    }

    #[test]
    fn test_run_stops_at_exit() {
        let mut updater = updater();
        let input = b"modify username/Alice\nexit\nmodify username/Bob\n".as_slice();
        let mut output = Vec::new();
        run(&mut updater, input, &mut output).unwrap();

        assert_eq!(updater.state().snapshot().username, "Alice");
        assert!(String::from_utf8(output).unwrap().contains("Username : Alice"));
    }
}
