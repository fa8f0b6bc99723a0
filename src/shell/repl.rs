//! The read-eval-print loop.
//!
//! Reads one command per line, applies it to the registry and writes a
//! single status line per command. Subscriber notifications are produced by
//! the registry's notifier, not by this loop.

use std::io::{self, BufRead, Write};

use crate::broker::Registry;
use crate::shell::command::Command;
use crate::utils::error::RegistryError;

/// Apply `command` to the registry and return the success line.
///
/// `Command::Exit` is handled by `run` and yields `"Exiting..."` here.
pub fn execute(registry: &mut Registry, command: Command) -> Result<String, RegistryError> {
    match command {
        Command::AddUser { name, role } => {
            registry.add_user(&name, &role)?;
            Ok(format!("User {name} with role {role} added."))
        }
        Command::AddTopic { topic, user } => {
            registry.add_topic(&topic, &user)?;
            Ok(format!("Topic {topic} added by {user}."))
        }
        Command::Subscribe { topic, user } => {
            registry.subscribe(&topic, &user)?;
            Ok(format!("User {user} subscribed to topic {topic}."))
        }
        Command::Publish { body } => {
            let receipt = registry.publish(&body)?;
            Ok(format!("Message published to topic {}.", receipt.topic))
        }
        Command::Exit => Ok("Exiting...".to_string()),
    }
}

/// Run the shell until `exit` or end of input.
pub fn run<R, W>(registry: &mut Registry, input: R, mut out: W, prompt: &str) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{prompt}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            tracing::debug!("end of input");
            break;
        };
        let line = line?;

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        let exit = command == Command::Exit;
        match execute(registry, command) {
            Ok(status) => writeln!(out, "{status}")?,
            Err(e) => writeln!(out, "{e}")?,
        }
        if exit {
            break;
        }
    }

    out.flush()
}
