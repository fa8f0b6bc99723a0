use crate::utils::error::CommandError;

/// One line of shell input, tokenised on whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddUser { name: String, role: String },
    AddTopic { topic: String, user: String },
    Subscribe { topic: String, user: String },
    /// The message body, its tokens re-joined with single spaces.
    Publish { body: String },
    Exit,
}

impl Command {
    /// Parse a line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&head, args)) = parts.split_first() else {
            return Ok(None);
        };

        let command = match head {
            "addUser" => {
                let [name, role] = exact(args, "addUser userName role")?;
                Command::AddUser { name, role }
            }
            "addTopic" => {
                let [topic, user] = exact(args, "addTopic topicName userName")?;
                Command::AddTopic { topic, user }
            }
            "subscribeTopic" => {
                let [topic, user] = exact(args, "subscribeTopic topicName userName")?;
                Command::Subscribe { topic, user }
            }
            "publishMessage" => {
                if args.is_empty() {
                    return Err(CommandError::Usage("publishMessage messageBody"));
                }
                Command::Publish {
                    body: args.join(" "),
                }
            }
            "exit" => Command::Exit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn exact(args: &[&str], usage: &'static str) -> Result<[String; 2], CommandError> {
    match args {
        [a, b] => Ok([a.to_string(), b.to_string()]),
        _ => Err(CommandError::Usage(usage)),
    }
}
