#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Begin,
    Stop,
    Merhaba,
    SetUrl(String),
    /// `/url` with zero or more than one argument.
    UrlUsage,
}

impl Command {
    /// Returns `None` for text the bot does not answer.
    pub fn parse(text: &str) -> Option<Command> {
        if text.starts_with("/url") {
            return parse_url_command(text);
        }

        match text {
            "/start" => Some(Command::Start),
            "/begin" => Some(Command::Begin),
            "/stop" => Some(Command::Stop),
            "/merhaba" => Some(Command::Merhaba),
            _ => None,
        }
    }
}

// Any text starting with "/url" counts. Split on single spaces, so
// "/url  x" has an empty middle part and counts as two arguments.
fn parse_url_command(text: &str) -> Option<Command> {
    let parts: Vec<&str> = text.split(' ').collect();

    match parts.as_slice() {
        [_, arg] => Some(Command::SetUrl(arg.to_string())),
        _ => Some(Command::UrlUsage),
    }
}
