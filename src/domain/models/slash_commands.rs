#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub struct SlashCommand {
    command: String,
    pub args: Vec<String>,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let mut args = text
            .trim()
            .split(' ')
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        let prefix = args[0].to_string();
        args.remove(0);

        let cmd = SlashCommand {
            command: prefix,
            args,
        };
        if cmd.is_quit()
            || cmd.is_connect()
            || cmd.is_disconnect()
            || cmd.is_sources()
            || cmd.is_copy_campaign()
            || cmd.is_help()
        {
            return Some(cmd);
        }

        return None;
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_connect(&self) -> bool {
        return ["/con", "/connect"].contains(&self.command.as_str());
    }

    pub fn is_disconnect(&self) -> bool {
        return ["/dis", "/disconnect"].contains(&self.command.as_str());
    }

    pub fn is_sources(&self) -> bool {
        return ["/s", "/sources"].contains(&self.command.as_str());
    }

    pub fn is_copy_campaign(&self) -> bool {
        return ["/c", "/copy"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }

    pub fn first_arg(&self) -> Option<&str> {
        return self
            .args
            .iter()
            .map(|e| return e.trim())
            .find(|e| return !e.is_empty());
    }
}
