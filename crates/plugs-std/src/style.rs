use console::style;

pub enum Style {
    Command, // Commands, inline code, env variable keys, and flags
    Path, // File paths
    Prompt,
    InfoPrefix,    // "==>": text
    WarningPrefix, // "WARN:" text
    ErrorPrefix,   // "ERROR:", "error:", and "error[code]:" text
    SuccessPrefix, // "✓" text
    Heading,
    Chain,
    Token,
    Address,
    Limit,
}

impl Style {
    pub fn paint<S: AsRef<str>>(&self, message: S) -> String {
        let message_ref = message.as_ref();

        if is_no_color_set() {
            return message_ref.to_string();
        }

        match &self {
            Style::Command | Style::Limit => style(message_ref).yellow(),
            Style::Chain => style(message_ref).cyan(),
            Style::Token => style(message_ref).magenta().bold(),
            Style::Address => style(message_ref).dim(),
            Style::Prompt => style(message_ref).bold(),
            Style::InfoPrefix => style(message_ref).blue().bold(),
            Style::WarningPrefix => style(message_ref).yellow(),
            Style::ErrorPrefix => style(message_ref).red().bold(),
            Style::SuccessPrefix => style(message_ref).green().bold(),
            Style::Path | Style::Heading => style(message_ref).bold(),
        }
        .to_string()
    }
}

pub fn is_no_color_set() -> bool {
    is_bool_env_var_set("NO_COLOR") || is_bool_env_var_set("PLUGS_NO_COLOR")
}

fn is_bool_env_var_set(key: &str) -> bool {
    !matches!(
        std::env::var(key).as_deref(),
        Err(..) | Ok("") | Ok("0") | Ok("false") | Ok("False") | Ok("FALSE")
    )
}
