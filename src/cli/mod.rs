mod prompt;
mod root;

pub use prompt::PromptCommand;
pub use root::{Cli, Commands};
