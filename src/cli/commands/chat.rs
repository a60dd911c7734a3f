use anyhow::Result;
use std::path::PathBuf;

use super::{resolve, warn_if_missing};
use crate::chat::{ChatSession, SessionConfig};
use crate::translation::{SharedTranslator, parse_language};

pub struct ChatOptions {
    pub to: Option<String>,
    pub mappings: Option<PathBuf>,
}

pub fn run_chat(options: ChatOptions) -> Result<()> {
    let to = options.to.as_deref().map(parse_language).transpose()?;
    let config = resolve(options.mappings, None)?;

    warn_if_missing(&config.mappings_path);
    let translator = SharedTranslator::load(config.mappings_path)?;

    let mut session = ChatSession::new(SessionConfig::new(to, config.target_language), translator);
    session.run()
}
