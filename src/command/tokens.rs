use camino::Utf8Path;
use clap::Parser;
use serde::Serialize;

use crate::registry::Registry;
use crate::{PlugsOutput, PlugsResult};

#[derive(Debug, Serialize, Parser)]
pub struct Tokens {}

impl Tokens {
    pub fn run(&self, output_dir: &Utf8Path) -> PlugsResult<PlugsOutput> {
        let registry = Registry::load(output_dir)?;
        Ok(PlugsOutput::TokenList(registry.tokens().to_vec()))
    }
}
