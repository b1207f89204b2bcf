use anyhow::Result;
use mailcanon_config::AppConfig;
use mailcanon_core::EmailValidator;
use serde::Serialize;
use std::io::{self, Write};

pub mod check;
pub mod completions;
pub mod demo;

pub struct Context<'a> {
    pub validator: &'a EmailValidator,
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
