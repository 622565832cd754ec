use std::io::{self, Write};

use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

/// Renders command results either as plain lines or as pretty JSON on stdout.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn emit<T: Serialize>(&self, text: &str, json_value: &T) -> AppResult<()> {
        let mut stdout = io::stdout().lock();
        match self.mode {
            OutputMode::Text => writeln!(stdout, "{text}")?,
            OutputMode::Json => {
                serde_json::to_writer_pretty(&mut stdout, json_value)?;
                writeln!(stdout)?;
            }
        }
        Ok(())
    }
}
