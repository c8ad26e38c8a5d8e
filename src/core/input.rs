use crate::utils::error::{Result, TallyError};
use std::io::{BufRead, Write};
use thiserror::Error;

/// Why a line of user input was not accepted. Always recovered by prompting
/// again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputRejection {
    #[error("An integer is required!")]
    NotAnInteger,

    #[error("Expected the input to be in the {allowed} range!")]
    OutOfRange { allowed: String },

    #[error("Input is invalid. Only \"y\", \"yes\", \"q\" and \"quit\" are allowed!")]
    NotYesOrQuit,
}

/// 解析整數並檢查是否在允許的離散集合內
pub fn parse_ranged(text: &str, allowed: &[u32]) -> std::result::Result<u32, InputRejection> {
    let number: i64 = text
        .trim()
        .parse()
        .map_err(|_| InputRejection::NotAnInteger)?;

    allowed
        .iter()
        .copied()
        .find(|value| i64::from(*value) == number)
        .ok_or_else(|| InputRejection::OutOfRange {
            allowed: allowed
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// `true` to continue, `false` to quit. Case-insensitive, no other tokens.
pub fn parse_yes_quit(text: &str) -> std::result::Result<bool, InputRejection> {
    match text.to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "q" | "quit" => Ok(false),
        _ => Err(InputRejection::NotYesOrQuit),
    }
}

/// Line-oriented prompts over any reader/writer pair.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 顯示提示並讀取一行；輸入結束 (EOF) 視為使用者中斷
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // 非 UTF-8 位元組以替代字元保留，交給解析器拒絕
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(TallyError::Interrupted);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Keeps asking until the answer is one of `allowed`.
    pub fn ranged_input(&mut self, label: &str, allowed: &[u32]) -> Result<u32> {
        loop {
            let line = self.read_line(&format!("{}: ", label))?;
            match parse_ranged(&line, allowed) {
                Ok(value) => return Ok(value),
                Err(rejection) => {
                    tracing::debug!("Rejected '{}' for {}: {:?}", line, label, rejection);
                    self.say(&rejection.to_string())?;
                }
            }
        }
    }

    pub fn yes_or_quit(&mut self, label: &str) -> Result<bool> {
        loop {
            let line = self.read_line(&format!("{} [Y/q]: ", label))?;
            match parse_yes_quit(&line) {
                Ok(answer) => return Ok(answer),
                Err(rejection) => self.say(&rejection.to_string())?,
            }
        }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
