//! Console input

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use key_agreement::ExchangeConfig;

/// Parse one line as an integer in `(0, max_value]`
pub fn parse_bounded(line: &str, name: &'static str, config: &ExchangeConfig) -> Result<i64> {
    let trimmed = line.trim();
    let value: i64 = trimmed
        .parse()
        .with_context(|| format!("{name}: '{trimmed}' is not an integer"))?;
    Ok(config.check_bound(name, value)?)
}

/// Console prompter over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            bail!("Unexpected end of input");
        }
        Ok(line)
    }

    pub fn number(
        &mut self,
        prompt: &str,
        name: &'static str,
        config: &ExchangeConfig,
    ) -> Result<i64> {
        let line = self.read_line(prompt)?;
        parse_bounded(&line, name, config)
    }

    /// Read a non-empty message, without its line terminator
    pub fn message(&mut self, prompt: &str) -> Result<String> {
        let line = self.read_line(prompt)?;
        let message = line.trim_end_matches(['\r', '\n']).to_string();
        if message.is_empty() {
            bail!("Message must not be empty");
        }
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_bounded() {
        let config = ExchangeConfig::default();
        assert_eq!(parse_bounded(" 23\n", "p", &config).unwrap(), 23);
        assert!(parse_bounded("abc", "p", &config).is_err());
        assert!(parse_bounded("0", "p", &config).is_err());
        assert!(parse_bounded("-5", "p", &config).is_err());
        assert!(parse_bounded("1000001", "p", &config).is_err());
        assert_eq!(parse_bounded("1000000", "p", &config).unwrap(), 1_000_000);
    }

    #[test]
    fn test_prompter_flow() {
        let input = Cursor::new("5\n23\nHI there\r\n");
        let mut output = Vec::new();
        let config = ExchangeConfig::default();

        let mut prompter = Prompter::new(input, &mut output);
        assert_eq!(prompter.number("g: ", "generator", &config).unwrap(), 5);
        assert_eq!(prompter.number("p: ", "modulus", &config).unwrap(), 23);
        assert_eq!(prompter.message("text: ").unwrap(), "HI there");
        assert!(prompter.number("a: ", "first exponent", &config).is_err());

        assert_eq!(String::from_utf8(output).unwrap(), "g: p: text: a: ");
    }

    #[test]
    fn test_empty_message_rejected() {
        let mut prompter = Prompter::new(Cursor::new("\n"), Vec::new());
        assert!(prompter.message("text: ").is_err());
    }
}
