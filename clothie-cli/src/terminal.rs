//! Line-oriented terminal input.

use anyhow::Result;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncWriteExt;
use tokio::io::BufReader;
use tokio::io::Lines;
use tokio::io::Stdin;

pub struct Terminal {
    lines: Lines<BufReader<Stdin>>,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Print `prompt` and read one line. `None` at end of input.
    pub async fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(prompt.as_bytes()).await?;
        stdout.flush().await?;
        Ok(self.lines.next_line().await?)
    }

    /// Ask a yes/no question. Anything but `y`/`yes` is a no.
    pub async fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.read_line(&format!("{} [y/N] ", question)).await?;
        Ok(answer.is_some_and(|a| is_yes(&a)))
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
    }
}
