use std::{fmt, path::Path};

use eyre::WrapErr;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::constants::TOKENS_FILE_PATH;

/// Bearer token for a single game account.
#[derive(PartialEq, Eq)]
pub struct Credential {
    pub token: String,
}

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .finish()
    }
}

pub async fn read_file_lines(path: impl AsRef<Path>) -> eyre::Result<Vec<String>> {
    let file = tokio::fs::File::open(path).await?;
    let mut lines = BufReader::new(file).lines();

    let mut contents = vec![];
    while let Some(line) = lines.next_line().await? {
        contents.push(line);
    }

    Ok(contents)
}

/// One token per line; blank lines and `#` comments are skipped.
pub fn parse_credentials(lines: &[String]) -> Vec<Credential> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(Credential::new)
        .collect()
}

pub async fn read_credentials_from(path: impl AsRef<Path>) -> eyre::Result<Vec<Credential>> {
    let path = path.as_ref();
    let lines = read_file_lines(path)
        .await
        .wrap_err_with(|| format!("Tokens file {} must be present", path.display()))?;

    Ok(parse_credentials(&lines))
}

pub async fn read_credentials() -> eyre::Result<Vec<Credential>> {
    read_credentials_from(TOKENS_FILE_PATH).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_lines_and_comments() {
        let lines: Vec<String> = ["  first  ", "", "# disabled", "second", "   "]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let credentials = parse_credentials(&lines);

        assert_eq!(
            credentials,
            vec![Credential::new("first"), Credential::new("second")]
        );
    }

    #[test]
    fn debug_output_hides_token() {
        let rendered = format!("{:?}", Credential::new("very-secret"));
        assert!(!rendered.contains("very-secret"));
    }

    #[tokio::test]
    async fn reads_tokens_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.txt");
        tokio::fs::write(&path, "aaa\nbbb\n\nccc\n").await.unwrap();

        let tokens: Vec<String> = read_credentials_from(&path)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.token)
            .collect();

        assert_eq!(tokens, ["aaa", "bbb", "ccc"]);
    }

    #[tokio::test]
    async fn missing_tokens_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_credentials_from(dir.path().join("nope.txt")).await;

        assert!(result.is_err());
    }
}
