//! Reading address and CIDR tokens from files or stdin.
//!
//! Tokens are separated by whitespace or commas. `#` starts a comment that
//! runs to the end of the line.

use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> &'static Regex {
    TOKEN_REGEX.get_or_init(|| Regex::new(r"[^\s,]+").expect("Invalid Regex"))
}

/// Split one line into tokens, dropping any trailing comment.
pub fn line_tokens(line: &str) -> Vec<String> {
    let line = line.split_once('#').map_or(line, |(before, _)| before);
    token_regex()
        .find_iter(line)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Read every token from `reader`.
pub fn read_tokens<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        tokens.extend(line_tokens(&line?));
    }
    log::trace!("read {} tokens", tokens.len());
    Ok(tokens)
}

/// Read every token from the file at `path`.
pub fn read_tokens_from_path(path: &Path) -> io::Result<Vec<String>> {
    log::info!("Reading input from {}", path.display());
    let file = File::open(path)?;
    read_tokens(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_line_tokens() {
        assert_eq!(
            line_tokens("10.0.0.0/24, 10.0.1.0/24  192.168.0.0/16"),
            vec!["10.0.0.0/24", "10.0.1.0/24", "192.168.0.0/16"]
        );
    }

    #[test]
    fn test_line_tokens_comments_and_blanks() {
        assert!(line_tokens("").is_empty());
        assert!(line_tokens("   ").is_empty());
        assert!(line_tokens("# whole line comment").is_empty());
        assert_eq!(line_tokens("10.0.0.1 # office"), vec!["10.0.0.1"]);
        assert_eq!(line_tokens(",,2001:db8::1,,"), vec!["2001:db8::1"]);
    }

    #[test]
    fn test_read_tokens() {
        let text = "# header\n10.0.0.1\n\n10.0.0.2,10.0.0.3\n\t10.0.0.9 # tail\n";
        let tokens = read_tokens(Cursor::new(text)).unwrap();
        assert_eq!(tokens, vec!["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.9"]);
    }

    #[test]
    fn test_read_tokens_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "10.0.0.0/24").unwrap();
        writeln!(file, "10.0.1.0/24 # second").unwrap();
        let tokens = read_tokens_from_path(file.path()).unwrap();
        assert_eq!(tokens, vec!["10.0.0.0/24", "10.0.1.0/24"]);
    }

    #[test]
    fn test_read_tokens_missing_file() {
        assert!(read_tokens_from_path(Path::new("does/not/exist.txt")).is_err());
    }
}
