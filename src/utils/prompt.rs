//! Line-oriented prompts for interactive commands

use anyhow::{Context, Result, bail};
use edison_gitea::CreateRepoOption;
use std::io::{BufRead, Write};

/// Print `prompt`, read one line and return it trimmed
///
/// End of input yields an empty string.
pub fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read from standard input")?;

    Ok(line.trim().to_string())
}

/// Interpret a private y/n answer
///
/// `y`/`yes` mean private and `n`/`no` mean public, in any case. Anything
/// else, an empty answer included, creates a private repository.
pub fn parse_private_answer(answer: &str) -> bool {
    !matches!(answer.trim().to_lowercase().as_str(), "n" | "no")
}

/// Ask for the name, description and visibility of a new repository
pub fn read_repo_options<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<CreateRepoOption> {
    let name = read_line(input, output, "Repository name: ")?;
    if name.is_empty() {
        bail!("Repository name cannot be empty");
    }

    let description = read_line(input, output, "Description: ")?;
    let private = parse_private_answer(&read_line(input, output, "Private? (y/n): ")?);

    Ok(CreateRepoOption {
        name,
        description,
        private,
    })
}
