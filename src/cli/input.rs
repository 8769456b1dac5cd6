//! Interactive stdin input
//!
//! Stdin reads block, so they run on the blocking pool like the other
//! blocking I/O in this crate.

use std::io::{self, Write};

/// Print `prompt` and read one trimmed line from stdin.
pub async fn read_line(prompt: &str) -> io::Result<String> {
    let prompt = prompt.to_string();

    tokio::task::spawn_blocking(move || {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line.trim().to_string())
    })
    .await
    .map_err(io::Error::other)?
}
