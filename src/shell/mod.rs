//! Interactive command loop.
//!
//! Reads one command per line, runs it against the directory and writes the
//! reply. Errors from a command are shown to the user and the loop carries
//! on; only I/O failures end the session early.

use crate::commands::{execute, Command, CommandContext};
use crate::models::Directory;
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Run the command loop until `exit`/`close` or end of input.
///
/// # Arguments
/// * `book` - The directory every command works on
/// * `ctx` - Birthday window and date settings for the handlers
/// * `input` - Source of command lines
/// * `output` - Destination for prompts and replies
pub async fn run_shell<R, W>(
    book: &mut Directory,
    ctx: &CommandContext,
    input: R,
    output: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_line(output, WELCOME).await?;

    let mut lines = input.lines();
    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            info!("Input closed, ending session");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let result = match line.parse::<Command>() {
            Ok(cmd) => {
                debug!("Running command: {:?}", cmd);
                execute(cmd, book, ctx)
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(outcome) => {
                write_line(output, outcome.message()).await?;
                if outcome.is_exit() {
                    break;
                }
            }
            Err(e) => {
                debug!("Command failed: {}", e);
                write_line(output, &e.to_string()).await?;
            }
        }
    }

    Ok(())
}

/// Run the command loop over the process's stdin and stdout.
pub async fn run_stdio(book: &mut Directory, ctx: &CommandContext) -> Result<()> {
    let input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();
    run_shell(book, ctx, input, &mut output).await
}

async fn write_line<W>(output: &mut W, text: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}
