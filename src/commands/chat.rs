//! Chat Command
//!
//! Runs the intake conversation over a line reader and a writer. Assistant
//! entries are printed as soon as they are appended, so the progress line
//! shows before question generation starts.

use std::io::Write;

use talentscout_core::TranscriptRole;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::services::intake::{IntakeMachine, IntakeSession, TurnStatus};
use crate::utils::error::AppResult;

pub const BANNER: &str = "🤖 TalentScout's Hiring Assistant";
pub const HINT: &str = "Say hello to begin. Type 'exit' at any time to leave.";

/// Drive one session until the candidate exits or input ends.
pub async fn run_chat<R, W>(
    machine: &IntakeMachine,
    mut input: R,
    output: &mut W,
) -> AppResult<IntakeSession>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = machine.start_session();
    writeln!(output, "{}\n{}", BANNER, HINT)?;

    loop {
        write!(output, "\n> ")?;
        output.flush()?;

        let Some(line) = read_line(&mut input).await? else {
            debug!("Input closed");
            break;
        };

        let mut shown = 0;
        let mut write_error = None;
        let outcome = machine
            .handle_turn_with_progress(&mut session, &line, |entries| {
                for entry in entries
                    .iter()
                    .filter(|entry| entry.role == TranscriptRole::Assistant)
                {
                    if let Err(e) = print_reply(output, &entry.content) {
                        write_error = Some(e);
                    }
                    shown += 1;
                }
            })
            .await?;
        if let Some(e) = write_error {
            return Err(e.into());
        }

        for reply in outcome.replies.iter().skip(shown) {
            print_reply(output, reply)?;
        }

        if outcome.status == TurnStatus::Exited {
            break;
        }
    }

    Ok(session)
}

/// Read one line, replacing invalid UTF-8 rather than failing the session.
/// Returns `None` at end of input.
async fn read_line<R>(input: &mut R) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf).await? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

fn print_reply<W: Write>(output: &mut W, reply: &str) -> std::io::Result<()> {
    writeln!(output, "\n{}", reply)?;
    output.flush()
}
