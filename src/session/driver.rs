// SPDX-License-Identifier: GPL-3.0-only

//! Wall-clock driver for a photobooth session
//!
//! Runs the started session to completion, issuing one tick per second
//! with exactly one tick in flight at a time. A oneshot stop signal
//! cancels the session and invalidates the pending tick.

use crate::capture::{CapturedImage, FrameSource};
use crate::errors::AppResult;
use crate::session::BoothSession;
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{debug, info};

/// Tick interval between countdown steps.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Drive a started session to completion on tokio time.
///
/// Returns the captured shots on completion, or an empty list when the
/// stop signal fires first. Capture errors cancel the session inside the
/// state machine and propagate to the caller.
pub async fn run<S: FrameSource>(
    session: &mut BoothSession,
    source: &mut S,
    mut stop: oneshot::Receiver<()>,
) -> AppResult<Vec<CapturedImage>> {
    let generation = session.generation();

    while session.is_active() {
        tokio::select! {
            _ = tokio::time::sleep(TICK_INTERVAL) => {
                if session.generation() != generation {
                    // The session was reset under us; the pending tick is void.
                    debug!("Pending tick invalidated by reset");
                    return Ok(Vec::new());
                }
                let outcome = session.tick(source)?;
                debug!(?outcome, "Session tick");
            }
            _ = &mut stop => {
                info!("Stop signal received, cancelling session");
                session.reset();
                return Ok(Vec::new());
            }
        }
    }

    Ok(session.take_shots())
}
