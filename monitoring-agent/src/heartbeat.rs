use agent_core::{config::Config, models::StatusLine, Result};
use std::{convert::Infallible, io::Write, time::Duration};
use tracing::{debug, error};

/// Prints the status line, sleeps for the interval, and repeats.
pub struct Heartbeat {
    config: Config,
    interval: Duration,
}

impl Heartbeat {
    pub fn new(config: Config) -> Self {
        let interval = Duration::from_secs(config.heartbeat.interval_secs);
        Self { config, interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn status_line(&self) -> StatusLine<'_> {
        StatusLine::new(
            self.config.log_analytics.workspace_id.as_deref(),
            self.config.log_analytics.shared_key.as_deref(),
        )
    }

    /// Writes a single status line and flushes it.
    pub fn beat<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{}", self.status_line())?;
        writer.flush()?;
        Ok(())
    }

    /// Never returns unless writing to `writer` fails.
    pub async fn run<W: Write>(self, mut writer: W) -> Result<Infallible> {
        let mut beats: u64 = 0;
        loop {
            if let Err(e) = self.beat(&mut writer) {
                error!("Failed to write status line after {} beats: {}", beats, e);
                return Err(e);
            }
            beats += 1;
            debug!("Heartbeat {} emitted, sleeping {}s", beats, self.interval.as_secs());

            tokio::time::sleep(self.interval).await;
        }
    }
}
