use tracing_subscriber::{
    fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Diagnostics go to stderr; stdout carries only status lines.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    subscriber(env_filter, std::io::stderr).init();
}

pub fn subscriber<W>(
    env_filter: EnvFilter,
    writer: W,
) -> impl SubscriberExt + SubscriberInitExt + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(writer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        io::{self, Write},
        sync::{Arc, Mutex},
    };

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_events_go_to_the_diagnostics_writer() {
        let diagnostics = Captured::default();
        let sink = diagnostics.clone();
        let subscriber = subscriber(EnvFilter::new("info"), move || sink.clone());

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("agent starting");
            tracing::debug!("filtered out");
        });

        let output = String::from_utf8(diagnostics.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("INFO"));
        assert!(output.contains("agent starting"));
        assert!(!output.contains("filtered out"));
    }
}
