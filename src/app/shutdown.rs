//! Graceful shutdown handling.

use tokio_util::sync::CancellationToken;

/// Stops background tasks started for a run.
///
/// Currently that is only the cache sweeper.
pub fn shutdown_gracefully(sweeper_shutdown: Option<CancellationToken>) {
    if let Some(shutdown) = sweeper_shutdown {
        shutdown.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shutdown_cancels_sweeper() {
        let token = CancellationToken::new();
        shutdown_gracefully(Some(token.clone()));
        assert!(token.is_cancelled());
        shutdown_gracefully(None);
    }
}
