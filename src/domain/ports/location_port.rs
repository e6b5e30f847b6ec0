//! Device location port definition.

use async_trait::async_trait;

use crate::domain::entities::Coordinates;
use crate::domain::errors::LocationError;

/// Port for the platform's location service.
#[async_trait]
pub trait LocationPort: Send + Sync {
    /// Returns the device's current position.
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock location source with a fixed answer.
    pub struct MockLocationPort {
        answer: Result<Coordinates, LocationError>,
        lookups: Arc<AtomicUsize>,
    }

    impl MockLocationPort {
        pub fn at(latitude: f64, longitude: f64) -> Self {
            Self {
                answer: Coordinates::new(latitude, longitude)
                    .ok_or_else(|| LocationError::Unavailable("bad mock".into())),
                lookups: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn failing(error: LocationError) -> Self {
            Self {
                answer: Err(error),
                lookups: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn lookups(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LocationPort for MockLocationPort {
        async fn current_position(&self) -> Result<Coordinates, LocationError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.answer.clone()
        }
    }
}
