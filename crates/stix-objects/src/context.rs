use std::fmt;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use stix_types::{Clock, Identifier, Precision, SystemClock, Timestamp};

/// The clock and random source that object constructors draw from.
///
/// Constructors read the clock once (for `created`) and draw from the random
/// source once (for `id`). Swapping either for a deterministic implementation
/// makes the whole construction reproducible.
pub struct ObjectContext {
    clock: Box<dyn Clock>,
    rng: Box<dyn RngCore>,
}

impl ObjectContext {
    /// Wall clock and the thread-local generator.
    pub fn system() -> Self {
        Self::new(SystemClock, rand::thread_rng())
    }

    pub fn new(clock: impl Clock + 'static, rng: impl RngCore + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            rng: Box::new(rng),
        }
    }

    /// A context whose identifiers are reproducible from `seed`.
    pub fn seeded(clock: impl Clock + 'static, seed: u64) -> Self {
        Self::new(clock, StdRng::seed_from_u64(seed))
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Current time at `precision`.
    pub fn now(&self, precision: Precision) -> Timestamp {
        Timestamp::now(precision, self.clock.as_ref())
    }

    /// A fresh `{object_type}--{uuid4}` identifier.
    pub fn new_identifier(&mut self, object_type: &str) -> Identifier {
        Identifier::generate(object_type, self.rng.as_mut())
    }
}

impl Default for ObjectContext {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Debug for ObjectContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectContext").finish_non_exhaustive()
    }
}
