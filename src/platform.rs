/// Platform - dependency injection container for the stateless ports.
///
/// Ports are `&'static` references, so a `Platform` is `Copy` and every
/// observer can hold its own. The DOM and the mail client are stateful and
/// are passed to the observers directly as `Rc`s.

use crate::ports::{ClockPort, LoggerPort};

#[derive(Clone, Copy)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    clock: &'static dyn ClockPort,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
            clock: crate::adapters::clock(),
        }
    }

    /// Default adapters, with `logger` replacing the console logger.
    pub fn with_logger(logger: &'static dyn LoggerPort) -> Self {
        Self {
            logger,
            ..Self::new()
        }
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    #[inline]
    pub fn clock(&self) -> &'static dyn ClockPort {
        self.clock
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}
