//! The `utils` module provides definitions shared across `topicreg`:
//! the error taxonomy and the logging setup.

pub mod error;
pub mod logging;
