//! Engine error types

use thiserror::Error;

/// Fatal errors raised by the simulation engine.
///
/// These indicate broken configuration or violated programming invariants,
/// not bad user input: out-of-range user values (withdrawal fraction, spouse
/// offset) are clamped or neutralized instead of rejected.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A salary record referenced a pay level absent from the pay matrix.
    #[error("unknown pay scale level: {0}")]
    UnknownPayLevel(u8),

    /// The pay matrix was constructed with no tiers.
    #[error("pay matrix contains no tiers")]
    EmptyPayMatrix,
}
