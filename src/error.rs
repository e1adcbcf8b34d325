use core::fmt;

/// Error type for ADS111x operations
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Transport(E),
    /// Register write payload was not exactly two bytes
    InvalidPayload {
        /// Length of the rejected payload
        len: usize,
    },
    /// Unrecognized configuration field name
    UnknownField,
    /// The device stayed busy for longer than the allowed number of polls
    Timeout,
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "transport error: {e:?}"),
            Self::InvalidPayload { len } => write!(
                f,
                "register writes take a 16-bit word or exactly 2 bytes, got {len} bytes"
            ),
            Self::UnknownField => f.write_str(
                "unknown configuration field (expected one of: status, mux, scale, mode, \
                 data_rate, comparator_mode, comparator_polarity, comparator_latching, \
                 comparator_queue)",
            ),
            Self::Timeout => f.write_str("device did not finish its conversion in time"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
