use auto_impl::auto_impl;

/// Submits signed transactions to a network.
///
/// The receipt is opaque to this crate. Implementations decide whether submission is
/// synchronous, what a receipt contains and what failures mean.
#[auto_impl(&mut, Box)]
pub trait Broadcaster {
    /// Submission receipt.
    type Receipt;
    /// Submission error.
    type Error;

    /// Submits a signed transaction encoding.
    fn submit(&mut self, signed: &[u8]) -> Result<Self::Receipt, Self::Error>;
}
