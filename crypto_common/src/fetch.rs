//! The network seam: anything that can return raw bytes for an endpoint.
use crate::endpoint::Endpoint;
use crate::result::Result;

/// Fetches the raw response body of a provider endpoint.
///
/// Implementations return the body regardless of HTTP status; status problems
/// surface when the body is decoded.
pub trait Fetch {
    /// Performs one GET against `endpoint`.
    fn fetch(&self, endpoint: Endpoint) -> Result<Vec<u8>>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, endpoint: Endpoint) -> Result<Vec<u8>> {
        (**self).fetch(endpoint)
    }
}
