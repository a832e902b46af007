/// Error taxonomy shared by every pipeline stage.
///
/// The split matters to the mobile client: `BadRequest` and `Upstream` mean
/// "your input or provider key is the problem" and render as a message,
/// while `MalformedResponse` and `Infrastructure` mean "the service is
/// broken". Messages never contain the caller's provider key.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Missing or invalid client input, rejected before any provider call.
    #[error("{0}")]
    BadRequest(String),
    /// The AI provider rejected the request (quota, bad key, bad audio).
    #[error("provider error: {0}")]
    Upstream(String),
    /// The generation provider replied with something that is not the
    /// requested JSON document.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
    /// Object stage unreachable, misconfigured, or missing the object.
    #[error("{0}")]
    Infrastructure(String),
}
