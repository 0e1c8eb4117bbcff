// STRING database access — network images and functional enrichment.
//
// The InteractionService trait is the seam the pipelines depend on.
// StringClient implements it over the public STRING HTTP API; tests plug in
// canned implementations.

pub mod client;
pub mod pacing;
pub mod traits;
