//! Sitedock cloud provisioning
//!
//! Provider abstraction and the provisioning sequencer for standing up
//! public static-website hosting: an object-storage bucket configured for
//! website hosting behind a CDN distribution.
//!
//! The sequencer runs a fixed series of steps in strict order against two
//! provider surfaces (object storage and CDN), halting on the first fatal
//! failure. Providers are injected as trait objects, so the CLI wires in
//! live AWS clients while tests substitute fakes.

pub mod error;
pub mod policy;
pub mod provider;
pub mod sequence;
pub mod step;

// Re-exports
pub use error::{CloudError, Result};
pub use policy::public_read_policy;
pub use provider::{AuthStatus, CdnApi, IdentityApi, SiteSpec, StorageApi};
pub use sequence::{DEFAULT_INDEX_HTML, provision, write_default_index};
pub use step::{RunSummary, Step, StepFailure, StepOutcome, StepResult};
