//! Typed REST bindings for the runner API.
//!
//! SYSTEM CONTEXT
//! ==============
//! A console page pairs one [`ResourceApi`] with one descriptor set from the
//! `schema` crate. The bindings are thin: one HTTP request per call, no
//! retry, no caching. Failures come back as [`ApiError`] for the caller to
//! surface.
//!
//! ```no_run
//! # async fn demo() -> Result<(), client::ApiError> {
//! let runner = client::RunnerClient::from_env()?;
//! let page = runner.projects().list(&client::ListParams::default()).await?;
//! println!("{} projects", page.total);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod envelope;
pub mod error;
pub mod options;

pub use api::{ListParams, ResourceApi, RunnerClient, SaveMode};
pub use config::{ClientConfig, Timeouts};
pub use envelope::Page;
pub use error::{ApiError, ErrorCode};
pub use options::ResolvedOption;
