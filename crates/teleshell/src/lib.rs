//! # Teleshell
//!
//! Teleshell is a library for running AWS service operations as typed
//! commands. Each command declares its parameters as an ordinary Rust struct,
//! maps them into a request, calls the AWS SDK and shapes the response into a
//! stream of JSON objects.
//!
//! ## Key Features
//!
//! - **Typed parameters**: a command's parameters are a `clap::Args` struct.
//!   An optional parameter is an `Option`, so "not given" and "given as
//!   `false`" are different values and never need separate bookkeeping.
//! - **Option groups**: nested request blocks are only sent when at least one
//!   of their members was given. See [`group`].
//! - **Selectable output**: a [`Select`] picks the part of the response that
//!   becomes output, or echoes back a parameter.
//! - **Pagination**: list operations fetch pages one after another until the
//!   service stops returning a continuation token, the output sink asks to
//!   stop, or the invocation is cancelled.
//!
//! ## Usage
//!
//! Teleshell is typically used through the `tsh` command line program, but
//! every command can be run directly:
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use tsh::{aws::cloudsearch::DescribeAnalysisSchemes, config::Session, Invocation};
//!
//! let session = Session::default();
//! let sdk_config = session.sdk_config().await;
//! let command = DescribeAnalysisSchemes {
//!     domain_name: "movies".into(),
//!     analysis_scheme_names: None,
//!     deployed: Some(true),
//! };
//! let mut output: Vec<serde_json::Value> = vec![];
//! Invocation::new(&sdk_config)
//!     .with_endpoint(session.endpoint(&sdk_config))
//!     .run(command, &mut output)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Concepts
//!
//! A command runs in four stages:
//!
//! - **Parameters**: the command struct is bound from the caller's input.
//!   This struct is the command's context.
//! - **Request**: [`Cmdlet::request`] maps the context into a request record.
//!   This mapping is total and has no side effects.
//! - **Invocation**: [`Cmdlet::invoke`] makes one SDK call per page.
//! - **Output**: the response is projected by the [`Select`] and pushed into a
//!   [`Sink`].
//!
//! ## Error Handling
//!
//! Teleshell exposes a single error enum [`Error`]. Failures of a command run
//! are reported as a [`CommandFailure`], which classifies the error and keeps
//! the original for inspection. Name-resolution failures are rewritten to
//! name the configured region and endpoint.

extern crate self as tsh;

use std::future::Future;

use snafu::prelude::*;

pub mod aws;
pub mod config;
pub mod failure;
pub mod group;
pub mod paginate;
pub mod pipeline;
pub mod select;
#[cfg(test)]
mod test;

pub use failure::{CommandFailure, Endpoint};
pub use paginate::Cancellation;
pub use pipeline::Sink;
pub use select::Select;

/// Top-level error enum that encompasses all errors.
#[derive(snafu::Snafu, Debug)]
pub enum Error {
    #[snafu(display("{command} failed: {}",
                source.chain()
                    .map(|e| format!("{e}"))
                    .collect::<Vec<_>>()
                    .join("\n -> ")))]
    Invoke {
        command: &'static str,
        source: anyhow::Error,
    },

    #[snafu(display(
        "Name resolution failure attempting to reach {endpoint} while running {command}. \
         Check the region and endpoint given on the command line or in the session defaults."
    ))]
    NameResolution {
        command: &'static str,
        endpoint: Endpoint,
        source: anyhow::Error,
    },

    #[snafu(display("{command} was cancelled"))]
    Cancelled { command: &'static str },

    #[snafu(display("Invalid selector '{selector}': {msg}"))]
    Select { selector: String, msg: String },

    #[snafu(display("Could not serialize {name}: {source}"))]
    Serialize {
        name: String,
        source: serde_json::Error,
    },

    #[snafu(display("Could not write the output of {command}: {source}"))]
    Output {
        command: &'static str,
        source: std::io::Error,
    },

    #[snafu(display("Could not read config file '{path:?}': {source}"))]
    ConfigRead {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Could not parse config file '{path:?}': {source}"))]
    ConfigParse {
        path: std::path::PathBuf,
        source: toml::de::Error,
    },
}

type Result<T, E = Error> = core::result::Result<T, E>;

/// A command wrapping one service operation.
///
/// Implementors are the command's context: a flat record of the bound
/// parameters. Unbound optional parameters must serialize as `null` so that
/// `^Parameter` selections can tell them apart from unknown names.
pub trait Cmdlet: core::fmt::Debug + serde::Serialize {
    /// Display name of the operation, eg `cloudsearch:DescribeDomains`.
    const NAME: &'static str;

    /// Projection used when the caller gives none.
    const DEFAULT_SELECT: &'static str;

    /// Parameter echoed by `--pass-thru`, if the command has one.
    const PASS_THRU: Option<&'static str> = None;

    /// Type of the platform the command talks to.
    ///
    /// For example `aws_config::SdkConfig` in the case of amazon web services.
    type Provider;

    type Request: core::fmt::Debug + serde::Serialize;

    type Response: core::fmt::Debug + serde::Serialize;

    /// Map the bound parameters into a request.
    fn request(&self) -> Self::Request;

    /// Call the operation once.
    fn invoke(
        provider: &Self::Provider,
        request: &Self::Request,
    ) -> impl Future<Output = anyhow::Result<Self::Response>>;

    /// Continuation token of a response, for paginated operations.
    fn continuation(_response: &Self::Response) -> Option<String> {
        None
    }

    /// The continuation token a request carries.
    fn token(_request: &Self::Request) -> Option<&str> {
        None
    }

    /// Aim a request at the page identified by `token`.
    fn continue_with(_request: &mut Self::Request, _token: String) {}

    /// Whether pages should be fetched automatically.
    ///
    /// Commands return `false` when the caller bound the continuation token
    /// themselves, so they get exactly the page they asked for.
    fn auto_iterate(&self) -> bool {
        true
    }
}

/// Statistics of a finished run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Summary {
    /// Number of service calls made.
    pub pages: usize,
    /// Number of objects emitted to the sink.
    pub objects: usize,
}

/// Runs commands against a provider.
pub struct Invocation<'a, P> {
    provider: &'a P,
    endpoint: Endpoint,
    select: Option<String>,
    pass_thru: bool,
    auto_iterate: bool,
    cancellation: Cancellation,
}

impl<'a, P> Invocation<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            endpoint: Endpoint::default(),
            select: None,
            pass_thru: false,
            auto_iterate: true,
            cancellation: Cancellation::default(),
        }
    }

    pub fn provider(&self) -> &P {
        self.provider
    }

    /// Set the endpoint reported in name-resolution failures.
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Set the output projection. `None` uses the command's default.
    pub fn with_select(mut self, select: Option<String>) -> Self {
        self.select = select;
        self
    }

    /// Echo the command's pass-through parameter instead of the response.
    pub fn with_pass_thru(mut self, pass_thru: bool) -> Self {
        self.pass_thru = pass_thru;
        self
    }

    /// Allow or forbid fetching more than one page.
    pub fn with_auto_iteration(mut self, auto_iterate: bool) -> Self {
        self.auto_iterate = auto_iterate;
        self
    }

    pub fn with_cancellation(mut self, cancellation: Cancellation) -> Self {
        self.cancellation = cancellation;
        self
    }

    /// Run a command, pushing its output into `sink`.
    pub async fn run<C>(&self, context: C, sink: impl Sink) -> Result<Summary, CommandFailure>
    where
        C: Cmdlet<Provider = P>,
    {
        self.run_stages(context, sink).await.map_err(|error| {
            log::error!("{}: {error}", C::NAME);
            CommandFailure::new(C::NAME, error)
        })
    }

    async fn run_stages<C>(&self, context: C, mut sink: impl Sink) -> Result<Summary>
    where
        C: Cmdlet<Provider = P>,
    {
        let select = Select::resolve(
            C::NAME,
            self.select.as_deref(),
            self.pass_thru,
            C::DEFAULT_SELECT,
            C::PASS_THRU,
        )?;
        let parameters = serde_json::to_value(&context).context(SerializeSnafu {
            name: format!("{} parameters", C::NAME),
        })?;
        log::debug!("{} bound parameters: {parameters}", C::NAME);

        let auto_iterate = self.auto_iterate && context.auto_iterate();
        let mut request = context.request();
        log::debug!("{} request: {request:?}", C::NAME);

        let mut summary = Summary::default();
        let mut sent = std::collections::HashSet::new();
        loop {
            if !sink.wants_more() {
                log::debug!("{} output wants no more objects", C::NAME);
                break;
            }
            ensure!(
                !self.cancellation.is_cancelled(),
                CancelledSnafu { command: C::NAME }
            );
            let response = tokio::select! {
                biased;
                _ = self.cancellation.cancelled() => {
                    return CancelledSnafu { command: C::NAME }.fail();
                }
                result = C::invoke(self.provider, &request) => {
                    result.map_err(|source| failure::normalize(C::NAME, &self.endpoint, source))?
                }
            };
            summary.pages += 1;

            let response_value = serde_json::to_value(&response).context(SerializeSnafu {
                name: format!("{} response", C::NAME),
            })?;
            let objects = select.project(&parameters, &response_value)?;
            log::info!(
                "{} page {} produced {} object(s)",
                C::NAME,
                summary.pages,
                objects.len()
            );

            let mut stopped = false;
            for object in objects {
                if !sink.wants_more() {
                    stopped = true;
                    break;
                }
                match sink.emit(object) {
                    Ok(flow) => {
                        summary.objects += 1;
                        if flow.is_break() {
                            stopped = true;
                            break;
                        }
                    }
                    Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                        log::debug!("{} output was closed", C::NAME);
                        stopped = true;
                        break;
                    }
                    Err(e) => return Err(e).context(OutputSnafu { command: C::NAME }),
                }
            }
            if stopped {
                log::debug!("{} output asked to stop after {summary:?}", C::NAME);
                break;
            }
            if !auto_iterate {
                break;
            }
            if let Some(token) = C::token(&request) {
                sent.insert(token.to_owned());
            }
            match paginate::next_token(C::NAME, &sent, C::continuation(&response)) {
                Some(token) => {
                    log::debug!("{} continuing with token {token}", C::NAME);
                    C::continue_with(&mut request, token);
                }
                None => break,
            }
        }

        Ok(summary)
    }
}
