//! Panel client: HTTP API boundary, request dispatch, and the poll timer.
mod api;
mod error;
mod handle;
mod poller;
mod wire;

pub use api::{ApiClient, ClientSettings, ReqwestClient};
pub use error::{ApiError, ApiFailure};
pub use handle::{ClientCommand, ClientEvent, ClientHandle};
pub use poller::{PollerHandle, DEFAULT_POLL_INTERVAL};
pub use wire::{
    ConfigPayload, EmailSection, FtpSection, LogsResponse, RunNowResponse, ScheduleSection,
};
