//! API resource services
//!
//! Each service maps one resource to its endpoints and is written against
//! the [`Transport`](crate::http::Transport) trait.

mod batches;
mod models;

pub use batches::{Batch, BatchCreateDevice, BatchDeviceCreateRequest, BatchService};
pub use models::{Device, DeviceCreateRequest, Facility};
