//! Batch service
//!
//! A batch provisions several devices from one request. Batches belong to
//! a project and are listed per project.

use super::models::{Device, DeviceCreateRequest, Facility};
use crate::error::Result;
use crate::http::{ApiResponse, Transport};
use crate::options::{GetOptions, ListOptions, Meta, QueryAppender};
use crate::pagination::{list_all, Paginated};
use crate::paths::{nested_path, path_for, Resource};
use crate::types::{Href, JsonValue, Method, Timestamp};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// A batch of device instances
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub href: String,
    #[serde(default)]
    pub project: Href,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub facilities: Vec<Facility>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub devices: Vec<Device>,
}

/// Request body for creating batches of devices
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchDeviceCreateRequest {
    pub batches: Vec<BatchCreateDevice>,
}

/// One batch in a create request.
///
/// Serializes as the device request's fields plus `quantity` and, when
/// non-zero, `facility_diversity_level`, all in one JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchCreateDevice {
    #[serde(flatten)]
    pub device: DeviceCreateRequest,
    pub quantity: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub facility_diversity_level: i32,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(value: &i32) -> bool {
    *value == 0
}

/// One page of a batch listing
#[derive(Debug, Deserialize)]
struct BatchPage {
    #[serde(default)]
    batches: Vec<Batch>,
    #[serde(default)]
    meta: Meta,
}

impl Paginated for BatchPage {
    type Item = Batch;

    fn into_parts(self) -> (Vec<Batch>, Meta) {
        (self.batches, self.meta)
    }
}

#[derive(Debug, Deserialize)]
struct BatchList {
    #[serde(default)]
    batches: Vec<Batch>,
}

/// Batch operations against a transport
pub struct BatchService<'a, T: Transport + ?Sized> {
    transport: &'a T,
    cancel: CancellationToken,
}

impl<'a, T: Transport + ?Sized> BatchService<'a, T> {
    /// Create a service; `cancel` aborts any call in progress
    pub fn new(transport: &'a T, cancel: CancellationToken) -> Self {
        Self { transport, cancel }
    }

    /// Get a batch by ID
    pub async fn get(&self, batch_id: &str, opts: Option<&GetOptions>) -> Result<Batch> {
        let path = opts.with_query(&path_for(Resource::Batches, batch_id));
        let response = self
            .transport
            .send(Method::GET, &path, None, &self.cancel)
            .await?;
        Ok(response.decode::<Batch>()?.body)
    }

    /// List all batches of a project, following pagination.
    ///
    /// With a pinned page only that page is returned, and the response's
    /// page metadata is recorded on `opts`.
    pub async fn list(
        &self,
        project_id: &str,
        opts: Option<&mut ListOptions>,
    ) -> Result<Vec<Batch>> {
        let base_path = nested_path(Resource::Projects, project_id, Resource::Batches);
        let transport = self.transport;
        let cancel = self.cancel.clone();

        let batches = list_all(&base_path, opts, &self.cancel, move |path| {
            let cancel = cancel.clone();
            async move {
                transport
                    .send(Method::GET, &path, None, &cancel)
                    .await
                    .and_then(|response| response.decode::<BatchPage>())
                    .map(|response| response.body)
            }
        })
        .await?;

        debug!("Listed {} batches in project {}", batches.len(), project_id);
        Ok(batches)
    }

    /// Create batches of devices in a project
    pub async fn create(
        &self,
        project_id: &str,
        request: &BatchDeviceCreateRequest,
    ) -> Result<Vec<Batch>> {
        let path = format!(
            "{}/batch",
            nested_path(Resource::Projects, project_id, Resource::Devices)
        );
        let body: JsonValue = serde_json::to_value(request)?;
        let response = self
            .transport
            .send(Method::POST, &path, Some(body), &self.cancel)
            .await?;
        Ok(response.decode::<BatchList>()?.body.batches)
    }

    /// Delete a batch, optionally removing the devices it created.
    ///
    /// Any response body is discarded; only status and headers are kept.
    pub async fn delete(&self, batch_id: &str, remove_devices: bool) -> Result<ApiResponse<()>> {
        let path = format!(
            "{}?remove_associated_instances={remove_devices}",
            path_for(Resource::Batches, batch_id)
        );
        let response = self
            .transport
            .send(Method::DELETE, &path, None, &self.cancel)
            .await?;
        Ok(ApiResponse {
            body: (),
            status: response.status,
            headers: response.headers,
        })
    }
}
