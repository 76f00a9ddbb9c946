//! HTTP client for the Nimbus Compute API.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use url::Url;

use crate::{
    query::{ImageQuery, Query},
    response,
    types::{CustomerImage, CustomerImagePage, OsImage, OsImagePage},
    Error,
};

/// Production API endpoint.
const DEFAULT_API_URL: &str = "https://api.nimbuscloud.io";

/// Request timeout for API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration, passed explicitly into [`Client::new`]. There is
/// no process-wide client or session state.
#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
    organization_id: Option<String>,
    timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            organization_id: None,
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl Config {
    /// Creates a configuration for the given organization against the
    /// production endpoint.
    pub fn new(organization_id: impl Into<String>) -> Self {
        Self {
            organization_id: Some(organization_id.into()),
            ..Self::default()
        }
    }

    /// Reads `NIMBUS_ORGANIZATION` and `NIMBUS_API_URL` from the
    /// environment. A missing organization is not an error here; operations
    /// fail with [`Error::MissingOrganization`] before any network call.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(organization_id) = std::env::var("NIMBUS_ORGANIZATION") {
            if !organization_id.is_empty() {
                config.organization_id = Some(organization_id);
            }
        }
        if let Ok(base_url) = std::env::var("NIMBUS_API_URL") {
            if !base_url.is_empty() {
                config.base_url = base_url;
            }
        }
        config
    }

    /// Sets or replaces the organization ID.
    pub fn with_organization(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    /// Overrides the API endpoint. Used for testing with wiremock.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client for the Nimbus Compute API.
///
/// Immutable after construction and safe to share across tasks; every
/// operation is a single call-and-decode with no state carried between
/// calls. Cancellation is the transport timeout.
pub struct Client {
    config: Config,
    http: reqwest::Client,
}

/// Request body when exporting a customer image to an OVF package.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportImage<'a> {
    image_id: &'a str,
    ovf_package_prefix: &'a str,
}

impl Client {
    /// Creates a new client from the given configuration.
    pub fn new(config: Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, http })
    }

    /// Creates a client against a custom endpoint. Used for testing with
    /// wiremock.
    pub fn with_base_url(base_url: &str, organization_id: &str) -> Result<Self, Error> {
        Self::new(Config::new(organization_id).with_base_url(base_url))
    }

    /// Retrieves a customer image by ID.
    ///
    /// Returns `Ok(None)` when the API reports the image does not exist.
    pub async fn get_customer_image(&self, id: &str) -> Result<Option<CustomerImage>, Error> {
        let action = format!("retrieve customer image '{}'", id);
        let url = self.api_url(&format!("image/customerImage/{}", id))?;
        let (status, body) = self.get_raw(url).await?;
        response::decode_resource(status, &body, &action)
    }

    /// Finds a customer image by name in a given datacenter.
    ///
    /// Returns `Ok(None)` when nothing matches and
    /// [`Error::AmbiguousName`] when more than one image does.
    pub async fn find_customer_image(
        &self,
        name: &str,
        datacenter_id: &str,
    ) -> Result<Option<CustomerImage>, Error> {
        let action = format!(
            "find customer image '{}' in datacenter '{}'",
            name, datacenter_id
        );
        let query = ImageQuery::default()
            .with_name(name)
            .with_datacenter(datacenter_id);
        let url = self.api_url_with_query("image/customerImage", &query)?;
        let (status, body) = self.get_raw(url).await?;
        let page: CustomerImagePage = response::decode_page(status, &body, &action)?;

        if page.page_count == 0 {
            return Ok(None);
        }
        if page.page_count != 1 {
            return Err(Error::AmbiguousName {
                name: name.to_string(),
                datacenter_id: datacenter_id.to_string(),
                matches: page.total_count,
            });
        }
        Ok(page.images.into_iter().next())
    }

    /// Fetches a page of customer images matching the given query.
    pub async fn list_customer_images(
        &self,
        query: &ImageQuery,
    ) -> Result<CustomerImagePage, Error> {
        let action = list_action("customer images", query);
        let url = self.api_url_with_query("image/customerImage", query)?;
        let (status, body) = self.get_raw(url).await?;
        response::decode_page(status, &body, &action)
    }

    /// Exports a customer image as an OVF package, returning the ID of the
    /// export operation.
    ///
    /// The export runs asynchronously; the image's state is
    /// `PendingChange` until it completes and the package becomes available
    /// for download.
    pub async fn export_customer_image(
        &self,
        image_id: &str,
        ovf_package_prefix: &str,
    ) -> Result<String, Error> {
        let action = format!(
            "export customer image '{}' with OVF package prefix '{}'",
            image_id, ovf_package_prefix
        );
        let url = self.api_url("image/exportImage")?;
        let request_body = ExportImage {
            image_id,
            ovf_package_prefix,
        };
        let (status, body) = self.post_raw(url, &request_body).await?;
        response::accepted_operation_field(status, &body, "imageExportId", &action)
    }

    /// Retrieves an OS image by ID.
    ///
    /// Returns `Ok(None)` when the API reports the image does not exist.
    pub async fn get_os_image(&self, id: &str) -> Result<Option<OsImage>, Error> {
        let action = format!("retrieve OS image '{}'", id);
        let url = self.api_url(&format!("image/osImage/{}", id))?;
        let (status, body) = self.get_raw(url).await?;
        response::decode_resource(status, &body, &action)
    }

    /// Finds an OS image by name in a given datacenter.
    pub async fn find_os_image(
        &self,
        name: &str,
        datacenter_id: &str,
    ) -> Result<Option<OsImage>, Error> {
        let action = format!("find OS image '{}' in datacenter '{}'", name, datacenter_id);
        let query = ImageQuery::default()
            .with_name(name)
            .with_datacenter(datacenter_id);
        let url = self.api_url_with_query("image/osImage", &query)?;
        let (status, body) = self.get_raw(url).await?;
        let page: OsImagePage = response::decode_page(status, &body, &action)?;

        if page.page_count == 0 {
            return Ok(None);
        }
        if page.page_count != 1 {
            return Err(Error::AmbiguousName {
                name: name.to_string(),
                datacenter_id: datacenter_id.to_string(),
                matches: page.total_count,
            });
        }
        Ok(page.images.into_iter().next())
    }

    /// Fetches a page of OS images matching the given query.
    pub async fn list_os_images(&self, query: &ImageQuery) -> Result<OsImagePage, Error> {
        let action = list_action("OS images", query);
        let url = self.api_url_with_query("image/osImage", query)?;
        let (status, body) = self.get_raw(url).await?;
        response::decode_page(status, &body, &action)
    }

    fn organization_id(&self) -> Result<&str, Error> {
        self.config
            .organization_id
            .as_deref()
            .ok_or(Error::MissingOrganization)
    }

    fn api_url(&self, path: &str) -> Result<Url, Error> {
        let organization_id = self.organization_id()?;
        let url = Url::parse(&format!(
            "{}/compute/v2/{}/{}",
            self.config.base_url, organization_id, path
        ))?;
        Ok(url)
    }

    fn api_url_with_query(&self, path: &str, query: &impl Query) -> Result<Url, Error> {
        let url = self.api_url(path)?;
        Ok(query.add_to_url(&url))
    }

    async fn get_raw(&self, url: Url) -> Result<(StatusCode, String), Error> {
        tracing::debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        Ok((status, body))
    }

    async fn post_raw<B>(&self, url: Url, request_body: &B) -> Result<(StatusCode, String), Error>
    where
        B: Serialize,
    {
        tracing::debug!("POST {}", url);
        let resp = self
            .http
            .post(url)
            .header("accept", "application/json")
            .json(request_body)
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        Ok((status, body))
    }
}

fn list_action(kind: &str, query: &ImageQuery) -> String {
    match &query.datacenter_id {
        Some(datacenter_id) => format!("list {} in datacenter '{}'", kind, datacenter_id),
        None => format!("list {}", kind),
    }
}
