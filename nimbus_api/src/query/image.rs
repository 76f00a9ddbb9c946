use url::Url;

use super::{common::QueryCommon, Query};

/// Query builder for image listing endpoints. Filters by datacenter and
/// name; both image catalogs accept the same parameters.
#[derive(Default)]
pub struct ImageQuery {
    pub common: QueryCommon,
    pub datacenter_id: Option<String>,
    pub name: Option<String>,
}

impl Query for ImageQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(datacenter_id) = &self.datacenter_id {
            url.query_pairs_mut()
                .append_pair("datacenterId", datacenter_id.as_str());
        };
        if let Some(name) = &self.name {
            url.query_pairs_mut().append_pair("name", name.as_str());
        };
        url
    }
}

impl ImageQuery {
    /// Restricts results to a single datacenter.
    pub fn with_datacenter(mut self, datacenter_id: &str) -> Self {
        self.datacenter_id = Some(datacenter_id.to_string());
        self
    }

    /// Filters by exact image name. The server filters, it does not key:
    /// more than one image may match.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}
