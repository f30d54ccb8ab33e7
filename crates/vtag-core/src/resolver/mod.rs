//! Resolution of vSphere tags into per-resource tag lists.
//!
//! One pass lists categories, then tags, then the objects attached to those tags, and joins
//! the three in memory. Calls are strictly sequential and nothing is cached between passes.
mod join;
pub use join::{UNKNOWN_CATEGORY, tag_display};

use std::{collections::HashMap, sync::Arc};

use tracing::debug;
use vtag_model::{
    ResourceTagMap, RestConfig,
    wire::{CategoryInfo, TagAssociation, TagAssociationQuery, TagInfo},
};

use crate::{
    error::{ApiError, ApiResult},
    retry::RetryPolicy,
    session::RestSession,
    transport::{Method, Transport},
};

use join::{TagTable, join_associations};

const CATEGORY_LIST: &str = "tagging/category";
const TAG_LIST: &str = "tagging/tag";
const ATTACHED_OBJECTS: &str = "tagging/tag-association?~action=list-attached-objects-on-tags";

pub struct TagResolver {
    session: RestSession,
    prefix: String,
    retry: RetryPolicy,
}

impl TagResolver {
    /// Validate `cfg` and open the REST session.
    ///
    /// The retry policy comes from `cfg.retry`; override it with [`TagResolver::with_retry`].
    pub async fn connect(cfg: &RestConfig, transport: Arc<dyn Transport>) -> ApiResult<Self> {
        cfg.validate()?;

        let session = RestSession::new(cfg, transport);
        session.connect().await?;

        Ok(Self {
            session,
            prefix: cfg.tags_prefix.clone(),
            retry: RetryPolicy::from(&cfg.retry),
        })
    }

    /// Replace the retry policy and return the updated resolver.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn session(&self) -> &RestSession {
        &self.session
    }

    /// Build the full `type -> id -> tags` map.
    ///
    /// Failed passes are retried under the resolver's [`RetryPolicy`], with the session
    /// re-established before each new attempt. On error no partial map is returned.
    pub async fn resolve_resource_tags(&self) -> ApiResult<ResourceTagMap> {
        self.retry
            .run("resolve_resource_tags", |attempt| async move {
                if attempt > 0 {
                    self.session.connect().await?;
                }
                self.resolve_once().await
            })
            .await
    }

    async fn resolve_once(&self) -> ApiResult<ResourceTagMap> {
        let categories = self.fetch_categories().await?;
        let tags = self.fetch_tags(&categories).await?;
        let associations = self.fetch_associations(tags.ids()).await?;
        debug!(?associations, "fetched tag associations");

        let map = join_associations(&tags, &associations)?;
        debug!(resources = map.len(), ?map, "resolved resource tags");
        Ok(map)
    }

    /// Category id -> category name.
    async fn fetch_categories(&self) -> ApiResult<HashMap<String, String>> {
        let ids: Vec<String> = self.session.request_json(CATEGORY_LIST, Method::Get, None).await?;

        let mut categories = HashMap::with_capacity(ids.len());
        for id in ids {
            let info: CategoryInfo = self
                .session
                .request_json(&format!("{CATEGORY_LIST}/id:{id}"), Method::Get, None)
                .await?;
            categories.insert(id, info.name);
        }
        Ok(categories)
    }

    async fn fetch_tags(&self, categories: &HashMap<String, String>) -> ApiResult<TagTable> {
        let ids: Vec<String> = self.session.request_json(TAG_LIST, Method::Get, None).await?;

        let mut tags = TagTable::default();
        for id in ids {
            let info: TagInfo = self
                .session
                .request_json(&format!("{TAG_LIST}/id:{id}"), Method::Get, None)
                .await?;
            let category = categories.get(&info.category_id).map(String::as_str);
            tags.insert(id, tag_display(&self.prefix, category, &info.name));
        }
        Ok(tags)
    }

    async fn fetch_associations(&self, tag_ids: &[String]) -> ApiResult<Vec<TagAssociation>> {
        let query = TagAssociationQuery {
            tag_ids: tag_ids.to_vec(),
        };
        let body = serde_json::to_value(&query)
            .map_err(|e| ApiError::Response(format!("cannot encode association query: {e}")))?;

        self.session
            .request_json(ATTACHED_OBJECTS, Method::Post, Some(body))
            .await
    }
}

impl std::fmt::Debug for TagResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagResolver")
            .field("base_url", &self.session.base_url())
            .field("prefix", &self.prefix)
            .field("retry", &self.retry)
            .finish()
    }
}
