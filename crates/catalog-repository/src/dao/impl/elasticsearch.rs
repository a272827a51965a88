//! Elasticsearch-backed product DAO.
//!
//! Talks to the Elasticsearch REST API directly over HTTP/JSON. Products are
//! stored one document per product in a single index, with the same camelCase
//! field names the rest of the system uses.

use crate::dao::ProductDao;
use async_trait::async_trait;
use catalog_config::DocumentStoreConfig;
use catalog_core::{CatalogError, CatalogResult, ConflictPolicy, Product, ProductId};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

/// Painless script applied by update-by-query.
const UPDATE_SCRIPT: &str = "ctx._source.price = params.price; \
     ctx._source.description = params.description; \
     ctx._source.category = params.category;";

/// Product DAO over an Elasticsearch index.
#[derive(Debug, Clone)]
pub struct ElasticsearchProductDao {
    client: Client,
    base_url: String,
    index: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: SearchHits,
}

#[derive(Debug, Deserialize)]
struct SearchHits {
    #[serde(default)]
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "_source")]
    source: Product,
}

#[derive(Debug, Default, Deserialize)]
struct ByQueryResponse {
    #[serde(default)]
    updated: u64,
    #[serde(default)]
    deleted: u64,
    #[serde(default)]
    version_conflicts: u64,
}

impl ElasticsearchProductDao {
    /// Creates a DAO from configuration.
    pub fn new(config: &DocumentStoreConfig) -> CatalogResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| CatalogError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "Document store configured at {} (index '{}')",
            config.url, config.default_index
        );

        Ok(Self::with_client(client, &config.url, &config.default_index))
    }

    /// Creates a DAO around an existing HTTP client.
    pub fn with_client(client: Client, base_url: &str, index: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            index: index.to_string(),
        }
    }

    /// Returns the index name.
    #[must_use]
    pub fn index_name(&self) -> &str {
        &self.index
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}{}", self.base_url, self.index, path)
    }

    async fn post_json(&self, url: &str, body: &Value) -> CatalogResult<Response> {
        self.client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| CatalogError::DocumentStore(format!("Request to {} failed: {}", url, e)))
    }

    async fn search(&self, query: Value) -> CatalogResult<Vec<Product>> {
        let response = self
            .post_json(&self.url("/_search"), &json!({ "query": query }))
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("Index '{}' does not exist yet, returning no products", self.index);
            return Ok(Vec::new());
        }

        let body: SearchResponse = read_json(response).await?;
        Ok(body.hits.hits.into_iter().map(|hit| hit.source).collect())
    }
}

#[async_trait]
impl ProductDao for ElasticsearchProductDao {
    async fn index(&self, product: &Product) -> CatalogResult<()> {
        debug!("Elasticsearch index: product {}", product.id);

        let body = serde_json::to_value(product)?;
        let response = self.post_json(&self.url("/_doc"), &body).await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(CatalogError::StoreRejected(format!(
                "HTTP {}: {}",
                status, error_body
            )));
        }

        Ok(())
    }

    async fn search_all(&self) -> CatalogResult<Vec<Product>> {
        debug!("Elasticsearch search: match_all");
        self.search(json!({ "match_all": {} })).await
    }

    async fn search_by_id(&self, id: ProductId) -> CatalogResult<Vec<Product>> {
        debug!("Elasticsearch search: id = {}", id);
        self.search(json!({
            "bool": {
                "must": [
                    { "terms": { "id": [id] } }
                ]
            }
        }))
        .await
    }

    async fn update_by_id(
        &self,
        product: &Product,
        conflicts: ConflictPolicy,
    ) -> CatalogResult<u64> {
        debug!(
            "Elasticsearch update_by_query: id = {}, conflicts = {}",
            product.id, conflicts
        );

        let body = json!({
            "query": {
                "bool": {
                    "must": [
                        { "match": { "id": product.id } }
                    ]
                }
            },
            "script": {
                "source": UPDATE_SCRIPT,
                "lang": "painless",
                "params": {
                    "price": product.price,
                    "description": product.description,
                    "category": product.category,
                }
            }
        });

        let url = format!(
            "{}?conflicts={}",
            self.url("/_update_by_query"),
            conflicts.as_query_value()
        );
        let response = self.post_json(&url, &body).await?;
        let outcome: ByQueryResponse = read_json(response).await?;

        if outcome.version_conflicts > 0 {
            debug!(
                "update_by_query for product {} skipped {} conflicting documents",
                product.id, outcome.version_conflicts
            );
        }

        Ok(outcome.updated)
    }

    async fn delete_by_id(&self, id: ProductId) -> CatalogResult<u64> {
        debug!("Elasticsearch delete_by_query: id = {}", id);

        let body = json!({
            "query": {
                "match": { "id": id }
            }
        });

        let response = self
            .post_json(&self.url("/_delete_by_query"), &body)
            .await?;
        let outcome: ByQueryResponse = read_json(response).await?;

        Ok(outcome.deleted)
    }

    async fn ping(&self) -> CatalogResult<()> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| CatalogError::DocumentStore(format!("Health check failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(CatalogError::DocumentStore(format!(
                "Health check returned HTTP {}",
                response.status()
            )));
        }

        Ok(())
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> CatalogResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CatalogError::DocumentStore(format!("HTTP {}: {}", status, body)));
    }

    response
        .json()
        .await
        .map_err(|e| CatalogError::DocumentStore(format!("Failed to parse response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building_trims_trailing_slash() {
        let dao = ElasticsearchProductDao::with_client(Client::new(), "http://es:9200/", "products");
        assert_eq!(dao.url("/_search"), "http://es:9200/products/_search");
        assert_eq!(dao.index_name(), "products");
    }

    #[test]
    fn test_new_from_config() {
        let config = DocumentStoreConfig::default();
        let dao = ElasticsearchProductDao::new(&config).unwrap();
        assert_eq!(dao.url("/_doc"), "http://localhost:9200/products/_doc");
    }

    #[test]
    fn test_search_response_parsing() {
        let raw = r#"{
            "took": 1,
            "hits": {
                "total": { "value": 1, "relation": "eq" },
                "hits": [
                    { "_index": "products", "_id": "abc", "_source": { "id": 4, "name": "Lamp" } }
                ]
            }
        }"#;
        let parsed: SearchResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.hits.hits.len(), 1);
        assert_eq!(parsed.hits.hits[0].source.name, "Lamp");
    }

    #[test]
    fn test_update_script_touches_only_mutable_fields() {
        assert!(UPDATE_SCRIPT.contains("params.price"));
        assert!(UPDATE_SCRIPT.contains("params.description"));
        assert!(UPDATE_SCRIPT.contains("params.category"));
        assert!(!UPDATE_SCRIPT.contains("name"));
    }
}
