/*
[INPUT]:  Category queries, drafts and ids
[OUTPUT]: Category pages, records and delete confirmations
[POS]:    HTTP layer - category CRUD endpoints (require admin auth)
[UPDATE]: When category routes or query parameters change
*/

// ### Category Endpoints

use reqwest::Method;
use uuid::Uuid;

use crate::http::{AdminClient, Result};
use crate::types::{Category, CategoryPage, CategoryQuery, CategoryUpdate, DeleteResponse, NewCategory};

const CATEGORIES_ENDPOINT: &str = "/admin/categories";

fn category_endpoint(id: Uuid) -> String {
    format!("{CATEGORIES_ENDPOINT}/{id}")
}

impl AdminClient {
    /// List one page of categories
    ///
    /// GET /admin/categories?page={page}&page_size={size}[&sort_by&sort_order][&filter_by&filter_value]
    pub async fn list_categories(&self, query: &CategoryQuery) -> Result<CategoryPage> {
        tracing::debug!(page = query.page, page_size = query.page_size, "listing categories");
        let builder = self
            .request(Method::GET, CATEGORIES_ENDPOINT)?
            .query(&query.to_query_pairs());
        self.send_authorized(builder).await
    }

    /// GET /admin/categories/{id}
    pub async fn get_category(&self, id: Uuid) -> Result<Category> {
        let builder = self.request(Method::GET, &category_endpoint(id))?;
        self.send_authorized(builder).await
    }

    /// POST /admin/categories
    pub async fn create_category(&self, category: &NewCategory) -> Result<Category> {
        let builder = self.request(Method::POST, CATEGORIES_ENDPOINT)?.json(category);
        let created: Category = self.send_authorized(builder).await?;
        tracing::info!(category_id = %created.id, "category created");
        Ok(created)
    }

    /// Update only the fields present in `update`
    ///
    /// PATCH /admin/categories/{id}
    pub async fn update_category(&self, id: Uuid, update: &CategoryUpdate) -> Result<Category> {
        let builder = self
            .request(Method::PATCH, &category_endpoint(id))?
            .json(update);
        let updated: Category = self.send_authorized(builder).await?;
        tracing::info!(category_id = %id, "category updated");
        Ok(updated)
    }

    /// DELETE /admin/categories/{id}
    pub async fn delete_category(&self, id: Uuid) -> Result<DeleteResponse> {
        let builder = self.request(Method::DELETE, &category_endpoint(id))?;
        let response: DeleteResponse = self.send_authorized(builder).await?;
        tracing::info!(category_id = %id, "category deleted");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{AdminError, ClientConfig};
    use crate::types::{CategoryField, CategoryType, SortOrder};

    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn category_json(id: Uuid, label: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "label": label,
            "value_definition": "revenue",
            "description": "Revenue tag",
            "type": "api_tag",
            "priority": 1
        })
    }

    async fn signed_in_client(server: &MockServer) -> AdminClient {
        let client = AdminClient::with_config(ClientConfig::with_base_url(server.uri())).unwrap();
        client
            .session()
            .set_tokens("access".to_string(), "refresh".to_string())
            .unwrap();
        client
    }

    #[tokio::test]
    async fn test_list_sends_sort_and_filter() {
        let server = MockServer::start().await;
        let id = Uuid::new_v4();

        Mock::given(method("GET"))
            .and(path("/admin/categories"))
            .and(query_param("page", "2"))
            .and(query_param("page_size", "20"))
            .and(query_param("sort_by", "priority"))
            .and(query_param("sort_order", "desc"))
            .and(query_param("filter_by", "label"))
            .and(query_param("filter_value", "rev"))
            .and(header("authorization", "Bearer access"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [category_json(id, "Revenue")],
                "total": 21
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = signed_in_client(&server).await;
        let query = CategoryQuery::page(2, 20)
            .sorted(CategoryField::Priority, SortOrder::Desc)
            .filtered(CategoryField::Label, "rev");

        let page = client.list_categories(&query).await.unwrap();
        assert_eq!(page.total, 21);
        assert_eq!(page.items[0].id, id);
    }

    #[tokio::test]
    async fn test_create_posts_body() {
        let server = MockServer::start().await;
        let id = Uuid::new_v4();

        Mock::given(method("POST"))
            .and(path("/admin/categories"))
            .and(body_json(serde_json::json!({
                "label": "Revenue",
                "value_definition": "revenue",
                "description": "Revenue tag",
                "type": "api_tag",
                "priority": 1
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(category_json(id, "Revenue")))
            .expect(1)
            .mount(&server)
            .await;

        let client = signed_in_client(&server).await;
        let created = client
            .create_category(&NewCategory {
                label: "Revenue".to_string(),
                value_definition: "revenue".to_string(),
                description: "Revenue tag".to_string(),
                category_type: CategoryType::ApiTag,
                priority: 1,
            })
            .await
            .unwrap();
        assert_eq!(created.id, id);
    }

    #[tokio::test]
    async fn test_update_patches_only_changed_fields() {
        let server = MockServer::start().await;
        let id = Uuid::new_v4();

        Mock::given(method("PATCH"))
            .and(path(format!("/admin/categories/{id}")))
            .and(body_json(serde_json::json!({"label": "Costs"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(category_json(id, "Costs")))
            .expect(1)
            .mount(&server)
            .await;

        let client = signed_in_client(&server).await;
        let update = CategoryUpdate {
            label: Some("Costs".to_string()),
            ..CategoryUpdate::default()
        };
        let updated = client.update_category(id, &update).await.unwrap();
        assert_eq!(updated.label, "Costs");
    }

    #[tokio::test]
    async fn test_delete_without_trailing_slash() {
        let server = MockServer::start().await;
        let id = Uuid::new_v4();

        Mock::given(method("DELETE"))
            .and(path(format!("/admin/categories/{id}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"detail": "Category deleted successfully"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = signed_in_client(&server).await;
        let response = client.delete_category(id).await.unwrap();
        assert_eq!(response.detail, "Category deleted successfully");
    }

    #[tokio::test]
    async fn test_get_missing_category() {
        let server = MockServer::start().await;
        let id = Uuid::new_v4();

        Mock::given(method("GET"))
            .and(path(format!("/admin/categories/{id}")))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"detail": "Category not found"})),
            )
            .mount(&server)
            .await;

        let client = signed_in_client(&server).await;
        let err = client.get_category(id).await.unwrap_err();
        assert!(matches!(err, AdminError::NotFound { ref message } if message == "Category not found"));
    }
}
