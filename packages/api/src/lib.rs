//! # API crate: REST client for the club backend
//!
//! Every page, form and list talks to the backend through this crate. The
//! backend exposes one collection per entity, each with the same five routes:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`Resource::list`] | `GET /{collection}` |
//! | [`Resource::get`] | `GET /{collection}/{id}` |
//! | [`Resource::create`] | `POST /{collection}` |
//! | [`Resource::update`] | `PUT /{collection}/{id}` |
//! | [`Resource::delete`] | `DELETE /{collection}/{id}` |
//!
//! [`Resource::save`] picks create or update from the presence of an id, which
//! is what every form's submit does.
//!
//! ## Responses
//!
//! All requests send and accept JSON. A non-2xx status becomes
//! [`ApiError::Http`] carrying the status and the parsed error body. A 204 is
//! an empty result. Anything else is parsed as JSON. There are no retries,
//! timeouts or caching: each call is exactly one request.
//!
//! ## Result assignment
//!
//! Results are embedded in athletes on the backend. [`ApiClient::assign_result`]
//! attaches a saved result to an existing athlete by fetching the athlete,
//! appending the result and writing the athlete back.
//! [`ApiClient::reassign_result`] does the same and then detaches the result
//! from its previous owner, so each result stays with exactly one athlete.

use std::marker::PhantomData;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use store::{AppConfig, Athlete, Discipline, Product, Record, ResultRecord};

mod error;
pub use error::{ApiError, Result};

const JSON: &str = "application/json";

/// Handle to the backend. Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    /// Create a client for `base_url`, e.g. `http://localhost:8080/api`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let raw = base_url.into();
        let base_url = raw.trim().trim_end_matches('/').to_string();
        let host = base_url
            .strip_prefix("http://")
            .or_else(|| base_url.strip_prefix("https://"));
        if host.is_none_or(|h| h.is_empty()) {
            return Err(ApiError::InvalidBaseUrl(raw));
        }
        Ok(Self {
            base_url,
            client: reqwest::Client::new(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn athletes(&self) -> Resource<Athlete> {
        self.resource("athletes")
    }

    pub fn disciplines(&self) -> Resource<Discipline> {
        self.resource("disciplines")
    }

    pub fn results(&self) -> Resource<ResultRecord> {
        self.resource("results")
    }

    pub fn products(&self) -> Resource<Product> {
        self.resource("products")
    }

    fn resource<T>(&self, collection: &'static str) -> Resource<T> {
        Resource {
            api: self.clone(),
            collection,
            _marker: PhantomData,
        }
    }

    /// Attach `result` to the athlete with `athlete_id`.
    ///
    /// The athlete must already exist. A result whose id is already among the
    /// athlete's results is not added twice; the athlete is still written back
    /// so the embedded copy picks up any edits.
    pub async fn assign_result(&self, athlete_id: u64, result: &ResultRecord) -> Result<Athlete> {
        let athletes = self.athletes();
        let mut athlete = athletes.get(athlete_id).await?;

        match result.id {
            Some(id) => {
                if let Some(existing) = athlete.results.iter_mut().find(|r| r.id == Some(id)) {
                    *existing = result.clone();
                } else {
                    athlete.results.push(result.clone());
                }
            }
            None => athlete.results.push(result.clone()),
        }

        tracing::debug!(athlete_id, result_id = ?result.id, "assigning result to athlete");
        athletes.update(athlete_id, &athlete).await
    }

    /// Drop the result with `result_id` from the athlete with `athlete_id`.
    pub async fn detach_result(&self, athlete_id: u64, result_id: u64) -> Result<Athlete> {
        let athletes = self.athletes();
        let mut athlete = athletes.get(athlete_id).await?;
        athlete.results.retain(|r| r.id != Some(result_id));

        tracing::debug!(athlete_id, result_id, "detaching result from athlete");
        athletes.update(athlete_id, &athlete).await
    }

    /// Attach `result` to `athlete_id` and take it away from `previous`.
    ///
    /// An athlete holds each result at most once and a result has one owner,
    /// so moving a result between athletes rewrites both of them. The new
    /// owner is written first.
    pub async fn reassign_result(
        &self,
        previous: Option<u64>,
        athlete_id: u64,
        result: &ResultRecord,
    ) -> Result<Athlete> {
        let athlete = self.assign_result(athlete_id, result).await?;
        if let (Some(previous), Some(result_id)) = (previous, result.id) {
            if previous != athlete_id {
                self.detach_result(previous, result_id).await?;
            }
        }
        Ok(athlete)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "api request");
        self.client
            .request(method, url)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
    }
}

/// Parsed body of a successful response; `None` for 204 or an empty body.
async fn read_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<Option<T>> {
    let status = response.status();
    let url = response.url().clone();
    let text = response.text().await?;

    if !status.is_success() {
        let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text));
        tracing::warn!(status = status.as_u16(), %url, %body, "api error response");
        return Err(ApiError::Http {
            status: status.as_u16(),
            body,
        });
    }
    if status == StatusCode::NO_CONTENT || text.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(&text)?))
}

/// One backend collection, e.g. `/athletes`.
#[derive(Clone, Debug)]
pub struct Resource<T> {
    api: ApiClient,
    collection: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Resource<T>
where
    T: Record + Clone + Serialize + DeserializeOwned,
{
    pub fn collection(&self) -> &'static str {
        self.collection
    }

    fn path(&self) -> String {
        format!("/{}", self.collection)
    }

    fn item_path(&self, id: u64) -> String {
        format!("/{}/{}", self.collection, id)
    }

    pub async fn list(&self) -> Result<Vec<T>> {
        let response = self.api.request(Method::GET, &self.path()).send().await?;
        Ok(read_body(response).await?.unwrap_or_default())
    }

    pub async fn get(&self, id: u64) -> Result<T> {
        let response = self
            .api
            .request(Method::GET, &self.item_path(id))
            .send()
            .await?;
        read_body(response).await?.ok_or(ApiError::EmptyBody)
    }

    /// POST a new record. A 204 echoes the submitted record back.
    pub async fn create(&self, record: &T) -> Result<T> {
        let response = self
            .api
            .request(Method::POST, &self.path())
            .body(serde_json::to_vec(record)?)
            .send()
            .await?;
        Ok(read_body(response).await?.unwrap_or_else(|| record.clone()))
    }

    /// PUT a record to `id`. A 204 echoes the submitted record back with `id`.
    pub async fn update(&self, id: u64, record: &T) -> Result<T> {
        let response = self
            .api
            .request(Method::PUT, &self.item_path(id))
            .body(serde_json::to_vec(record)?)
            .send()
            .await?;
        Ok(read_body(response)
            .await?
            .unwrap_or_else(|| record.with_id(id)))
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        let response = self
            .api
            .request(Method::DELETE, &self.item_path(id))
            .send()
            .await?;
        read_body::<serde_json::Value>(response).await?;
        Ok(())
    }

    /// Delete `record` and hand its id to `on_removed` once the backend has
    /// confirmed. A failed request never reaches `on_removed`.
    ///
    /// Returns `Ok(false)` without sending anything when the record has no id.
    pub async fn remove(&self, record: &T, on_removed: impl FnOnce(u64)) -> Result<bool> {
        let Some(id) = record.id() else {
            return Ok(false);
        };
        self.delete(id).await?;
        on_removed(id);
        Ok(true)
    }

    /// Update when the record has an id, create otherwise.
    pub async fn save(&self, record: &T) -> Result<T> {
        match record.id() {
            Some(id) => self.update(id, record).await,
            None => self.create(record).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mockito::Matcher;
    use store::ResultType;

    fn sprint() -> Discipline {
        Discipline {
            id: Some(1),
            name: "100m".to_string(),
            result_type: ResultType::Time,
        }
    }

    fn athlete_json(id: u64, results: &str) -> String {
        format!(
            r#"{{"id":{id},"name":"Ida","age":12,"gender":"Female","club":"Lyngby",
                "disciplines":[{{"id":1,"name":"100m","resultType":"TIME"}}],
                "results":{results}}}"#
        )
    }

    fn new_result(id: Option<u64>) -> ResultRecord {
        ResultRecord {
            id,
            result_type: ResultType::Time,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            result_value: "00:00:14:20".to_string(),
            discipline: sprint(),
        }
    }

    #[test]
    fn test_base_url_validation() {
        assert_eq!(
            ApiClient::new("http://localhost:8080/api/").unwrap().base_url(),
            "http://localhost:8080/api"
        );
        assert!(matches!(ApiClient::new(""), Err(ApiError::InvalidBaseUrl(_))));
        assert!(matches!(ApiClient::new("localhost:8080"), Err(ApiError::InvalidBaseUrl(_))));
        assert!(ApiClient::from_config(&AppConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_list_sends_json_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/disciplines")
            .match_header("content-type", "application/json")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":1,"name":"100m","resultType":"TIME"},{"id":2,"name":"Shot put","resultType":"DISTANCE"}]"#)
            .expect(1)
            .create_async()
            .await;

        let api = ApiClient::new(server.url()).unwrap();
        let disciplines = api.disciplines().list().await.unwrap();
        assert_eq!(disciplines.len(), 2);
        assert_eq!(disciplines[1].result_type, ResultType::Distance);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_carries_parsed_body() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/athletes/99")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Athlete not found"}"#)
            .create_async()
            .await;

        let api = ApiClient::new(server.url()).unwrap();
        let err = api.athletes().get(99).await.unwrap_err();
        assert!(err.is_not_found());
        match err {
            ApiError::Http { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body["message"], "Athlete not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_with_plain_text_body() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/products")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let api = ApiClient::new(server.url()).unwrap();
        match api.products().list().await.unwrap_err() {
            ApiError::Http { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, serde_json::Value::String("boom".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_no_content_is_empty() {
        let mut server = mockito::Server::new_async().await;
        let _list = server
            .mock("GET", "/results")
            .with_status(204)
            .create_async()
            .await;
        let _get = server
            .mock("GET", "/results/3")
            .with_status(204)
            .create_async()
            .await;
        let _put = server
            .mock("PUT", "/products/4")
            .with_status(204)
            .create_async()
            .await;

        let api = ApiClient::new(server.url()).unwrap();
        assert!(api.results().list().await.unwrap().is_empty());
        assert!(matches!(api.results().get(3).await, Err(ApiError::EmptyBody)));

        let product = Product {
            id: None,
            name: "Cap".to_string(),
            price: 99.0,
        };
        let saved = api.products().update(4, &product).await.unwrap();
        assert_eq!(saved.id, Some(4));
        assert_eq!(saved.name, "Cap");
    }

    #[tokio::test]
    async fn test_save_without_id_creates() {
        let mut server = mockito::Server::new_async().await;
        let post = server
            .mock("POST", "/products")
            .match_body(Matcher::Json(serde_json::json!({"name": "Cap", "price": 99.0})))
            .with_status(201)
            .with_body(r#"{"id":12,"name":"Cap","price":99.0}"#)
            .expect(1)
            .create_async()
            .await;
        let put = server
            .mock("PUT", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let api = ApiClient::new(server.url()).unwrap();
        let product = Product {
            id: None,
            name: "Cap".to_string(),
            price: 99.0,
        };
        let saved = api.products().save(&product).await.unwrap();
        assert_eq!(saved.id, Some(12));
        post.assert_async().await;
        put.assert_async().await;
    }

    #[tokio::test]
    async fn test_save_with_id_updates() {
        let mut server = mockito::Server::new_async().await;
        let put = server
            .mock("PUT", "/disciplines/1")
            .match_body(Matcher::PartialJson(serde_json::json!({"id": 1, "name": "100m"})))
            .with_status(200)
            .with_body(r#"{"id":1,"name":"100m","resultType":"TIME"}"#)
            .expect(1)
            .create_async()
            .await;
        let post = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let api = ApiClient::new(server.url()).unwrap();
        let saved = api.disciplines().save(&sprint()).await.unwrap();
        assert_eq!(saved, sprint());
        put.assert_async().await;
        post.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_issues_one_request() {
        let mut server = mockito::Server::new_async().await;
        let ok = server
            .mock("DELETE", "/athletes/5")
            .with_status(204)
            .expect(1)
            .create_async()
            .await;
        let missing = server
            .mock("DELETE", "/athletes/6")
            .with_status(404)
            .with_body(r#"{"error":"gone"}"#)
            .expect(1)
            .create_async()
            .await;

        let api = ApiClient::new(server.url()).unwrap();
        api.athletes().delete(5).await.unwrap();
        let err = api.athletes().delete(6).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        ok.assert_async().await;
        missing.assert_async().await;
    }

    #[tokio::test]
    async fn test_assign_result_appends_to_athlete() {
        let mut server = mockito::Server::new_async().await;
        let _get = server
            .mock("GET", "/athletes/3")
            .with_status(200)
            .with_body(athlete_json(3, "[]"))
            .expect(1)
            .create_async()
            .await;
        let put = server
            .mock("PUT", "/athletes/3")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "results": [{"id": 40, "resultValue": "00:00:14:20"}]
            })))
            .with_status(200)
            .with_body(athlete_json(
                3,
                r#"[{"id":40,"resultType":"TIME","date":"2024-05-01","resultValue":"00:00:14:20",
                    "discipline":{"id":1,"name":"100m","resultType":"TIME"}}]"#,
            ))
            .expect(1)
            .create_async()
            .await;

        let api = ApiClient::new(server.url()).unwrap();
        let athlete = api.assign_result(3, &new_result(Some(40))).await.unwrap();
        assert!(athlete.has_result(40));
        put.assert_async().await;
    }

    #[tokio::test]
    async fn test_assign_result_does_not_duplicate() {
        let mut server = mockito::Server::new_async().await;
        let existing = r#"[{"id":40,"resultType":"TIME","date":"2024-05-01","resultValue":"00:00:15:00",
            "discipline":{"id":1,"name":"100m","resultType":"TIME"}}]"#;
        let _get = server
            .mock("GET", "/athletes/3")
            .with_status(200)
            .with_body(athlete_json(3, existing))
            .create_async()
            .await;
        let put = server
            .mock("PUT", "/athletes/3")
            .with_status(204)
            .expect(1)
            .create_async()
            .await;

        let api = ApiClient::new(server.url()).unwrap();
        let athlete = api.assign_result(3, &new_result(Some(40))).await.unwrap();
        assert_eq!(athlete.results.len(), 1);
        assert_eq!(athlete.results[0].result_value, "00:00:14:20");
        put.assert_async().await;
    }

    #[tokio::test]
    async fn test_assign_result_to_missing_athlete_fails() {
        let mut server = mockito::Server::new_async().await;
        let _get = server
            .mock("GET", "/athletes/8")
            .with_status(404)
            .with_body("{}")
            .create_async()
            .await;
        let put = server
            .mock("PUT", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let api = ApiClient::new(server.url()).unwrap();
        let err = api.assign_result(8, &new_result(Some(1))).await.unwrap_err();
        assert!(err.is_not_found());
        put.assert_async().await;
    }

    #[tokio::test]
    async fn test_reassign_result_moves_it_between_athletes() {
        let mut server = mockito::Server::new_async().await;
        let owned = r#"[{"id":40,"resultType":"TIME","date":"2024-05-01","resultValue":"00:00:15:00",
            "discipline":{"id":1,"name":"100m","resultType":"TIME"}}]"#;
        let _get_old = server
            .mock("GET", "/athletes/1")
            .with_status(200)
            .with_body(athlete_json(1, owned))
            .create_async()
            .await;
        let _get_new = server
            .mock("GET", "/athletes/2")
            .with_status(200)
            .with_body(athlete_json(2, "[]"))
            .create_async()
            .await;
        let put_new = server
            .mock("PUT", "/athletes/2")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "id": 2,
                "results": [{"id": 40}]
            })))
            .with_status(204)
            .expect(1)
            .create_async()
            .await;
        let put_old = server
            .mock("PUT", "/athletes/1")
            .match_body(Matcher::AllOf(vec![
                Matcher::PartialJson(serde_json::json!({"id": 1})),
                Matcher::Regex(r#""results":\[\]"#.to_string()),
            ]))
            .with_status(204)
            .expect(1)
            .create_async()
            .await;

        let api = ApiClient::new(server.url()).unwrap();
        let athlete = api
            .reassign_result(Some(1), 2, &new_result(Some(40)))
            .await
            .unwrap();
        assert_eq!(athlete.id, Some(2));
        assert!(athlete.has_result(40));
        put_new.assert_async().await;
        put_old.assert_async().await;
    }

    #[tokio::test]
    async fn test_reassign_result_to_same_athlete_touches_only_them() {
        let mut server = mockito::Server::new_async().await;
        let _get = server
            .mock("GET", "/athletes/3")
            .with_status(200)
            .with_body(athlete_json(3, "[]"))
            .create_async()
            .await;
        let put = server
            .mock("PUT", "/athletes/3")
            .with_status(204)
            .expect(1)
            .create_async()
            .await;
        let other_get = server
            .mock("GET", "/athletes/1")
            .expect(0)
            .create_async()
            .await;

        let api = ApiClient::new(server.url()).unwrap();
        let athlete = api
            .reassign_result(Some(3), 3, &new_result(Some(40)))
            .await
            .unwrap();
        assert!(athlete.has_result(40));
        put.assert_async().await;
        other_get.assert_async().await;
    }

    #[tokio::test]
    async fn test_failed_remove_leaves_page_unchanged() {
        let mut server = mockito::Server::new_async().await;
        let ok = server
            .mock("DELETE", "/products/5")
            .with_status(204)
            .expect(1)
            .create_async()
            .await;
        let failing = server
            .mock("DELETE", "/products/6")
            .with_status(500)
            .with_body("boom")
            .expect(1)
            .create_async()
            .await;

        let product = |id: Option<u64>, name: &str| Product {
            id,
            name: name.to_string(),
            price: 10.0,
        };
        let mut page = store::PageState::new();
        page.begin_fetch();
        page.finish_fetch::<()>(Ok(vec![product(Some(5), "Cap"), product(Some(6), "Shirt")]))
            .unwrap();

        let api = ApiClient::new(server.url()).unwrap();
        let products = api.products();

        let err = products
            .remove(&product(Some(6), "Shirt"), |id| {
                page.remove(id);
            })
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(page.records().len(), 2);

        let removed = products
            .remove(&product(Some(5), "Cap"), |id| {
                page.remove(id);
            })
            .await
            .unwrap();
        assert!(removed);
        let ids: Vec<_> = page.records().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![Some(6)]);

        let unsaved = products
            .remove(&product(None, "Draft"), |_| panic!("nothing was deleted"))
            .await
            .unwrap();
        assert!(!unsaved);

        ok.assert_async().await;
        failing.assert_async().await;
    }
}
