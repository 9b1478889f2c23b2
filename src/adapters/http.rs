use crate::domain::model::{
    DurationFilter, ListResponse, MenuEntry, MenuFilter, ReservationEntry,
};
use crate::domain::ports::{ConfigProvider, RestoApi};
use crate::utils::error::{RestoError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const MENU_PATH: &str = "/menu/";
pub const RESERVATION_PATH: &str = "/reservation/";

#[derive(Debug, Clone)]
pub struct HttpRestoApi {
    base_url: String,
    client: Client,
}

impl HttpRestoApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            base_url: normalize_base_url(config.api_base_url().to_string()),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<(&'static str, String)>,
    ) -> Result<ListResponse<T>> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url);
        if let Some((key, value)) = &query {
            request = request.query(&[(key, value)]);
        }

        tracing::debug!("GET {} query={:?}", url, query);
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(RestoError::HttpStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.bytes().await?;
        let list: ListResponse<T> = serde_json::from_slice(&body)?;
        tracing::debug!("Received {} of {} records from {}", list.data.len(), list.count, path);
        Ok(list)
    }
}

#[async_trait::async_trait]
impl RestoApi for HttpRestoApi {
    async fn fetch_menu(&self, filter: MenuFilter) -> Result<ListResponse<MenuEntry>> {
        self.get_list(MENU_PATH, filter.query_param()).await
    }

    async fn fetch_reservations(
        &self,
        filter: DurationFilter,
    ) -> Result<ListResponse<ReservationEntry>> {
        self.get_list(RESERVATION_PATH, filter.query_param()).await
    }
}

fn normalize_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn menu_body() -> serde_json::Value {
        json!({
            "count": 2,
            "data": [
                {"id": 1, "nama_menu": "Nasi Goreng", "harga": 25000, "variants": ["Pedas"], "sold_out": "No",
                 "created_at": "2024-01-15T10:30:00", "updated_at": "2024-01-15T10:30:00"},
                {"id": 2, "nama_menu": "Es Teh", "harga": 5000, "variants": null, "sold_out": "No",
                 "created_at": "2024-01-15T10:30:00", "updated_at": "2024-01-15T10:30:00"}
            ]
        })
    }

    #[tokio::test]
    async fn test_fetch_menu_without_filter() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/menu/");
            then.status(200).json_body(menu_body());
        });

        let api = HttpRestoApi::new(server.base_url());
        let list = api.fetch_menu(MenuFilter::All).await.unwrap();

        mock.assert();
        assert_eq!(list.count, 2);
        assert_eq!(list.data[0].name, "Nasi Goreng");
    }

    #[tokio::test]
    async fn test_fetch_menu_sold_out_filter() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/menu/").query_param("sold_out", "Yes");
            then.status(200).json_body(json!({"count": 0, "data": []}));
        });

        let api = HttpRestoApi::new(format!("{}/", server.base_url()));
        let list = api.fetch_menu(MenuFilter::SoldOut).await.unwrap();

        mock.assert();
        assert!(list.data.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_reservations_min_duration() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/reservation/")
                .query_param("min_duration", "3");
            then.status(200).json_body(json!({
                "count": 1,
                "data": [{
                    "id": 10, "name": "Budi", "reservation_table": 4, "token": "TKN-1",
                    "ordered_menu": ["1[Pedas]", "2"], "duration": 3,
                    "created_at": "2024-01-15T10:30:00Z", "updated_at": "2024-01-15T10:30:00Z"
                }]
            }));
        });

        let api = HttpRestoApi::new(server.base_url());
        let list = api
            .fetch_reservations(DurationFilter::AtLeast(3))
            .await
            .unwrap();

        mock.assert();
        assert_eq!(list.data[0].ordered_menu, vec!["1[Pedas]", "2"]);
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/menu/");
            then.status(500);
        });

        let api = HttpRestoApi::new(server.base_url());
        let err = api.fetch_menu(MenuFilter::All).await.unwrap_err();
        assert!(matches!(err, RestoError::HttpStatus { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_serialization_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/menu/");
            then.status(200).body("<html>not json</html>");
        });

        let api = HttpRestoApi::new(server.base_url());
        let err = api.fetch_menu(MenuFilter::All).await.unwrap_err();
        assert!(matches!(err, RestoError::SerializationError(_)));
    }
}
