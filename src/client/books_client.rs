use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use crate::books::dto::BookDto;
use crate::core::domain::Attributes;
use crate::core::library::{LibraryError, LibraryResult};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

// BooksClient drives the `/books` endpoints of a running catalog
#[derive(Debug, Clone)]
pub struct BooksClient {
    client: reqwest::Client,
    base_url: String,
}

impl BooksClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn books_url(&self) -> String {
        format!("{}/books", self.base_url)
    }

    fn book_url(&self, id: i64) -> String {
        format!("{}/books/{}", self.base_url, id)
    }

    pub async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.client.get(self.books_url()).send().await?;
        parse_json(res).await
    }

    pub async fn get_book(&self, id: i64) -> LibraryResult<BookDto> {
        let res = self.client.get(self.book_url(id)).send().await?;
        parse_json(res).await
    }

    pub async fn create_book(&self, attributes: &Attributes) -> LibraryResult<BookDto> {
        let res = self.client.post(self.books_url()).json(attributes).send().await?;
        parse_json(res).await
    }

    pub async fn update_book(&self, id: i64, attributes: &Attributes) -> LibraryResult<BookDto> {
        let res = self.client.put(self.book_url(id)).json(attributes).send().await?;
        parse_json(res).await
    }

    pub async fn delete_book(&self, id: i64) -> LibraryResult<()> {
        let res = self.client.delete(self.book_url(id)).send().await?;
        // 204 carries no body
        check_status(res).await.map(|_| ())
    }
}

async fn parse_json<T: DeserializeOwned>(res: Response) -> LibraryResult<T> {
    let res = check_status(res).await?;
    let body = res.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

async fn check_status(res: Response) -> LibraryResult<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.bytes().await?;
    let message = serde_json::from_slice::<ErrorBody>(&body)
        .map(|b| b.message)
        .unwrap_or_else(|_| String::from_utf8_lossy(&body).to_string());
    if status == StatusCode::NOT_FOUND {
        Err(LibraryError::not_found(message.as_str()))
    } else if status == StatusCode::BAD_REQUEST {
        Err(LibraryError::validation(message.as_str(), Some(status.as_u16().to_string())))
    } else {
        Err(LibraryError::runtime(message.as_str(), Some(status.as_u16().to_string()), status.is_server_error()))
    }
}

impl From<reqwest::Error> for LibraryError {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16().to_string());
        let retryable = err.is_connect() || err.is_timeout();
        LibraryError::runtime(format!("http request failed {:?}", err).as_str(), status, retryable)
    }
}
