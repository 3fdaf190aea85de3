//! Клиентская библиотека для работы с REST API blog-server.
//!
//! Все маршруты блога требуют JWT-токен автора: клиент хранит его и передаёт
//! в заголовке `Authorization: Bearer ...` в каждом запросе.
#![warn(missing_docs)]

mod error;
mod http_client;
mod models;

pub use error::{BlogClientError, BlogClientResult};
pub use models::{Author, Post};

use http_client::HttpClient;

#[derive(Debug, Clone)]
/// Клиент блог-сервиса.
pub struct BlogClient {
    http_client: HttpClient,
    token: Option<String>,
}

impl BlogClient {
    /// Создаёт клиент для сервера с базовым URL, например `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> BlogClientResult<Self> {
        Ok(Self {
            http_client: HttpClient::new(base_url)?,
            token: None,
        })
    }

    /// Устанавливает JWT-токен вручную.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Возвращает текущий JWT-токен, если он установлен.
    pub fn get_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Очищает сохранённый JWT-токен.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Создаёт новый пост от имени владельца токена и возвращает его id.
    pub async fn create_post(&self, title: &str, content: &str) -> BlogClientResult<String> {
        let token = self.require_token()?;
        self.http_client.create_post(token, title, content).await
    }

    /// Обновляет пост по идентификатору.
    ///
    /// Незаданные поля сервер оставляет без изменений.
    pub async fn update_post(
        &self,
        id: &str,
        title: Option<&str>,
        content: Option<&str>,
    ) -> BlogClientResult<String> {
        let token = self.require_token()?;
        self.http_client
            .update_post(token, id, title, content)
            .await
    }

    /// Возвращает пост по идентификатору или `None`, если его нет.
    pub async fn get_post(&self, id: &str) -> BlogClientResult<Option<Post>> {
        let token = self.require_token()?;
        self.http_client.get_post(token, id).await
    }

    /// Возвращает все посты.
    pub async fn list_posts(&self) -> BlogClientResult<Vec<Post>> {
        let token = self.require_token()?;
        self.http_client.list_posts(token).await
    }

    fn require_token(&self) -> BlogClientResult<&str> {
        self.token.as_deref().ok_or(BlogClientError::Unauthorized)
    }
}
