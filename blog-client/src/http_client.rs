use reqwest::{Client, Method, Url};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;

use crate::error::{BlogClientError, BlogClientResult};
use crate::models::Post;

const BLOG_PATH: &str = "/api/v1/blog";

#[derive(Debug, Serialize)]
struct CreatePostRequestDto<'a> {
    title: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct UpdatePostRequestDto<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
}

/// 403 отдаёт поле `error`, остальные ошибки поле `message`.
#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    error: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IdResponseDto {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ListPostsResponseDto {
    blogs: Vec<Post>,
}

#[derive(Debug, Deserialize)]
struct GetPostResponseDto {
    // `null` is a valid answer, a missing key is not
    #[serde(deserialize_with = "Option::deserialize")]
    blog: Option<Post>,
}

#[derive(Debug, Clone)]
/// HTTP-клиент для работы с REST API `blog-server`.
pub(crate) struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Создаёт новый HTTP-клиент с базовым URL сервера.
    pub(crate) fn new(base_url: impl Into<String>) -> BlogClientResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn blog_url(&self, path: &str) -> BlogClientResult<Url> {
        Url::parse(&self.endpoint(path))
            .map_err(|err| BlogClientError::InvalidRequest(format!("invalid server url: {err}")))
    }

    fn post_url(&self, id: &str) -> BlogClientResult<Url> {
        let mut url = self.blog_url(BLOG_PATH)?;
        url.path_segments_mut()
            .map_err(|_| BlogClientError::InvalidRequest("invalid server url".to_string()))?
            .push(id);
        Ok(url)
    }

    async fn decode_error(response: reqwest::Response) -> BlogClientError {
        let status = response.status();

        let message = match response.json::<ErrorResponseDto>().await {
            Ok(body) => body.message.or(body.error),
            Err(_) => None,
        };
        BlogClientError::from_http_status(status, message)
    }

    /// универсальный helper: все маршруты блога требуют токен
    async fn send<TReq, TRes>(
        &self,
        method: Method,
        url: Url,
        body: Option<&TReq>,
        token: &str,
    ) -> BlogClientResult<TRes>
    where
        TReq: Serialize,
        TRes: DeserializeOwned,
    {
        let mut request = self.client.request(method, url).bearer_auth(token);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(BlogClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response
            .json::<TRes>()
            .await
            .map_err(BlogClientError::from_reqwest)
    }

    /// Создаёт пост и возвращает его идентификатор.
    pub(crate) async fn create_post(
        &self,
        token: &str,
        title: &str,
        content: &str,
    ) -> BlogClientResult<String> {
        let payload = CreatePostRequestDto { title, content };
        let dto: IdResponseDto = self
            .send(Method::POST, self.blog_url(BLOG_PATH)?, Some(&payload), token)
            .await?;
        Ok(dto.id)
    }

    /// Обновляет заголовок и/или содержимое поста.
    ///
    /// Возвращает идентификатор, который сервер отражает из запроса.
    pub(crate) async fn update_post(
        &self,
        token: &str,
        id: &str,
        title: Option<&str>,
        content: Option<&str>,
    ) -> BlogClientResult<String> {
        let payload = UpdatePostRequestDto { id, title, content };
        let dto: IdResponseDto = self
            .send(Method::PUT, self.blog_url(BLOG_PATH)?, Some(&payload), token)
            .await?;
        Ok(dto.id)
    }

    /// Возвращает все посты.
    pub(crate) async fn list_posts(&self, token: &str) -> BlogClientResult<Vec<Post>> {
        let dto: ListPostsResponseDto = self
            .send::<(), _>(
                Method::GET,
                self.blog_url(&format!("{BLOG_PATH}/bulk"))?,
                None,
                token,
            )
            .await?;
        Ok(dto.blogs)
    }

    /// Получает пост по идентификатору; `None`, если поста нет.
    pub(crate) async fn get_post(&self, token: &str, id: &str) -> BlogClientResult<Option<Post>> {
        let dto: GetPostResponseDto = self
            .send::<(), _>(Method::GET, self.post_url(id)?, None, token)
            .await?;
        Ok(dto.blog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalizes_slashes() {
        let client = HttpClient::new("http://localhost:8080/").expect("client must build");
        let full = client.endpoint("/api/v1/blog/bulk");
        assert_eq!(full, "http://localhost:8080/api/v1/blog/bulk");
    }

    #[test]
    fn update_payload_skips_absent_fields() {
        let payload = UpdatePostRequestDto {
            id: "post-1",
            title: Some("t"),
            content: None,
        };

        let json = serde_json::to_value(&payload).expect("payload must serialize");
        assert_eq!(json, serde_json::json!({"id": "post-1", "title": "t"}));
    }

    #[test]
    fn null_blog_decodes_as_none() {
        let dto: GetPostResponseDto =
            serde_json::from_str(r#"{"blog": null}"#).expect("must decode");
        assert!(dto.blog.is_none());
    }

    #[test]
    fn response_without_blog_key_is_an_error() {
        let result = serde_json::from_str::<GetPostResponseDto>(r#"{"blogs": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn post_url_encodes_id_as_single_segment() {
        let client = HttpClient::new("http://localhost:8080/").expect("client must build");

        let url = client.post_url("a/b?c").expect("url must build");
        assert_eq!(url.as_str(), "http://localhost:8080/api/v1/blog/a%2Fb%3Fc");
    }

    #[test]
    fn list_response_decodes_author_name() {
        let dto: ListPostsResponseDto = serde_json::from_str(
            r#"{"blogs":[{"id":"p1","title":"t","content":"c","author":{"name":null}}]}"#,
        )
        .expect("must decode");
        assert_eq!(dto.blogs.len(), 1);
        assert_eq!(dto.blogs[0].id, "p1");
        assert!(dto.blogs[0].author.name.is_none());
    }
}
