use std::sync::Arc;

use crate::application::blog_service::BlogService;
use crate::infrastructure::jwt::JwtService;

pub(crate) mod http;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) blog_service: Arc<BlogService>,
    pub(crate) jwt: Arc<JwtService>,
}

impl AppState {
    pub(crate) fn new(blog_service: Arc<BlogService>, jwt: Arc<JwtService>) -> Self {
        Self { blog_service, jwt }
    }
}
