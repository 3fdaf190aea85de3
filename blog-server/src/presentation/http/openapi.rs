use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::presentation::http::handlers::blogs::{
    AuthorDto, BlogDto, BlogIdDto, BlogListDto, BlogResponseDto, CreateBlogDto, UpdateBlogDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::handlers::blogs::create_blog,
        crate::presentation::http::handlers::blogs::update_blog,
        crate::presentation::http::handlers::blogs::list_blogs,
        crate::presentation::http::handlers::blogs::get_blog
    ),
    components(
        schemas(
            CreateBlogDto,
            UpdateBlogDto,
            BlogIdDto,
            AuthorDto,
            BlogDto,
            BlogListDto,
            BlogResponseDto
        )
    ),
    tags(
        (name = "blog", description = "Blog post endpoints")
    ),
    modifiers(&SecurityAddon)
)]
pub(crate) struct ApiDoc;

pub(crate) struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let mut components = openapi.components.take().unwrap_or_default();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
        openapi.components = Some(components);
    }
}
