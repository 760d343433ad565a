use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
    ApiResponse, Identity, UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CategoryResult;
use crate::models::{Category, CreateCategory, UpdateCategory};
use crate::repository::CategoryRepository;
use crate::service::CategoryService;

/// OpenAPI documentation for the Categories API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_categories,
        create_category,
        get_category,
        update_category,
        delete_category,
    ),
    components(
        schemas(Category, CreateCategory, UpdateCategory),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            UnauthorizedResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Categories", description = "Product category management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the category router with all HTTP endpoints
pub fn router<R: CategoryRepository + 'static>(service: CategoryService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/{id}",
            get(get_category).put(update_category).delete(delete_category),
        )
        .with_state(shared_service)
}

/// List all categories
#[utoipa::path(
    get,
    path = "",
    tag = "Categories",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<Category>>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_categories<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
) -> CategoryResult<Json<ApiResponse<Vec<Category>>>> {
    let categories = service.list_categories().await?;
    Ok(Json(ApiResponse::new(
        categories,
        "Success get all categories.",
    )))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "",
    tag = "Categories",
    request_body = CreateCategory,
    security(("bearerAuth" = [])),
    responses(
        (status = 201, description = "Category created successfully", body = ApiResponse<Category>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 403, response = UnauthorizedResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    _identity: Identity,
    ValidatedJson(input): ValidatedJson<CreateCategory>,
) -> CategoryResult<impl IntoResponse> {
    let category = service.create_category(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(category, "Success create category.")),
    ))
}

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<Category>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    UuidPath(id): UuidPath,
) -> CategoryResult<Json<ApiResponse<Category>>> {
    let category = service.get_category(id).await?;
    Ok(Json(ApiResponse::new(category, "Success get category.")))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    request_body = UpdateCategory,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Category updated successfully", body = ApiResponse<Category>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 403, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    _identity: Identity,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateCategory>,
) -> CategoryResult<Json<ApiResponse<Category>>> {
    let category = service.update_category(id, input).await?;
    Ok(Json(ApiResponse::new(category, "Success update category.")))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Category deleted successfully", body = ApiResponse<Category>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 403, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    _identity: Identity,
    UuidPath(id): UuidPath,
) -> CategoryResult<Json<ApiResponse<Category>>> {
    let category = service.delete_category(id).await?;
    Ok(Json(ApiResponse::new(category, "Success delete category.")))
}
