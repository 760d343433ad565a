//! HTTP handlers for Orders API

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestValidationResponse, ConflictResponse, InternalServerErrorResponse,
        NotFoundResponse, UnauthorizedResponse,
    },
    ApiResponse, Identity, PageMeta, PagedResponse, ValidatedJson,
};
use domain_products::ProductRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::OrderResult;
use crate::models::{CreateOrderRequest, Order, OrderHistoryQuery, OrderItem, OrderItemRequest, OrderStatus};
use crate::repository::OrderRepository;
use crate::service::OrderService;

/// OpenAPI documentation for Orders API
#[derive(OpenApi)]
#[openapi(
    paths(order_history, create_order),
    components(
        schemas(Order, OrderItem, OrderStatus, CreateOrderRequest, OrderItemRequest),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            UnauthorizedResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Orders", description = "Order placement and history endpoints")
    )
)]
pub struct ApiDoc;

/// Create the order router with all HTTP endpoints
pub fn router<R, P>(service: OrderService<R, P>) -> Router
where
    R: OrderRepository + 'static,
    P: ProductRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(order_history).post(create_order))
        .with_state(shared_service)
}

/// List the calling user's orders with pagination and search
#[utoipa::path(
    get,
    path = "",
    tag = "Orders",
    params(OrderHistoryQuery),
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "One page of the user's orders", body = PagedResponse<Order>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 403, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn order_history<R: OrderRepository, P: ProductRepository>(
    State(service): State<Arc<OrderService<R, P>>>,
    identity: Identity,
    Query(query): Query<OrderHistoryQuery>,
) -> OrderResult<Json<PagedResponse<Order>>> {
    let page = query.page.max(1) as u64;
    let limit = query.limit.max(1) as u64;

    let (orders, total) = service.order_history(identity.user_id(), query).await?;

    Ok(Json(PagedResponse::new(
        orders,
        PageMeta::new(total, page, limit),
        "Success get user's order history.",
    )))
}

/// Place a new order
#[utoipa::path(
    post,
    path = "",
    tag = "Orders",
    request_body = CreateOrderRequest,
    security(("bearerAuth" = [])),
    responses(
        (status = 201, description = "Order placed successfully", body = ApiResponse<Order>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 403, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_order<R: OrderRepository, P: ProductRepository>(
    State(service): State<Arc<OrderService<R, P>>>,
    identity: Identity,
    ValidatedJson(input): ValidatedJson<CreateOrderRequest>,
) -> OrderResult<impl IntoResponse> {
    let order = service.place_order(identity.user_id(), input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(order, "Success create order.")),
    ))
}
