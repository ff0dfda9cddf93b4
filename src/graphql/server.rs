use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};

use super::schema::RelaySchema;
use crate::error::Result;

async fn graphql_handler(
    State(schema): State<RelaySchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

/// GET `/` serves GraphiQL, POST `/` executes queries.
pub fn router(schema: RelaySchema) -> Router {
    Router::new()
        .route("/", get(graphiql).post(graphql_handler))
        .with_state(schema)
}

pub async fn run_server(schema: RelaySchema, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "GraphQL server listening");
    axum::serve(listener, router(schema)).await?;
    Ok(())
}
