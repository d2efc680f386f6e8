use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use foodgram::config::{
    Config, DatabaseConfig, JwtConfig, ObservabilityConfig, ServerConfig, SiteConfig,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx_migrator::{Migrate, Plan};
use tower::ServiceExt;

pub fn test_config(url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
        },
        database: DatabaseConfig {
            url: url.to_owned(),
            max_connections: 2,
        },
        jwt: JwtConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_string(),
            expiration_days: 7,
        },
        observability: ObservabilityConfig::default(),
        site: SiteConfig {
            base_url: "http://foodgram.localhost".to_string(),
        },
    }
}

pub async fn setup_app(path: PathBuf) -> anyhow::Result<Router> {
    let url = format!("sqlite:{}", path.to_str().unwrap());
    let pool = foodgram::db::create_pool(&url, 2).await?;
    let mut conn = pool.acquire().await?;
    foodgram_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;
    drop(conn);

    let state = foodgram::AppState::new(test_config(&url), foodgram_shared::State::single(pool));

    Ok(foodgram::router(state))
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> anyhow::Result<Response<Body>> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Token {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => builder.body(Body::empty())?,
    };

    Ok(app.clone().oneshot(request).await?)
}

pub async fn read_text(response: Response<Body>) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}

pub async fn read_json(response: Response<Body>) -> anyhow::Result<Value> {
    Ok(serde_json::from_str(&read_text(response).await?)?)
}

/// Registers a user and returns `(id, token)`.
pub async fn signup(app: &Router, name: &str) -> anyhow::Result<(String, String)> {
    let response = send(
        app,
        "POST",
        "/api/users",
        None,
        Some(serde_json::json!({
            "email": format!("{name}@foodgram.localhost"),
            "username": name,
            "first_name": "John",
            "last_name": "Doe",
            "password": "my_password",
        })),
    )
    .await?;
    let user = read_json(response).await?;

    let response = send(
        app,
        "POST",
        "/api/auth/token/login",
        None,
        Some(serde_json::json!({
            "email": format!("{name}@foodgram.localhost"),
            "password": "my_password",
        })),
    )
    .await?;
    let token = read_json(response).await?;

    Ok((
        user["id"].as_str().unwrap_or_default().to_owned(),
        token["auth_token"].as_str().unwrap_or_default().to_owned(),
    ))
}
