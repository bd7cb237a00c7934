use std::net::SocketAddr;

use configs::AppConfig;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn start_server() -> anyhow::Result<Option<TestApp>> {
    if common::env::skip_db_tests() {
        eprintln!("DATABASE_URL missing or SKIP_DB_TESTS set; skipping e2e tests");
        return Ok(None);
    }

    let mut cfg = AppConfig::from_env();
    cfg.normalize_and_validate()?;
    // build_app creates the table only outside test mode
    cfg.app.testing = false;

    let app = server::startup::build_app(&cfg).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {e}");
        }
    });

    Ok(Some(TestApp { base_url: format!("http://{addr}"), client: reqwest::Client::new() }))
}

#[tokio::test]
async fn product_lifecycle_over_http() -> anyhow::Result<()> {
    let Some(app) = start_server().await? else { return Ok(()) };

    let res = app.client.get(app.url("/health")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    // create
    let res = app
        .client
        .post(app.url("/products"))
        .json(&json!({
            "name": "Produto Teste",
            "description": "Descrição do produto teste",
            "price": 10.50,
            "category": "Categoria Teste",
            "supplier_email": "fornecedor@teste.com"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await?;
    let id = created["id"].as_i64().expect("id");
    assert!(created["created_at"].is_string());
    assert!(created["updated_at"].is_null());

    // read
    let res = app.client.get(app.url(&format!("/products/{id}"))).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: Value = res.json().await?;
    assert_eq!(fetched["name"], "Produto Teste");
    assert_eq!(fetched["price"].as_f64(), Some(10.5));

    let res = app.client.get(app.url("/products?limit=1000")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let rows: Vec<Value> = res.json().await?;
    assert!(rows.iter().any(|p| p["id"].as_i64() == Some(id)));

    // partial update
    let res = app
        .client
        .put(app.url(&format!("/products/{id}")))
        .json(&json!({ "price": 87.52 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["price"].as_f64(), Some(87.52));
    assert_eq!(updated["name"], created["name"]);
    assert_eq!(updated["category"], created["category"]);
    assert_eq!(updated["supplier_email"], created["supplier_email"]);
    assert!(updated["updated_at"].is_string());

    // invalid create leaves storage alone
    let res = app
        .client
        .post(app.url("/products"))
        .json(&json!({
            "name": "Negativo",
            "price": -1,
            "category": "Categoria Teste",
            "supplier_email": "fornecedor@teste.com"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // delete
    let res = app.client.delete(app.url(&format!("/products/{id}"))).send().await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = app.client.get(app.url(&format!("/products/{id}"))).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let res = app.client.delete(app.url(&format!("/products/{id}"))).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}
