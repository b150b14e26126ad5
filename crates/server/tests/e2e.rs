use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

use server::{startup, state::ServerState};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = startup::build_app(ServerState::seeded());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_register_login_review() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(format!("{}/register", app.base_url))
        .json(&json!({"username": "reader", "password": "pw"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let res = c.post(format!("{}/login", app.base_url))
        .json(&json!({"username": "reader", "password": "pw"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.headers().get("set-cookie").is_none());

    let res = c.put(format!("{}/auth/review/5", app.base_url))
        .json(&json!({"username": "reader", "review": "dense"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let reviews = c.get(format!("{}/review/5", app.base_url))
        .send().await?
        .json::<serde_json::Value>().await?;
    assert_eq!(reviews, json!({"reader": "dense"}));

    let res = c.delete(format!("{}/auth/review/5", app.base_url))
        .json(&json!({"username": "reader"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn e2e_concurrent_reviews_on_one_book() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let mut handles = Vec::new();
    for i in 0..20 {
        let c = c.clone();
        let url = format!("{}/auth/review/6", app.base_url);
        handles.push(tokio::spawn(async move {
            c.put(url).json(&json!({"username": format!("user{i}"), "review": "r"})).send().await
        }));
    }
    for h in handles {
        assert_eq!(h.await??.status(), HttpStatusCode::OK);
    }
    let reviews = c.get(format!("{}/review/6", app.base_url))
        .send().await?
        .json::<serde_json::Value>().await?;
    assert_eq!(reviews.as_object().map(|m| m.len()), Some(20));
    Ok(())
}
