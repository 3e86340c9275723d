use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = server::startup::app();
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_customer_location_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.post(format!("{}/api/Customer", app.base_url))
        .json(&json!({"firstName": "A", "lastName": "B", "locations": [{"address": "Main St"}]}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["result"]["id"], 1);

    let res = c.post(format!("{}/api/Customer", app.base_url))
        .json(&json!({"firstName": "C", "lastName": "D", "locations": [{"address": "main st"}]}))
        .send().await?;
    let body = res.json::<Value>().await?;
    assert_eq!(body["result"]["id"], 2);
    assert_eq!(body["result"]["locations"][0]["id"], 1);

    let res = c.delete(format!("{}/api/Location/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let body = c.get(format!("{}/api/Customers", app.base_url)).send().await?.json::<Value>().await?;
    for customer in body["result"].as_array().into_iter().flatten() {
        assert_eq!(customer["locations"], json!([]));
    }

    let res = c.delete(format!("{}/api/Customer/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Customer deleted successfully");
    Ok(())
}
