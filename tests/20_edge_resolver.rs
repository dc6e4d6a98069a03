mod common;

use anyhow::Result;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde_json::Value;

const ORGANIZATION_HEADER: &str = "x-organization-slug";
const HOSTNAME_HEADER: &str = "x-hostname";

struct Page {
    status: StatusCode,
    headers: HeaderMap,
    body: Value,
}

impl Page {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    fn slug(&self) -> &str {
        self.body["data"]["organization"]["slug"].as_str().unwrap_or_default()
    }
}

async fn get(base_url: &str, path: &str, host: Option<&str>) -> Result<Page> {
    let client = reqwest::Client::new();
    let mut req = client.get(format!("{}{}", base_url, path));
    if let Some(host) = host {
        req = req.header("host", host);
    }

    let res = req.send().await?;
    let status = res.status();
    let headers = res.headers().clone();
    let body = res.json::<Value>().await?;

    Ok(Page { status, headers, body })
}

#[tokio::test]
async fn subdomain_host_resolves_tenant() -> Result<()> {
    let server = common::spawn_server().await?;

    let page = get(&server.base_url, "/", Some("acme.propertyhub.app")).await?;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.header(ORGANIZATION_HEADER), Some("acme"));
    assert_eq!(page.header(HOSTNAME_HEADER), Some("acme.propertyhub.app"));
    assert_eq!(page.slug(), "acme");
    assert_eq!(page.body["data"]["branding"]["primaryColor"], "#dc2626");
    Ok(())
}

#[tokio::test]
async fn two_label_host_uses_first_label() -> Result<()> {
    let server = common::spawn_server().await?;

    let page = get(&server.base_url, "/", Some("acme.com")).await?;

    assert_eq!(page.header(ORGANIZATION_HEADER), Some("acme"));
    assert_eq!(page.slug(), "acme");
    Ok(())
}

#[tokio::test]
async fn reserved_subdomain_serves_default() -> Result<()> {
    let server = common::spawn_server().await?;

    for host in ["www.propertyhub.app", "app.propertyhub.app", "api.propertyhub.app", "admin.propertyhub.app"] {
        let page = get(&server.base_url, "/", Some(host)).await?;
        assert_eq!(page.header(ORGANIZATION_HEADER), Some(""), "host {}", host);
        assert_eq!(page.slug(), "demo", "host {}", host);
    }
    Ok(())
}

#[tokio::test]
async fn unknown_tenant_silently_serves_default() -> Result<()> {
    let server = common::spawn_server().await?;

    let page = get(&server.base_url, "/", Some("nobody.propertyhub.app")).await?;

    // No error status: an unregistered subdomain gets the default tenant
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.header(ORGANIZATION_HEADER), Some("nobody"));
    assert_eq!(page.slug(), "demo");
    Ok(())
}

#[tokio::test]
async fn custom_domains_with_platform_configured() -> Result<()> {
    let mut config = common::test_config();
    config.tenancy.platform_domains = vec!["propertyhub.app".to_string()];
    let server = common::spawn_with(config).await?;

    let page = get(&server.base_url, "/", Some("portal.skylinetowers.com")).await?;
    assert_eq!(page.header(ORGANIZATION_HEADER), Some("custom:portal.skylinetowers.com"));
    assert_eq!(page.slug(), "skyline");

    let page = get(&server.base_url, "/", Some("portal.mycompany.com")).await?;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.header(ORGANIZATION_HEADER), Some("custom:portal.mycompany.com"));
    assert_eq!(page.slug(), "demo");

    let page = get(&server.base_url, "/", Some("harborview.propertyhub.app")).await?;
    assert_eq!(page.slug(), "harborview");
    Ok(())
}

#[tokio::test]
async fn localhost_uses_development_slug_and_override() -> Result<()> {
    let server = common::spawn_server().await?;

    // base_url is 127.0.0.1, a development host
    let page = get(&server.base_url, "/", None).await?;
    assert_eq!(page.header(ORGANIZATION_HEADER), Some("demo"));
    assert_eq!(page.slug(), "demo");

    let page = get(&server.base_url, "/?org=harborview", None).await?;
    assert_eq!(page.header(ORGANIZATION_HEADER), Some("harborview"));
    assert_eq!(page.slug(), "harborview");
    Ok(())
}

#[tokio::test]
async fn override_ignored_on_tenant_hosts() -> Result<()> {
    let server = common::spawn_server().await?;

    let page = get(&server.base_url, "/?org=harborview", Some("acme.propertyhub.app")).await?;
    assert_eq!(page.slug(), "acme");
    Ok(())
}

#[tokio::test]
async fn dashboard_is_scoped_to_role_and_tenant() -> Result<()> {
    let server = common::spawn_server().await?;

    let page = get(&server.base_url, "/dashboard/tenant", Some("harborview.propertyhub.app")).await?;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.body["data"]["role"], "tenant");
    assert_eq!(page.slug(), "harborview");

    let navigation: Vec<&str> = page.body["data"]["navigation"]
        .as_array()
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    assert!(navigation.contains(&"parcels"));
    assert!(!navigation.contains(&"payments"));

    let page = get(&server.base_url, "/dashboard/janitor", Some("harborview.propertyhub.app")).await?;
    assert_eq!(page.status, StatusCode::NOT_FOUND);
    assert_eq!(page.body["success"], false);
    Ok(())
}

#[tokio::test]
async fn api_routes_are_not_intercepted() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/organizations", server.base_url))
        .header("host", "acme.propertyhub.app")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(common::header(&res, ORGANIZATION_HEADER).is_none());
    assert!(common::header(&res, HOSTNAME_HEADER).is_none());
    Ok(())
}
