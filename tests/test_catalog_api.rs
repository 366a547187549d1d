//! End-to-end API test: run the router in-process against a stub metadata lookup and
//! drive the catalog over HTTP.

use async_trait::async_trait;
use library_catalog::{
    transport, Book, CatalogService, InMemoryCatalogStore, IsbnGenerator, MetadataLookup, SearchResult,
};
use serde_json::{json, Value};
use std::sync::Arc;

struct StubLookup;

fn dune_messiah() -> SearchResult {
    SearchResult {
        title: "Dune Messiah".to_string(),
        author: "Frank Herbert".to_string(),
        isbn: "9780593098233".to_string(),
        summary: "Twelve years after Arrakis.".to_string(),
        thumbnail_url: "https://covers.example/messiah.jpg".to_string(),
    }
}

fn hyperion() -> SearchResult {
    SearchResult {
        title: "Hyperion".to_string(),
        author: "Dan Simmons".to_string(),
        isbn: "9780553283686".to_string(),
        summary: String::new(),
        thumbnail_url: String::new(),
    }
}

#[async_trait]
impl MetadataLookup for StubLookup {
    async fn search(&self, query: &str) -> Vec<SearchResult> {
        let q = query.to_lowercase();
        [dune_messiah(), hyperion()]
            .into_iter()
            .filter(|r| r.title.to_lowercase().contains(&q))
            .collect()
    }

    async fn fetch_by_title(&self, title: &str) -> Option<Book> {
        self.search(title).await.into_iter().next().map(SearchResult::into_book)
    }
}

/// Always proposes an ISBN the tests catalogue first.
struct TakenIsbn;

impl IsbnGenerator for TakenIsbn {
    fn generate(&self) -> String {
        "9780441013593".to_string()
    }
}

async fn spawn_app() -> Result<String, Box<dyn std::error::Error>> {
    spawn_app_with_store(InMemoryCatalogStore::new()).await
}

async fn spawn_app_with_store(store: InMemoryCatalogStore) -> Result<String, Box<dyn std::error::Error>> {
    let catalog = CatalogService::new(Box::new(store), Arc::new(StubLookup));
    let router = transport::http::create_router(transport::http::AppState {
        catalog: Arc::new(catalog),
    });

    // Ephemeral port so tests can run in parallel.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Ok(format!("http://127.0.0.1:{}", port))
}

fn titles(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_dune_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_app().await?;
    let client = reqwest::Client::new();
    let dune = json!({"title": "Dune", "author": "Frank Herbert", "isbn": "9780441013593"});

    let resp = client.post(format!("{}/api/books", base_url)).json(&dune).send().await?;
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["inserted"], true);
    assert_eq!(body["data"]["book"]["is_available"], true);

    let resp = client
        .get(format!("{}/api/books/9780441013593", base_url))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await?;
    assert_eq!(body["data"]["title"], "Dune");
    assert_eq!(body["data"]["author"], "Frank Herbert");

    // Same ISBN again: store is unchanged.
    let resp = client.post(format!("{}/api/books", base_url)).json(&dune).send().await?;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await?;
    assert_eq!(body["data"]["inserted"], false);
    let health: Value = client.get(format!("{}/health", base_url)).send().await?.json().await?;
    assert_eq!(health["data"]["books"], 1);

    let resp = client
        .delete(format!("{}/api/books/9780441013593", base_url))
        .send()
        .await?;
    let body: Value = resp.json().await?;
    assert_eq!(body["data"]["removed"], true);

    let resp = client
        .delete(format!("{}/api/books/9780441013593", base_url))
        .send()
        .await?;
    let body: Value = resp.json().await?;
    assert_eq!(body["data"]["removed"], false);

    let resp = client
        .get(format!("{}/api/books/9780441013593", base_url))
        .send()
        .await?;
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await?;
    assert_eq!(body["success"], false);

    Ok(())
}

#[tokio::test]
async fn test_add_backfills_and_validates() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_app().await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/books", base_url))
        .json(&json!({"title": "Field Notes", "spine_color": "#8b0000"}))
        .send()
        .await?;
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await?;
    let book = &body["data"]["book"];
    assert_eq!(book["author"], "Unknown");
    assert_eq!(book["isbn"].as_str().unwrap().len(), 13);
    assert_eq!(book["spine_color"], "#8b0000");
    assert_eq!(book["summary"], "");

    let resp = client
        .post(format!("{}/api/books", base_url))
        .json(&json!({"title": "   "}))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);

    let resp = client
        .post(format!("{}/api/books", base_url))
        .header("content-type", "application/json")
        .body("{\"author\": \"No Title\"}")
        .send()
        .await?;
    assert_eq!(resp.status(), 422);

    Ok(())
}

#[tokio::test]
async fn test_list_and_search_are_sorted() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_app().await?;
    let client = reqwest::Client::new();

    for (title, author, isbn) in [
        ("Neuromancer", "William Gibson", "9780441569595"),
        ("Dune", "Frank Herbert", "9780441013593"),
        ("Children of Dune", "Frank Herbert", "9780593098240"),
    ] {
        client
            .post(format!("{}/api/books", base_url))
            .json(&json!({"title": title, "author": author, "isbn": isbn}))
            .send()
            .await?;
    }

    let body: Value = client.get(format!("{}/api/books", base_url)).send().await?.json().await?;
    assert_eq!(titles(&body), vec!["Children of Dune", "Dune", "Neuromancer"]);

    let body: Value = client
        .get(format!("{}/api/search", base_url))
        .query(&[("query", "HERBERT")])
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(titles(&body), vec!["Children of Dune", "Dune"]);

    let body: Value = client
        .get(format!("{}/api/search", base_url))
        .query(&[("query", "gibson")])
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(titles(&body), vec!["Neuromancer"]);

    Ok(())
}

#[tokio::test]
async fn test_lookup_and_add_with_details() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_app().await?;
    let client = reqwest::Client::new();

    let body: Value = client
        .get(format!("{}/api/lookup", base_url))
        .query(&[("query", "hyper")])
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["data"][0]["isbn"], "9780553283686");

    let resp = client
        .post(format!("{}/api/lookup/add", base_url))
        .json(&json!({"title": "Dune Messiah"}))
        .send()
        .await?;
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await?;
    assert_eq!(body["data"]["book"]["isbn"], "9780593098233");
    assert_eq!(body["data"]["book"]["cover_image_url"], "https://covers.example/messiah.jpg");

    // Nothing upstream: a minimal entry is still catalogued.
    let resp = client
        .post(format!("{}/api/lookup/add", base_url))
        .json(&json!({"title": "Grandma's Recipes"}))
        .send()
        .await?;
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await?;
    assert_eq!(body["data"]["book"]["author"], "Unknown");
    assert_eq!(body["data"]["book"]["title"], "Grandma's Recipes");

    let resp = client
        .post(format!("{}/api/lookup/add", base_url))
        .json(&json!({"title": "Hyperion", "isbn": "9780553283686"}))
        .send()
        .await?;
    assert_eq!(resp.status(), 201);

    let health: Value = client.get(format!("{}/health", base_url)).send().await?.json().await?;
    assert_eq!(health["data"]["books"], 3);

    Ok(())
}

#[tokio::test]
async fn test_duplicate_returns_existing_and_exhausted_isbns_conflict() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_app_with_store(InMemoryCatalogStore::with_isbn_generator(Box::new(TakenIsbn))).await?;
    let client = reqwest::Client::new();

    let dune = json!({"title": "Dune", "author": "Frank Herbert", "isbn": "9780441013593"});
    let resp = client.post(format!("{}/api/books", base_url)).json(&dune).send().await?;
    assert_eq!(resp.status(), 201);

    let impostor = json!({"title": "Not Dune", "isbn": "9780441013593"});
    let resp = client.post(format!("{}/api/books", base_url)).json(&impostor).send().await?;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await?;
    assert_eq!(body["data"]["inserted"], false);
    assert_eq!(body["data"]["book"]["title"], "Dune");
    assert_eq!(body["data"]["book"]["author"], "Frank Herbert");

    // Every generated ISBN is already taken, so an ISBN-less book cannot be stored.
    let resp = client
        .post(format!("{}/api/books", base_url))
        .json(&json!({"title": "Untitled Draft"}))
        .send()
        .await?;
    assert_eq!(resp.status(), 409);
    let body: Value = resp.json().await?;
    assert_eq!(body["success"], false);

    let resp = client
        .post(format!("{}/api/lookup/add", base_url))
        .json(&json!({"title": "Private Notebook"}))
        .send()
        .await?;
    assert_eq!(resp.status(), 409);

    let health: Value = client.get(format!("{}/health", base_url)).send().await?.json().await?;
    assert_eq!(health["data"]["books"], 1);
    let resp = client.get(format!("{}/api/books/9780441013593", base_url)).send().await?;
    let body: Value = resp.json().await?;
    assert_eq!(body["data"]["title"], "Dune");
    Ok(())
}
