//! List the first page of categories using a persisted session.
//!
//! Usage: CMG_ADMIN_API_URL=http://localhost:8000 CMG_ADMIN_SESSION=./session.json \
//!        cargo run --example list_categories

use cmg_admin_adapter::{AdminClient, CategoryQuery, ClientConfig, SessionFile, SessionStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url =
        std::env::var("CMG_ADMIN_API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let session_path =
        std::env::var("CMG_ADMIN_SESSION").unwrap_or_else(|_| "session.json".to_string());

    let store = SessionStore::with_file(SessionFile::new(session_path));
    if !store.restore() {
        eprintln!("No session found, log in with `cmg-admin login` first");
        return Ok(());
    }

    let client = AdminClient::with_session(ClientConfig::with_base_url(base_url), store)?;
    let page = client.list_categories(&CategoryQuery::default()).await?;

    println!("{} categories in total", page.total);
    for category in page.items {
        println!(
            "{}  {:<24} {:<14} {}",
            category.id, category.label, category.category_type, category.priority
        );
    }
    Ok(())
}
