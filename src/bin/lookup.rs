use library_catalog::infra::config;
use library_catalog::{GoogleBooksClient, MetadataLookup};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin lookup -- [--first] <query...>\n\
         \n\
         Runs a metadata search against BOOKS_API_URL and prints the mapped results.\n\
         --first   use the uncapped title lookup and print only the first book\n\
         \n\
         Optional env vars:\n\
           BOOKS_API_URL, LOOKUP_MAX_RESULTS, LOOKUP_TIMEOUT_SECS\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let first_only = args.iter().any(|a| a == "--first");
    let query = args
        .iter()
        .filter(|a| a.as_str() != "--first")
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");
    if query.trim().is_empty() {
        usage_and_exit();
    }

    let client = GoogleBooksClient::from_env()?;
    println!("> Lookup:");
    println!("  BOOKS_API_URL={}", client.endpoint());
    println!("  LOOKUP_MAX_RESULTS={}", config::lookup_max_results());
    println!("  query={:?}", query);

    if first_only {
        match client.fetch_by_title(&query).await {
            Some(book) => println!("{}", serde_json::to_string_pretty(&book)?),
            None => println!("> No book found (or the endpoint was unreachable)."),
        }
        return Ok(());
    }

    let results = client.search(&query).await;
    if results.is_empty() {
        println!("> No results (or the endpoint was unreachable).");
    }
    for (i, r) in results.iter().enumerate() {
        println!("  [{}] {} | {} | isbn={}", i + 1, r.title, r.author, r.isbn);
        if !r.thumbnail_url.is_empty() {
            println!("      cover: {}", r.thumbnail_url);
        }
    }
    Ok(())
}
