//! Client Area Demo
//!
//! Serves the portal over the seeded sample dataset:
//! tickets, invoices and services with list, stats and status routes.

use anyhow::Result;
use portal::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = PortalConfig::default_config();
    let addr = config.server.addr();

    println!("🚀 Starting client area on http://{}", addr);
    println!("\n📚 Routes per domain (tickets, invoices, services):");
    println!("    GET  /tickets                - List (search/status/priority/category/sort/page)");
    println!("    GET  /tickets/stats          - Whole-collection statistics");
    println!("    GET  /tickets/{{id}}           - Get a specific ticket");
    println!("    POST /tickets/{{id}}/status    - Run a status transition");
    println!("\n   📝 Example curl commands:");
    println!("   curl 'http://{}/tickets?search=slow' | jq .", addr);
    println!("   curl 'http://{}/invoices?sort=due&status=all' | jq .", addr);
    println!("   curl 'http://{}/invoices/stats' | jq .", addr);
    println!("   curl 'http://{}/services?status=suspended' | jq .", addr);

    PortalBuilder::new()
        .with_config(config)
        .with_seed_data()
        .serve()
        .await
}
