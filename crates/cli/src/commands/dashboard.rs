//! `dashboard` - summary counts and expiry warnings.

use chrono::Local;

use frostbox_client::dashboard;
use frostbox_client::error::Result;
use frostbox_client::gateway::FridgeEntry;
use frostbox_client::state::AppState;

use super::{format_date, session};

pub async fn show(state: &AppState) -> Result<()> {
    let user = session::require_user(state)?;
    let today = Local::now().date_naive();

    let summary = dashboard::summarize(state.gateway(), user.user_id, today).await;

    println!("Fridges:  {}", summary.fridge_count);
    println!("Products: {}", summary.product_count);

    print_partition("Expiring soon (next 7 days)", &summary.expiring_soon);
    print_partition("Expired", &summary.expired);

    let planned = state.shopping_list().list();
    println!();
    println!("Shopping list: {} item(s) planned", planned.len());

    Ok(())
}

fn print_partition(heading: &str, entries: &[FridgeEntry]) {
    println!();
    println!("{heading}: {}", entries.len());
    for entry in entries {
        println!(
            "  {} - {} {} (expires {})",
            entry.name,
            entry.quantity,
            entry.unit,
            format_date(entry.expires_on)
        );
    }
}
