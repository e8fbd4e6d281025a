//! Dashboard - stats, top products, recent sales, low stock, sales over time

use inventory_client::Route;
use shared::money::format_money_grouped;

use crate::context::AppContext;
use crate::error::DeskResult;
use crate::notify::Notice;
use crate::render;

pub async fn show(ctx: &mut AppContext) -> DeskResult<()> {
    ctx.require(Route::Dashboard)?;
    ctx.refresh_settings().await;

    let display_name = ctx
        .session
        .settings()
        .and_then(|s| s.name())
        .unwrap_or(ctx.username())
        .to_string();
    println!("Welcome back, {}!", ctx.username());
    println!("Here's the summary for {}.", display_name);

    let dashboard = match ctx.client.dashboard().await {
        Ok(dashboard) => dashboard,
        Err(e) => {
            Notice::failure(&e, "Failed to fetch dashboard data.").emit();
            return Ok(());
        }
    };

    let stats = &dashboard.stats;
    println!(
        "{}",
        render::cards(&[
            ("Total Products", stats.total_products.to_string(), None),
            ("Total Stock (Units)", stats.total_stock.to_string(), None),
            ("Total Stock Value", format_money_grouped(stats.total_value), None),
        ])
    );

    println!("\nTop Selling Products");
    println!("{}", render::top_products(&dashboard.top_products));

    println!("\nRecent Sales");
    println!("{}", render::sales(&dashboard.recent_sales));

    // Side panels fail quietly, the main stats are already on screen
    match ctx.client.low_stock_products().await {
        Ok(low) if !low.is_empty() => {
            println!("\nLow Stock Alerts");
            println!("{}", render::low_stock(&low));
        }
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "Could not fetch low stock alerts"),
    }

    match ctx.client.sales_over_time().await {
        Ok(points) if !points.is_empty() => {
            println!("\nSales Over Time");
            println!("{}", render::sales_over_time(&points));
        }
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "Could not fetch sales over time"),
    }

    Ok(())
}
