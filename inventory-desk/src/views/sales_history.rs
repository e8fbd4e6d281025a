//! Sales history, sale detail and printable receipts

use std::path::PathBuf;

use inventory_client::{ReceiptRenderer, Route};
use shared::models::{BusinessSettings, Sale, SaleDetail};
use shared::money::format_money;

use crate::cli::SalesCommand;
use crate::context::AppContext;
use crate::error::DeskResult;
use crate::notify::Notice;
use crate::render;

pub async fn run(ctx: &mut AppContext, command: SalesCommand) -> DeskResult<()> {
    ctx.require(Route::SalesHistory)?;
    match command {
        SalesCommand::List { search } => list(ctx, search.as_deref()).await,
        SalesCommand::Show { id } => show(ctx, id).await,
        SalesCommand::Receipt { id, out } => receipt(ctx, id, out).await,
    }
}

async fn list(ctx: &mut AppContext, search: Option<&str>) -> DeskResult<()> {
    let term = super::search_term(search);
    let search = (!term.is_empty()).then_some(term);
    match ctx.client.list_sales(search).await {
        Ok(sales) if sales.is_empty() => println!("No sales found."),
        Ok(sales) => println!("{}", render::sales(&sales)),
        Err(e) => Notice::failure(&e, "Failed to fetch sales data.").emit(),
    }
    Ok(())
}

/// History row plus its items; `None` after a notice was shown
async fn load(ctx: &mut AppContext, id: i64) -> Option<(Sale, SaleDetail)> {
    let sale = match ctx.client.list_sales(None).await {
        Ok(sales) => sales.into_iter().find(|s| s.id == id),
        Err(e) => {
            Notice::failure(&e, "Failed to fetch sales data.").emit();
            return None;
        }
    };
    let Some(sale) = sale else {
        Notice::error(format!("Sale #{} not found.", id)).emit();
        return None;
    };

    match ctx.client.get_sale(id).await {
        Ok(detail) => Some((sale, detail)),
        Err(e) => {
            Notice::failure(&e, "Failed to fetch sale details.").emit();
            None
        }
    }
}

async fn show(ctx: &mut AppContext, id: i64) -> DeskResult<()> {
    let Some((sale, detail)) = load(ctx, id).await else {
        return Ok(());
    };

    println!("Sale #{}  {}", sale.id, sale.display_date());
    println!("Customer: {}", sale.customer_label());
    if let Some(username) = &sale.username {
        println!("Sold by:  {}", username);
    }
    println!("{}", render::sale_items(&detail));
    println!("Total:    {}", format_money(sale.total_amount));
    Ok(())
}

async fn receipt(ctx: &mut AppContext, id: i64, out: Option<PathBuf>) -> DeskResult<()> {
    ctx.refresh_settings().await;
    let Some((sale, detail)) = load(ctx, id).await else {
        return Ok(());
    };

    let business = ctx.session.settings().cloned().unwrap_or_else(BusinessSettings::default);
    let text = ReceiptRenderer::new(&sale, &detail, &business).render();

    match out {
        Some(path) => {
            std::fs::write(&path, &text)?;
            Notice::success(format!("Receipt saved to {}", path.display())).emit();
        }
        None => println!("{}", text),
    }
    Ok(())
}
