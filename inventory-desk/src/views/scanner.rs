//! Scanner - look up a product by its SKU

use inventory_client::Route;
use shared::money::format_money;

use crate::context::AppContext;
use crate::error::DeskResult;
use crate::notify::Notice;

pub async fn lookup(ctx: &mut AppContext, sku: &str) -> DeskResult<()> {
    ctx.require(Route::Scanner)?;
    let sku = sku.trim();

    match ctx.client.find_products_by_sku(sku).await {
        Ok(products) => match products.into_iter().next() {
            Some(product) => {
                println!("{}", product.name);
                println!("  SKU:      {}", product.sku.as_deref().unwrap_or(sku));
                println!("  Price:    {}", format_money(product.price));
                println!("  In stock: {}", product.quantity);
                if let Some(description) = &product.description {
                    println!("  {}", description);
                }
            }
            None => Notice::error(format!(
                "Product with SKU \"{}\" not found in your inventory.",
                sku
            ))
            .emit(),
        },
        Err(e) => Notice::failure(&e, "Failed to fetch product. Please check your connection.").emit(),
    }
    Ok(())
}
