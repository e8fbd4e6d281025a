//! Products - catalogue, product form, CSV import

use std::path::PathBuf;

use inventory_client::csv_io;
use inventory_client::{Action, Route};
use rust_decimal::Decimal;
use shared::models::{Product, ProductInput};
use shared::money::{format_amount, parse_amount, parse_quantity};
use shared::search;

use crate::cli::{ProductFields, ProductsCommand};
use crate::context::AppContext;
use crate::error::DeskResult;
use crate::notify::Notice;
use crate::prompt::Prompt;
use crate::render;

pub async fn run(ctx: &mut AppContext, command: ProductsCommand) -> DeskResult<()> {
    ctx.require(Route::Products)?;
    match command {
        ProductsCommand::List { search } => list(ctx, search.as_deref()).await,
        ProductsCommand::LowStock => low_stock(ctx).await,
        ProductsCommand::Add(fields) => add(ctx, fields).await,
        ProductsCommand::Edit { id, fields } => edit(ctx, id, fields).await,
        ProductsCommand::Delete { id, yes } => delete(ctx, id, yes).await,
        ProductsCommand::Import { file } => import(ctx, file).await,
    }
}

async fn list(ctx: &mut AppContext, search: Option<&str>) -> DeskResult<()> {
    let products = match ctx.client.list_products().await {
        Ok(products) => products,
        Err(e) => {
            Notice::failure(&e, "Failed to fetch products.").emit();
            return Ok(());
        }
    };

    let shown = search::filter(&products, super::search_term(search));
    if shown.is_empty() {
        println!("No products found.");
    } else {
        println!("{}", render::products(&shown));
    }
    Ok(())
}

async fn low_stock(ctx: &mut AppContext) -> DeskResult<()> {
    match ctx.client.low_stock_products().await {
        Ok(products) if products.is_empty() => println!("All products are well stocked."),
        Ok(products) => {
            let refs: Vec<&Product> = products.iter().collect();
            println!("{}", render::products(&refs));
        }
        Err(e) => Notice::failure(&e, "Failed to fetch products.").emit(),
    }
    Ok(())
}

async fn add(ctx: &mut AppContext, fields: ProductFields) -> DeskResult<()> {
    ctx.ensure(Action::AddProduct)?;
    let input = fill_form(&mut ctx.prompt, blank_input(), &fields, true)?;
    save(ctx, None, input).await
}

async fn edit(ctx: &mut AppContext, id: i64, fields: ProductFields) -> DeskResult<()> {
    ctx.ensure(Action::EditProduct)?;
    let products = match ctx.client.list_products().await {
        Ok(products) => products,
        Err(e) => {
            Notice::failure(&e, "Failed to fetch products.").emit();
            return Ok(());
        }
    };
    let Some(product) = products.iter().find(|p| p.id == id) else {
        Notice::error(format!("Product #{} not found.", id)).emit();
        return Ok(());
    };

    // With no flags the whole form is asked, prefilled
    let ask_all = is_empty(&fields);
    let input = fill_form(&mut ctx.prompt, product.to_input(), &fields, ask_all)?;
    save(ctx, Some(id), input).await
}

async fn save(ctx: &mut AppContext, id: Option<i64>, input: ProductInput) -> DeskResult<()> {
    if let Err(e) = input.validate() {
        Notice::warning(e.message).emit();
        return Ok(());
    }

    let result = match id {
        Some(id) => ctx.client.update_product(id, &input).await,
        None => ctx.client.create_product(&input).await,
    };
    match result {
        Ok(()) => {
            let message = if id.is_some() {
                "Product updated successfully!"
            } else {
                "Product added successfully!"
            };
            Notice::success(message).emit();
            list(ctx, None).await?;
        }
        Err(e) => Notice::api_error(&e, "Failed to save product.").emit(),
    }
    Ok(())
}

async fn delete(ctx: &mut AppContext, id: i64, yes: bool) -> DeskResult<()> {
    ctx.ensure(Action::DeleteProduct)?;
    if !yes
        && !ctx
            .prompt
            .confirm("Are you sure you want to delete this product?")?
    {
        return Ok(());
    }

    match ctx.client.delete_product(id).await {
        Ok(()) => {
            Notice::success("Product deleted successfully!").emit();
            list(ctx, None).await?;
        }
        Err(e) => Notice::api_error(&e, "Failed to delete product.").emit(),
    }
    Ok(())
}

async fn import(ctx: &mut AppContext, file: Option<PathBuf>) -> DeskResult<()> {
    ctx.ensure(Action::ImportProducts)?;
    let Some(path) = file else {
        Notice::warning("Please select a file first.").emit();
        println!("Columns: {}", csv_io::PRODUCT_IMPORT_HEADERS.join(","));
        return Ok(());
    };

    let products = match csv_io::read_products_file(&path) {
        Ok(products) => products,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "CSV import rejected");
            Notice::warning(e.to_string()).emit();
            return Ok(());
        }
    };

    match ctx.client.bulk_import_products(&products).await {
        Ok(()) => {
            Notice::success(format!("{} products imported successfully!", products.len())).emit();
            list(ctx, None).await?;
        }
        Err(e) => Notice::failure(&e, "Failed to import products.").emit(),
    }
    Ok(())
}

fn blank_input() -> ProductInput {
    ProductInput {
        name: String::new(),
        sku: String::new(),
        quantity: 0,
        price: Decimal::ZERO,
        cost_price: Decimal::ZERO,
        description: None,
    }
}

fn is_empty(fields: &ProductFields) -> bool {
    fields.name.is_none()
        && fields.sku.is_none()
        && fields.quantity.is_none()
        && fields.price.is_none()
        && fields.cost_price.is_none()
        && fields.description.is_none()
}

/// Apply the given flags; with `ask_missing`, prompt for the rest
fn fill_form(
    prompt: &mut Prompt,
    mut input: ProductInput,
    fields: &ProductFields,
    ask_missing: bool,
) -> std::io::Result<ProductInput> {
    match &fields.name {
        Some(name) => input.name = name.clone(),
        None if ask_missing => input.name = prompt.ask_or("Name", &input.name)?,
        None => {}
    }
    match &fields.sku {
        Some(sku) => input.sku = sku.clone(),
        None if ask_missing => input.sku = prompt.ask_or("SKU", &input.sku)?,
        None => {}
    }
    match fields.quantity {
        Some(quantity) => input.quantity = quantity,
        None if ask_missing => {
            input.quantity = parse_quantity(&prompt.ask_or("Quantity", &input.quantity.to_string())?)
        }
        None => {}
    }
    match fields.price {
        Some(price) => input.price = price,
        None if ask_missing => {
            input.price = parse_amount(&prompt.ask_or("Price", &format_amount(input.price))?)
        }
        None => {}
    }
    match fields.cost_price {
        Some(cost) => input.cost_price = cost,
        None if ask_missing => {
            input.cost_price =
                parse_amount(&prompt.ask_or("Cost price", &format_amount(input.cost_price))?)
        }
        None => {}
    }
    match &fields.description {
        Some(description) => input.description = Some(description.clone()),
        None if ask_missing => {
            input.description = prompt.ask_optional("Description", input.description.as_deref())?
        }
        None => {}
    }
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn prompt(input: &str) -> Prompt {
        Prompt::new(Cursor::new(input.to_string()), io::sink())
    }

    fn existing() -> ProductInput {
        ProductInput {
            name: "Rice 5kg".into(),
            sku: "RICE-5".into(),
            quantity: 20,
            price: d("1250"),
            cost_price: d("1100"),
            description: Some("Samba".into()),
        }
    }

    #[test]
    fn test_flags_only_edit_keeps_other_fields() {
        let fields = ProductFields {
            price: Some(d("1300")),
            ..Default::default()
        };
        let input = fill_form(&mut prompt(""), existing(), &fields, false).unwrap();
        assert_eq!(input.price, d("1300"));
        assert_eq!(input.name, "Rice 5kg");
        assert_eq!(input.quantity, 20);
    }

    #[test]
    fn test_add_prompts_for_missing_fields() {
        let fields = ProductFields {
            name: Some("Dhal 1kg".into()),
            ..Default::default()
        };
        let mut p = prompt("DHAL-1\n2.7\n350\nabc\n\n");
        let input = fill_form(&mut p, blank_input(), &fields, true).unwrap();

        assert_eq!(input.name, "Dhal 1kg");
        assert_eq!(input.sku, "DHAL-1");
        assert_eq!(input.quantity, 2);
        assert_eq!(input.price, d("350"));
        assert_eq!(input.cost_price, Decimal::ZERO);
        assert!(input.description.is_none());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_blank_answers_keep_prefilled_values() {
        let mut p = prompt("\n\n\n\n\n-\n");
        let input = fill_form(&mut p, existing(), &ProductFields::default(), true).unwrap();
        assert_eq!(input.sku, "RICE-5");
        assert_eq!(input.price, d("1250"));
        assert!(input.description.is_none());
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty(&ProductFields::default()));
        assert!(!is_empty(&ProductFields {
            quantity: Some(1),
            ..Default::default()
        }));
    }
}
