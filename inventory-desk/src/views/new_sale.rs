//! New sale - interactive cart and checkout
//!
//! The product list is fetched once when the view opens. Cart rules live in
//! [`shared::cart`]; this view only turns typed commands into cart calls and
//! rejections into notices.

use inventory_client::{CheckoutError, CheckoutSession, Route};
use shared::cart::{CartError, CartField};
use shared::models::Product;
use shared::search;

use crate::context::AppContext;
use crate::error::DeskResult;
use crate::notify::Notice;
use crate::render;

const HELP: &str = "\
  find <text>          search products by name or SKU
  add <product id>     add one unit to the cart
  scan <sku>           add the product with this SKU
  qty <id> <n>         set the quantity (0 removes the line)
  discount <id> <amt>  set the line discount
  + <id> / - <id>      step the quantity by one
  rm <id>              remove the line
  customer <name>      set the customer name (blank for walk-in)
  cart                 show the cart and totals
  checkout             complete the sale
  done                 leave without a sale";

#[derive(Debug, Clone, PartialEq, Eq)]
enum SaleCommand {
    Find(String),
    Add(i64),
    Scan(String),
    Set(i64, CartField, String),
    Step(i64, i64),
    Remove(i64),
    Customer(String),
    Show,
    Checkout,
    Help,
    Done,
}

fn parse_id(raw: Option<&str>) -> Result<i64, String> {
    let raw = raw.ok_or_else(|| "Missing product id.".to_string())?;
    raw.trim()
        .parse()
        .map_err(|_| format!("'{}' is not a product id.", raw))
}

fn parse_command(line: &str) -> Result<SaleCommand, String> {
    let line = line.trim();
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let mut args = rest.split_whitespace();

    let command = match verb.to_lowercase().as_str() {
        "find" | "search" => SaleCommand::Find(rest.to_string()),
        "add" => SaleCommand::Add(parse_id(args.next())?),
        "scan" => SaleCommand::Scan(rest.to_string()),
        "qty" | "quantity" => {
            let id = parse_id(args.next())?;
            SaleCommand::Set(id, CartField::Quantity, args.next().unwrap_or_default().to_string())
        }
        "discount" => {
            let id = parse_id(args.next())?;
            SaleCommand::Set(id, CartField::Discount, args.next().unwrap_or_default().to_string())
        }
        "+" => SaleCommand::Step(parse_id(args.next())?, 1),
        "-" => SaleCommand::Step(parse_id(args.next())?, -1),
        "rm" | "remove" => SaleCommand::Remove(parse_id(args.next())?),
        "customer" => SaleCommand::Customer(rest.to_string()),
        "cart" | "show" => SaleCommand::Show,
        "checkout" | "pay" => SaleCommand::Checkout,
        "help" | "?" => SaleCommand::Help,
        "done" | "exit" | "quit" => SaleCommand::Done,
        "" => SaleCommand::Show,
        other => return Err(format!("Unknown command '{}'. Type help for the list.", other)),
    };
    Ok(command)
}

/// Notice for a cart rejection; unknown SKUs are errors, the rest warnings
fn rejection(err: &CartError) -> Notice {
    match err {
        CartError::SkuNotFound { .. } => Notice::error(err.to_string()),
        _ => Notice::warning(err.to_string()),
    }
}

pub async fn run(ctx: &mut AppContext) -> DeskResult<()> {
    ctx.require(Route::NewSale)?;

    let products: Vec<Product> = match ctx.client.list_products().await {
        Ok(products) => products,
        Err(e) => {
            Notice::failure(&e, "Could not fetch products.").emit();
            Vec::new()
        }
    };
    let mut checkout = CheckoutSession::new();
    println!("New Sale ({} products loaded). Type help for commands.", products.len());

    while let Some(line) = ctx.prompt.read_line("sale> ")? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                Notice::warning(message).emit();
                continue;
            }
        };

        match command {
            SaleCommand::Find(term) => {
                // Nothing is listed until something is typed
                if term.trim().is_empty() {
                    continue;
                }
                let found = search::filter(&products, &term);
                if found.is_empty() {
                    println!("No products found.");
                } else {
                    println!("{}", render::products(&found));
                }
            }
            SaleCommand::Add(id) => match products.iter().find(|p| p.id == id) {
                Some(product) => match checkout.cart_mut().add_line(product) {
                    Ok(_) => show_cart(&checkout),
                    Err(e) => rejection(&e).emit(),
                },
                None => Notice::error(format!("Product #{} not found.", id)).emit(),
            },
            SaleCommand::Scan(sku) => match checkout.cart_mut().add_by_sku(&products, &sku) {
                Ok(product) => {
                    Notice::success(format!("{} added to cart!", product.name)).emit();
                    show_cart(&checkout);
                }
                Err(e) => rejection(&e).emit(),
            },
            SaleCommand::Set(id, field, raw) => {
                match checkout.cart_mut().update_line(id, field, &raw) {
                    Ok(_) => show_cart(&checkout),
                    Err(e) => rejection(&e).emit(),
                }
            }
            SaleCommand::Step(id, delta) => match checkout.cart_mut().step_quantity(id, delta) {
                Ok(_) => show_cart(&checkout),
                Err(e) => rejection(&e).emit(),
            },
            SaleCommand::Remove(id) => {
                if checkout.cart_mut().remove_line(id).is_some() {
                    show_cart(&checkout);
                } else {
                    rejection(&CartError::LineNotFound { product_id: id }).emit();
                }
            }
            SaleCommand::Customer(name) => {
                checkout.set_customer_name(name);
                println!("Customer: {}", customer_label(checkout.customer_name()));
            }
            SaleCommand::Show => show_cart(&checkout),
            SaleCommand::Checkout => match checkout.checkout(&ctx.client).await {
                Ok(_) => Notice::success("Sale completed successfully!").emit(),
                Err(CheckoutError::EmptyCart) => Notice::warning("Cart is empty.").emit(),
                Err(e) => Notice::error(e.to_string()).emit(),
            },
            SaleCommand::Help => println!("{}", HELP),
            SaleCommand::Done => break,
        }
    }

    if !checkout.cart().is_empty() {
        Notice::info("Left new sale; the cart was discarded.").emit();
    }
    Ok(())
}

fn customer_label(name: &str) -> &str {
    if name.trim().is_empty() {
        "Walk-in"
    } else {
        name.trim()
    }
}

fn show_cart(checkout: &CheckoutSession) {
    let cart = checkout.cart();
    if cart.is_empty() {
        println!("Cart is empty.");
        return;
    }
    println!("{}", render::cart(cart));
    println!("Customer: {}", customer_label(checkout.customer_name()));
    println!("{}", render::totals(&cart.compute_totals()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cart_commands() {
        assert_eq!(parse_command("add 7"), Ok(SaleCommand::Add(7)));
        assert_eq!(
            parse_command("  qty 7 2.5 "),
            Ok(SaleCommand::Set(7, CartField::Quantity, "2.5".into()))
        );
        assert_eq!(
            parse_command("discount 3 50"),
            Ok(SaleCommand::Set(3, CartField::Discount, "50".into()))
        );
        assert_eq!(parse_command("+ 3"), Ok(SaleCommand::Step(3, 1)));
        assert_eq!(parse_command("- 3"), Ok(SaleCommand::Step(3, -1)));
        assert_eq!(parse_command("rm 3"), Ok(SaleCommand::Remove(3)));
        assert_eq!(parse_command("CHECKOUT"), Ok(SaleCommand::Checkout));
        assert_eq!(parse_command(""), Ok(SaleCommand::Show));
    }

    #[test]
    fn test_parse_keeps_free_text() {
        assert_eq!(
            parse_command("customer Nimal  Perera"),
            Ok(SaleCommand::Customer("Nimal  Perera".into()))
        );
        assert_eq!(
            parse_command("find basmati rice"),
            Ok(SaleCommand::Find("basmati rice".into()))
        );
        assert_eq!(parse_command("find"), Ok(SaleCommand::Find(String::new())));
        assert_eq!(parse_command("scan 4792"), Ok(SaleCommand::Scan("4792".into())));
    }

    #[test]
    fn test_missing_quantity_value_is_blank() {
        // Blank parses as zero in the cart, which removes the line
        assert_eq!(
            parse_command("qty 4"),
            Ok(SaleCommand::Set(4, CartField::Quantity, String::new()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("add").is_err());
        assert!(parse_command("add rice").is_err());
        assert!(parse_command("fly 3").is_err());
    }

    #[test]
    fn test_rejection_levels() {
        use crate::notify::Level;

        let err = CartError::SkuNotFound { sku: "X1".into() };
        assert_eq!(rejection(&err).level, Level::Error);
        assert_eq!(rejection(&err).message, "Product with SKU \"X1\" not found.");

        let err = CartError::InsufficientStock {
            product_id: 1,
            available: 3,
        };
        assert_eq!(rejection(&err).level, Level::Warning);
        assert_eq!(rejection(&err).message, "Only 3 units available.");
    }

    #[test]
    fn test_customer_label() {
        assert_eq!(customer_label("  "), "Walk-in");
        assert_eq!(customer_label(" Nimal "), "Nimal");
    }
}
