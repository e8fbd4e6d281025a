//! Text tables for the views

use std::ops::Range;

use shared::cart::{Cart, CartTotals};
use shared::models::{Customer, Product, Sale, SaleDetail, SalesPoint, Supplier, TopProduct, User};
use shared::money::{format_money, format_money_grouped};
use tabled::builder::Builder;
use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Alignment, Style};

/// Shown in place of an optional field
const EMPTY: &str = "N/A";

fn or_empty(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => EMPTY.to_string(),
    }
}

fn table(header: &[&str], rows: Vec<Vec<String>>, numeric: Range<usize>) -> String {
    let mut builder = Builder::default();
    builder.push_record(header.iter().copied());
    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    if !numeric.is_empty() {
        table.modify(Columns::new(numeric), Alignment::right());
        table.modify(Rows::first(), Alignment::left());
    }
    table.to_string()
}

pub fn products(products: &[&Product]) -> String {
    let rows = products
        .iter()
        .map(|p| {
            let stock = if p.is_low_stock() {
                format!("{} (low)", p.quantity)
            } else {
                p.quantity.to_string()
            };
            vec![
                p.id.to_string(),
                p.name.clone(),
                or_empty(p.sku.as_deref()),
                stock,
                format_money(p.price),
                format_money(p.cost_price),
            ]
        })
        .collect();
    table(&["ID", "Name", "SKU", "Stock", "Price", "Cost"], rows, 3..6)
}

pub fn customers(customers: &[&Customer]) -> String {
    let rows = customers
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                c.name.clone(),
                or_empty(c.email.as_deref()),
                or_empty(c.phone.as_deref()),
                or_empty(c.address.as_deref()),
            ]
        })
        .collect();
    table(&["ID", "Name", "Email", "Phone", "Address"], rows, 0..0)
}

pub fn suppliers(suppliers: &[&Supplier]) -> String {
    let rows = suppliers
        .iter()
        .map(|s| {
            vec![
                s.id.to_string(),
                s.name.clone(),
                or_empty(s.contact_person.as_deref()),
                or_empty(s.email.as_deref()),
                or_empty(s.phone.as_deref()),
            ]
        })
        .collect();
    table(
        &["ID", "Name", "Contact Person", "Email", "Phone"],
        rows,
        0..0,
    )
}

/// Sales history / report detail rows
pub fn sales(sales: &[Sale]) -> String {
    let rows = sales
        .iter()
        .map(|s| {
            vec![
                format!("#{}", s.id),
                s.customer_label().to_string(),
                format_money(s.total_amount),
                s.display_date(),
                or_empty(s.username.as_deref()),
            ]
        })
        .collect();
    table(
        &["Sale ID", "Customer", "Total Amount", "Date", "Sold By"],
        rows,
        2..3,
    )
}

pub fn sale_items(detail: &SaleDetail) -> String {
    let rows = detail
        .items
        .iter()
        .map(|item| {
            vec![
                or_empty(item.product_name.as_deref()),
                item.quantity_sold.to_string(),
                format_money(item.price_per_unit),
                format_money(item.discount),
                format_money(item.subtotal()),
            ]
        })
        .collect();
    table(
        &["Product", "Qty", "Price", "Discount", "Subtotal"],
        rows,
        1..5,
    )
}

pub fn users(users: &[User]) -> String {
    let rows = users
        .iter()
        .map(|u| {
            vec![
                u.id.to_string(),
                u.username.clone(),
                or_empty(u.email.as_deref()),
                u.role.to_string(),
            ]
        })
        .collect();
    table(&["ID", "Username", "Email", "Current Role"], rows, 0..0)
}

pub fn cart(cart: &Cart) -> String {
    let rows = cart
        .lines()
        .iter()
        .map(|line| {
            vec![
                line.product_id.to_string(),
                line.name.clone(),
                line.quantity.to_string(),
                format_money(line.unit_price),
                format_money(line.discount),
                format_money(line.net()),
            ]
        })
        .collect();
    table(
        &["ID", "Item", "Qty", "Price", "Discount", "Subtotal"],
        rows,
        2..6,
    )
}

pub fn totals(totals: &CartTotals) -> String {
    format!(
        "Subtotal:    {}\nDiscount:    - {}\nGrand Total: {}",
        format_money(totals.subtotal),
        format_money(totals.total_discount),
        format_money(totals.grand_total)
    )
}

/// Stat cards as a two or three column table: title, value, note
pub fn cards(cards: &[(&str, String, Option<String>)]) -> String {
    let rows = cards
        .iter()
        .map(|(title, value, note)| {
            vec![
                title.to_string(),
                value.clone(),
                note.clone().unwrap_or_default(),
            ]
        })
        .collect();
    table(&["", "Value", ""], rows, 1..2)
}

pub fn top_products(products: &[TopProduct]) -> String {
    let rows = products
        .iter()
        .map(|p| vec![p.name.clone(), p.total_sold.to_string()])
        .collect();
    table(&["Product Name", "Units Sold"], rows, 1..2)
}

pub fn sales_over_time(points: &[SalesPoint]) -> String {
    let rows = points
        .iter()
        .map(|p| vec![p.date.clone(), format_money_grouped(p.total)])
        .collect();
    table(&["Date", "Total"], rows, 1..2)
}

/// "Name: 3 left" per product
pub fn low_stock(products: &[Product]) -> String {
    products
        .iter()
        .map(|p| format!("  {}: {} left", p.name, p.quantity))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::Role;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn product(id: i64, name: &str, quantity: i64) -> Product {
        Product {
            id,
            name: name.into(),
            sku: Some(format!("SKU-{}", id)),
            quantity,
            price: d("1250"),
            cost_price: d("900"),
            description: None,
        }
    }

    #[test]
    fn test_products_table_marks_low_stock() {
        let items = [product(1, "Rice 5kg", 20), product(2, "Dhal 1kg", 4)];
        let refs: Vec<&Product> = items.iter().collect();
        let out = products(&refs);

        assert!(out.contains("Rice 5kg"));
        assert!(out.contains("SKU-2"));
        assert!(out.contains("4 (low)"));
        assert!(!out.contains("20 (low)"));
        assert!(out.contains("Rs. 1250.00"));
    }

    #[test]
    fn test_missing_fields_show_placeholder() {
        let customer = Customer {
            id: 5,
            name: "Nimal".into(),
            email: None,
            phone: Some("  ".into()),
            address: None,
        };
        let out = customers(&[&customer]);
        assert!(out.contains("Nimal"));
        assert_eq!(out.matches(EMPTY).count(), 3);
    }

    #[test]
    fn test_cart_and_totals() {
        let mut c = Cart::new();
        c.add_line(&product(1, "Rice 5kg", 20)).unwrap();
        c.add_line(&product(1, "Rice 5kg", 20)).unwrap();

        let out = cart(&c);
        assert!(out.contains("Rice 5kg"));
        assert!(out.contains("Rs. 2500.00"));

        let text = totals(&c.compute_totals());
        assert!(text.contains("Grand Total: Rs. 2500.00"));
        assert!(text.contains("Discount:    - Rs. 0.00"));
    }

    #[test]
    fn test_users_table() {
        let list = vec![User {
            id: 1,
            username: "maya".into(),
            email: Some("maya@shop.lk".into()),
            role: Role::Admin,
        }];
        let out = users(&list);
        assert!(out.contains("Current Role"));
        assert!(out.contains("admin"));
    }

    #[test]
    fn test_low_stock_lines() {
        let out = low_stock(&[product(2, "Dhal 1kg", 4), product(3, "Sugar", 0)]);
        assert_eq!(out, "  Dhal 1kg: 4 left\n  Sugar: 0 left");
    }

    #[test]
    fn test_empty_table_keeps_header() {
        let out = sales(&[]);
        assert!(out.contains("Sold By"));
    }
}
