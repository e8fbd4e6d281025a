//! Plain-text sale receipt

use shared::models::{BusinessSettings, Sale, SaleDetail};
use shared::money::{format_amount, format_money};

/// Default receipt width in characters
pub const DEFAULT_WIDTH: usize = 42;

const RETURN_NOTE: &str =
    "NOTE: Goods can be returned or exchanged within 7 days with this original receipt.";
const THANK_YOU: &str = "Thank you for shopping with us!";

pub struct ReceiptRenderer<'a> {
    sale: &'a Sale,
    detail: &'a SaleDetail,
    business: &'a BusinessSettings,
    width: usize,
}

impl<'a> ReceiptRenderer<'a> {
    pub fn new(sale: &'a Sale, detail: &'a SaleDetail, business: &'a BusinessSettings) -> Self {
        Self {
            sale,
            detail,
            business,
            width: DEFAULT_WIDTH,
        }
    }

    /// Set the line width; anything below 32 columns is widened to 32
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(32);
        self
    }

    pub fn render(&self) -> String {
        let mut b = TextBuilder::new(self.width);

        // Business header
        b.center(&self.business.display_name().to_uppercase());
        if let Some(address) = self.business.address.as_deref().filter(|a| !a.is_empty()) {
            b.center(address);
        }
        if let Some(phone) = self.business.phone.as_deref().filter(|p| !p.is_empty()) {
            b.center(&format!("Phone: {}", phone));
        }
        b.sep('-');

        // Sale header
        let local = self.sale.sale_date_local();
        let date = local
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| self.sale.sale_date.clone());
        let time = local
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_default();
        let customer = self
            .sale
            .customer_name
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or("N/A");

        b.line_lr(&format!("Receipt#: {}", self.sale.id), &format!("Date: {}", date));
        b.line_lr(&format!("Customer: {}", customer), &format!("Time: {}", time));
        b.line(&format!(
            "Sold By: {}",
            self.sale.username.as_deref().unwrap_or("")
        ));
        b.sep('-');

        // Items
        let name_width = self.width - 24;
        b.line(&format!(
            "{:<nw$}{:>4}{:>9}{:>11}",
            "Item",
            "Qty",
            "Price",
            "Total",
            nw = name_width
        ));
        b.sep('-');
        for item in &self.detail.items {
            let name = item.product_name.clone().unwrap_or_else(|| match item.product_id {
                Some(id) => format!("Item #{}", id),
                None => "Item".to_string(),
            });
            b.line(&format!(
                "{:<nw$}{:>4}{:>9}{:>11}",
                truncate(&name, name_width),
                item.quantity_sold,
                format_amount(item.price_per_unit),
                format_amount(item.subtotal()),
                nw = name_width
            ));
        }
        b.sep('-');

        // Totals
        b.line_lr("Subtotal:", &format_money(self.detail.items_subtotal()));
        b.line_lr(
            "Discount:",
            &format!("- {}", format_money(self.detail.items_discount())),
        );
        b.sep('=');
        b.line_lr("TOTAL:", &format_money(self.sale.total_amount));
        b.sep('-');

        for line in wrap(RETURN_NOTE, self.width) {
            b.center(&line);
        }
        b.center(THANK_YOU);
        b.finish()
    }
}

/// Line-oriented text buffer with fixed width
struct TextBuilder {
    buf: String,
    width: usize,
}

impl TextBuilder {
    fn new(width: usize) -> Self {
        Self {
            buf: String::new(),
            width,
        }
    }

    fn line(&mut self, text: &str) {
        self.buf.push_str(text.trim_end());
        self.buf.push('\n');
    }

    fn center(&mut self, text: &str) {
        let len = text.chars().count();
        let pad = self.width.saturating_sub(len) / 2;
        self.line(&format!("{}{}", " ".repeat(pad), text));
    }

    /// Left and right text on one line, right-aligned to the width
    fn line_lr(&mut self, left: &str, right: &str) {
        let used = left.chars().count() + right.chars().count();
        let gap = self.width.saturating_sub(used).max(1);
        self.line(&format!("{}{}{}", left, " ".repeat(gap), right));
    }

    fn sep(&mut self, ch: char) {
        let line: String = std::iter::repeat_n(ch, self.width).collect();
        self.line(&line);
    }

    fn finish(self) -> String {
        self.buf
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('~');
    out
}

/// Greedy word wrap
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
