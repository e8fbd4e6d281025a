//! CSV product import and sales report export

use csv::{ReaderBuilder, Trim, WriterBuilder};
use shared::ErrorCode;
use shared::models::{ProductInput, ReportRange, Sale};
use shared::money::format_amount;
use std::io::{Read, Write};
use std::path::Path;
use thiserror::Error;

/// Columns expected in a product import file
pub const PRODUCT_IMPORT_HEADERS: [&str; 6] =
    ["name", "sku", "quantity", "price", "cost_price", "description"];

/// Columns of the sales report export
pub const SALES_REPORT_HEADERS: [&str; 5] =
    ["Sale ID", "Customer Name", "Total Amount", "Date", "Sold By"];

/// CSV error type
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    #[error("The file contains no products")]
    Empty,

    #[error("Row {row}: {message}")]
    InvalidRow { row: usize, message: String },
}

impl CsvError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Csv(_) | Self::InvalidRow { .. } => ErrorCode::ImportFileInvalid,
            Self::Io(_) => ErrorCode::StorageError,
            Self::Empty => ErrorCode::ImportFileEmpty,
        }
    }
}

/// Parse product rows from CSV with a header line
///
/// Blank lines are skipped. Rows are numbered from the header (row 1) in
/// error messages.
pub fn read_products<R: Read>(reader: R) -> Result<Vec<ProductInput>, CsvError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = rdr.headers()?.clone();
    if let Some(missing) = PRODUCT_IMPORT_HEADERS[..5]
        .iter()
        .find(|h| !headers.iter().any(|c| c.eq_ignore_ascii_case(h)))
    {
        return Err(CsvError::InvalidRow {
            row: 1,
            message: format!("missing column '{}'", missing),
        });
    }

    let mut products = Vec::new();
    for (index, result) in rdr.deserialize::<ProductInput>().enumerate() {
        let row = index + 2;
        let product = result.map_err(|e| CsvError::InvalidRow {
            row,
            message: e.to_string(),
        })?;
        product.validate().map_err(|e| CsvError::InvalidRow {
            row,
            message: e.message,
        })?;
        products.push(product);
    }

    if products.is_empty() {
        return Err(CsvError::Empty);
    }
    tracing::debug!(count = products.len(), "Parsed product import");
    Ok(products)
}

/// Parse a product import file
pub fn read_products_file(path: &Path) -> Result<Vec<ProductInput>, CsvError> {
    let file = std::fs::File::open(path)?;
    read_products(file)
}

/// Write sales as CSV with the report headers
pub fn write_sales_report<W: Write>(writer: W, sales: &[Sale]) -> Result<(), CsvError> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record(SALES_REPORT_HEADERS)?;
    for sale in sales {
        wtr.write_record([
            sale.id.to_string(),
            sale.customer_name.clone().unwrap_or_default(),
            format_amount(sale.total_amount),
            sale.sale_date.clone(),
            sale.username.clone().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the sales report to `path`, creating parent directories
pub fn write_sales_report_file(path: &Path, sales: &[Sale]) -> Result<(), CsvError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;
    write_sales_report(file, sales)
}

/// `Sales_Report_<start>_to_<end>.csv`
pub fn report_file_name(range: &ReportRange) -> String {
    format!(
        "Sales_Report_{}_to_{}.csv",
        range.start.format("%Y-%m-%d"),
        range.end.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn test_read_products() {
        let data = "\
name,sku,quantity,price,cost_price,description
Basmati Rice 5kg, RICE-5 ,20,1250.00,1100.50,Premium

Coconut Oil,OIL-1,12,780,650,
";
        let products = read_products(data.as_bytes()).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].sku, "RICE-5");
        assert_eq!(products[0].price, "1250".parse::<Decimal>().unwrap());
        assert_eq!(products[0].cost_price, "1100.5".parse::<Decimal>().unwrap());
        assert_eq!(products[1].description, None);
    }

    #[test]
    fn test_read_products_reports_bad_row() {
        let data = "name,sku,quantity,price,cost_price,description\nTea,TEA-1,many,100,80,\n";
        match read_products(data.as_bytes()) {
            Err(CsvError::InvalidRow { row, .. }) => assert_eq!(row, 2),
            other => panic!("expected invalid row, got {:?}", other),
        }
    }

    #[test]
    fn test_read_products_requires_sku() {
        let data = "name,sku,quantity,price,cost_price,description\nTea,,4,100,80,\n";
        let err = read_products(data.as_bytes()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ImportFileInvalid);
        assert!(err.to_string().contains("sku is required"));
    }

    #[test]
    fn test_read_products_missing_column() {
        let data = "name,sku,quantity,price\nTea,T,1,2\n";
        let err = read_products(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("cost_price"));
    }

    #[test]
    fn test_read_products_empty() {
        let data = "name,sku,quantity,price,cost_price,description\n";
        let err = read_products(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CsvError::Empty));
        assert_eq!(err.code(), ErrorCode::ImportFileEmpty);
    }

    #[test]
    fn test_write_sales_report() {
        let sales = vec![
            Sale {
                id: 7,
                customer_name: Some("Kamal, Jr".into()),
                total_amount: "240".parse().unwrap(),
                sale_date: "2024-05-01T10:00:00Z".into(),
                username: Some("cashier".into()),
            },
            Sale {
                id: 8,
                customer_name: None,
                total_amount: "99.5".parse().unwrap(),
                sale_date: "2024-05-02T11:00:00Z".into(),
                username: None,
            },
        ];
        let mut out = Vec::new();
        write_sales_report(&mut out, &sales).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Sale ID,Customer Name,Total Amount,Date,Sold By");
        assert_eq!(lines[1], "7,\"Kamal, Jr\",240.00,2024-05-01T10:00:00Z,cashier");
        assert_eq!(lines[2], "8,,99.50,2024-05-02T11:00:00Z,");
    }

    #[test]
    fn test_report_file_name() {
        let range = ReportRange {
            start: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
        };
        assert_eq!(report_file_name(&range), "Sales_Report_2024-05-01_to_2024-05-31.csv");
    }
}
