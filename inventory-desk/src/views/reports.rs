//! Sales report for a date range, with CSV export

use chrono::Local;
use inventory_client::{Route, csv_io};
use shared::models::ReportRange;
use shared::money::format_money_grouped;

use crate::cli::ReportArgs;
use crate::context::AppContext;
use crate::error::{DeskError, DeskResult};
use crate::notify::Notice;
use crate::render;

pub async fn show(ctx: &mut AppContext, args: ReportArgs) -> DeskResult<()> {
    ctx.require(Route::Reports)?;
    let range = resolve_range(&args, Local::now().date_naive())?;

    let report = match ctx.client.sales_report(&range).await {
        Ok(report) => report,
        Err(e) => {
            Notice::failure(&e, "Failed to generate report.").emit();
            return Ok(());
        }
    };

    println!("Sales Report: {} to {}", range.start, range.end);
    let summary = &report.summary;
    println!(
        "{}",
        render::cards(&[
            ("Total Sales", summary.total_sales.to_string(), None),
            (
                "Total Revenue",
                format_money_grouped(summary.total_revenue),
                Some(format!("Discount: {}", format_money_grouped(summary.total_discount))),
            ),
            ("Total Cost", format_money_grouped(summary.total_cost), None),
            ("Gross Profit", format_money_grouped(summary.gross_profit), None),
        ])
    );

    if report.details.is_empty() {
        println!("No sales found for the selected period.");
    } else {
        println!("{}", render::sales(&report.details));
    }

    if let Some(dir) = args.export {
        let path = dir.join(csv_io::report_file_name(&range));
        csv_io::write_sales_report_file(&path, &report.details)?;
        Notice::success(format!("Report exported to {}", path.display())).emit();
    }
    Ok(())
}

/// Defaults: first of the current month through `today`
fn resolve_range(args: &ReportArgs, today: chrono::NaiveDate) -> DeskResult<ReportRange> {
    let default = ReportRange::month_to_date(today);
    let range = ReportRange {
        start: args.start.unwrap_or(default.start),
        end: args.end.unwrap_or(default.end),
    };
    if range.start > range.end {
        return Err(DeskError::Input(
            "Start date must not be after the end date.".to_string(),
        ));
    }
    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_range_is_month_to_date() {
        let range = resolve_range(&ReportArgs::default(), date(2026, 10, 16)).unwrap();
        assert_eq!(range.start, date(2026, 10, 1));
        assert_eq!(range.end, date(2026, 10, 16));
        assert_eq!(range.end_param(), "2026-10-16T23:59:59");
    }

    #[test]
    fn test_explicit_start_keeps_default_end() {
        let args = ReportArgs {
            start: Some(date(2026, 9, 1)),
            ..Default::default()
        };
        let range = resolve_range(&args, date(2026, 10, 16)).unwrap();
        assert_eq!(range.start, date(2026, 9, 1));
        assert_eq!(range.end, date(2026, 10, 16));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let args = ReportArgs {
            start: Some(date(2026, 10, 10)),
            end: Some(date(2026, 10, 1)),
            export: None,
        };
        assert!(matches!(
            resolve_range(&args, date(2026, 10, 16)),
            Err(DeskError::Input(_))
        ));
    }
}
