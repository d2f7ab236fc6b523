use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_sale::aggregate::Sale;
use contracts::domain::a003_purchase::aggregate::Purchase;
use contracts::domain::a004_expense::aggregate::Expense;
use contracts::domain::common::DateRange;
use contracts::shared::report::{BusinessHeader, ReportTable};

use super::{non_empty, product_cell, ReportError};
use crate::shared::format::{format_amount, format_report_date};
use crate::shared::metrics::BusinessClock;

/// One row per sale item
pub fn sales_report(
    sales: &[Sale],
    range: &DateRange,
    business: &BusinessHeader,
    clock: &BusinessClock,
) -> Result<ReportTable, ReportError> {
    let title = format!(
        "Sales_Report_{}_to_{}",
        range.from.format("%Y-%m-%d"),
        range.to.format("%Y-%m-%d")
    );
    let mut table = ReportTable::new(
        title,
        &["Invoice", "Date", "Customer", "Product", "Qty", "Sell Price", "Amount", "Profit"],
        business.clone(),
    );

    let mut total = 0.0;
    for sale in sales {
        let date = format_report_date(clock.local_date(&sale.sale_date));
        for item in &sale.items {
            total += item.amount();
            table.push_row(vec![
                sale.invoice_number.clone(),
                date.clone(),
                sale.customer_name.clone(),
                product_cell(item.product_name()),
                item.quantity.to_string(),
                format_amount(item.selling_price),
                format_amount(item.amount()),
                format_amount(item.profit()),
            ]);
        }
    }

    table.set_total(total);
    non_empty(table)
}

pub fn purchase_report(
    purchases: &[Purchase],
    business: &BusinessHeader,
    clock: &BusinessClock,
) -> Result<ReportTable, ReportError> {
    let mut table = ReportTable::new(
        "Purchase_Report",
        &["Bill", "Date", "Supplier", "Product", "Qty", "Cost Price", "Amount"],
        business.clone(),
    );

    let mut total = 0.0;
    for purchase in purchases {
        let date = format_report_date(clock.local_date(&purchase.purchase_date));
        for item in &purchase.items {
            total += item.amount();
            table.push_row(vec![
                purchase.bill_number.clone(),
                date.clone(),
                purchase.supplier_name.clone(),
                product_cell(item.product_name()),
                item.quantity.to_string(),
                format_amount(item.cost_price),
                format_amount(item.amount()),
            ]);
        }
    }

    table.set_total(total);
    non_empty(table)
}

pub fn expense_report(
    expenses: &[Expense],
    business: &BusinessHeader,
    clock: &BusinessClock,
) -> Result<ReportTable, ReportError> {
    let mut table = ReportTable::new(
        "Expense_Report",
        &["Title", "Category", "Amount", "Date"],
        business.clone(),
    );

    for e in expenses {
        table.push_row(vec![
            e.title.clone(),
            e.category.clone(),
            format_amount(e.amount),
            format_report_date(clock.local_date(&e.date)),
        ]);
    }

    table.set_total(expenses.iter().map(|e| e.amount).sum());
    non_empty(table)
}

/// Current stock, not date filtered; no total line
pub fn stock_report(products: &[Product], business: &BusinessHeader) -> Result<ReportTable, ReportError> {
    let mut table = ReportTable::new(
        "Stock_Report",
        &["Product", "Category", "Stock", "Min Stock", "Status"],
        business.clone(),
    );

    for p in products {
        let status = if p.is_low_stock() { "LOW" } else { "OK" };
        table.push_row(vec![
            p.name.clone(),
            p.category.clone(),
            p.stock.to_string(),
            p.min_stock.to_string(),
            status.to_string(),
        ]);
    }

    non_empty(table)
}

pub fn profit_report(
    sales: &[Sale],
    business: &BusinessHeader,
    clock: &BusinessClock,
) -> Result<ReportTable, ReportError> {
    let mut table = ReportTable::new(
        "Profit_Report",
        &["Date", "Invoice", "Product", "Revenue", "Cost", "Profit"],
        business.clone(),
    );

    let mut total = 0.0;
    for sale in sales {
        let date = format_report_date(clock.local_date(&sale.sale_date));
        for item in &sale.items {
            total += item.profit();
            table.push_row(vec![
                date.clone(),
                sale.invoice_number.clone(),
                product_cell(item.product_name()),
                format_amount(item.amount()),
                format_amount(item.cost()),
                format_amount(item.profit()),
            ]);
        }
    }

    table.set_total(total);
    non_empty(table)
}

/// Item value is taxable; the sale-level GST rate applies to every item
pub fn gst_report(
    sales: &[Sale],
    business: &BusinessHeader,
    clock: &BusinessClock,
) -> Result<ReportTable, ReportError> {
    let mut table = ReportTable::new(
        "GST_Report",
        &["Invoice", "Date", "Product", "Taxable", "GST", "GST Amt", "Total"],
        business.clone(),
    );

    let mut total = 0.0;
    for sale in sales {
        let date = format_report_date(clock.local_date(&sale.sale_date));
        for item in &sale.items {
            let taxable = item.amount();
            let gst_amount = taxable * sale.gst / 100.0;
            total += taxable + gst_amount;
            table.push_row(vec![
                sale.invoice_number.clone(),
                date.clone(),
                product_cell(item.product_name()),
                format_amount(taxable),
                format!("{}%", format_amount(sale.gst)),
                format_amount(gst_amount),
                format_amount(taxable + gst_amount),
            ]);
        }
    }

    table.set_total(total);
    non_empty(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metrics::fixtures::*;
    use chrono::NaiveDate;
    use contracts::shared::report::{DEFAULT_FOOTER, DEFAULT_TOTAL_LABEL};

    fn business() -> BusinessHeader {
        BusinessHeader {
            name: "Pen House".to_string(),
            address_line: "MG Road".to_string(),
        }
    }

    fn october() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 31).unwrap(),
        )
    }

    #[test]
    fn test_sales_report_rows_per_item() {
        let clock = clock(2026, 10, 18);
        let mut s = cash_sale("1", at(2026, 10, 5, 9), 70.0, 20.0);
        s.customer_name = "Asha".to_string();
        s.items = vec![item(Some("p1"), 2, 20.0, 12.0), item(None, 3, 10.0, 7.5)];

        let table = sales_report(&[s], &october(), &business(), &clock).unwrap();
        assert_eq!(table.title, "Sales_Report_2026-10-01_to_2026-10-31");
        assert_eq!(table.columns.len(), 8);
        assert_eq!(
            table.rows[0],
            vec!["INV-1", "05/10/2026", "Asha", "Product p1", "2", "20", "40", "16"]
        );
        assert_eq!(table.rows[1][3], "N/A");
        assert_eq!(table.rows[1][7], "7.5");
        assert_eq!(table.footer, DEFAULT_FOOTER);
        let total = table.total.clone().unwrap();
        assert_eq!(total.label, DEFAULT_TOTAL_LABEL);
        assert_eq!(total.amount, 70.0);
        assert_eq!(table.business.name, "Pen House");
    }

    #[test]
    fn test_empty_report_is_no_data() {
        let clock = clock(2026, 10, 18);
        // sale without items yields no rows
        let s = cash_sale("1", at(2026, 10, 5, 9), 70.0, 20.0);
        match sales_report(&[s], &october(), &business(), &clock) {
            Err(ReportError::NoData { title }) => assert!(title.starts_with("Sales_Report_")),
            other => panic!("expected NoData, got {:?}", other),
        }
        let err = expense_report(&[], &business(), &clock).unwrap_err();
        assert_eq!(err.to_string(), "No data found for selected period");
    }

    #[test]
    fn test_stock_status() {
        let products = vec![
            product("p1", "Pens", 5, 5, 10.0),
            product("p2", "Paper", 6, 5, 10.0),
        ];
        let table = stock_report(&products, &business()).unwrap();
        assert_eq!(table.rows[0][4], "LOW");
        assert_eq!(table.rows[1][4], "OK");
        assert_eq!(table.rows[1], vec!["Product p2", "Paper", "6", "5", "OK"]);
        assert_eq!(table.total, None);
    }

    #[test]
    fn test_gst_columns() {
        let clock = clock(2026, 10, 18);
        let mut s = cash_sale("7", at(2026, 10, 18, 4), 236.0, 0.0);
        s.gst = 18.0;
        s.items = vec![item(Some("p1"), 2, 100.0, 60.0)];

        let table = gst_report(&[s], &business(), &clock).unwrap();
        assert_eq!(
            table.rows[0],
            vec!["INV-7", "18/10/2026", "Product p1", "200", "18%", "36", "236"]
        );
        assert_eq!(table.total.map(|t| t.amount), Some(236.0));
    }

    #[test]
    fn test_profit_and_purchase_reports() {
        let clock = clock(2026, 10, 18);
        let mut s = cash_sale("2", at(2026, 10, 9, 9), 50.0, 0.0);
        s.items = vec![item(Some("p1"), 5, 10.0, 6.0)];
        let profit = profit_report(&[s], &business(), &clock).unwrap();
        assert_eq!(
            profit.rows[0],
            vec!["09/10/2026", "INV-2", "Product p1", "50", "30", "20"]
        );
        assert_eq!(profit.total.map(|t| t.amount), Some(20.0));

        let mut p = purchase("b1", at(2026, 10, 2, 9), "Paid", 90.0);
        p.items = vec![purchase_item(None, 3, 30.0)];
        let table = purchase_report(&[p], &business(), &clock).unwrap();
        assert_eq!(table.title, "Purchase_Report");
        assert_eq!(
            table.rows[0],
            vec!["BILL-b1", "02/10/2026", "Supplier", "N/A", "3", "30", "90"]
        );
        assert_eq!(table.total.map(|t| t.amount), Some(90.0));
    }

    #[test]
    fn test_dates_use_shop_calendar() {
        // 20:00 UTC is the next morning at +05:30
        let clock = crate::shared::metrics::BusinessClock::with_offset_minutes(330, at(2026, 10, 18, 12));
        let e = expense("e1", at(2026, 10, 17, 20), 15.0);
        let table = expense_report(&[e], &business(), &clock).unwrap();
        assert_eq!(table.rows[0], vec!["Expense e1", "General", "15", "18/10/2026"]);
        assert_eq!(table.total.map(|t| t.label), Some("Total".to_string()));
    }
}
