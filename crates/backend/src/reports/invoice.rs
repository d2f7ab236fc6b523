use contracts::domain::a002_sale::aggregate::Sale;
use contracts::domain::a003_purchase::aggregate::Purchase;
use contracts::shared::report::{BusinessHeader, ReportTable, ReportTotal};

use super::product_cell;
use crate::shared::format::{format_amount, format_report_date, format_rupees};
use crate::shared::metrics::BusinessClock;

const INVOICE_TOTAL_LABEL: &str = "Total Amount";

pub fn sales_invoice(sale: &Sale, business: &BusinessHeader, clock: &BusinessClock) -> ReportTable {
    let mut table = ReportTable::new("Sales Invoice", &["Product", "Qty", "Rate", "Amount"], business.clone());

    table.header_lines = vec![
        format!("Invoice No: {}", sale.invoice_number),
        format!("Customer: {}", sale.customer_name),
        format!("Payment Mode: {}", sale.payment_mode.as_str()),
        format!("Date: {}", format_report_date(clock.local_date(&sale.sale_date))),
    ];

    for item in &sale.items {
        table.push_row(vec![
            product_cell(item.product_name()),
            item.quantity.to_string(),
            format_amount(item.selling_price),
            format_amount(item.amount()),
        ]);
    }

    table.total = Some(ReportTotal {
        label: INVOICE_TOTAL_LABEL.to_string(),
        amount: sale.total_amount,
    });
    table.footer = "Thank you for shopping with us!".to_string();
    table
}

/// Rate and amount cells carry the rupee sign
pub fn purchase_invoice(
    purchase: &Purchase,
    business: &BusinessHeader,
    clock: &BusinessClock,
) -> ReportTable {
    let mut table = ReportTable::new(
        "Purchase Invoice",
        &["Product", "Qty", "Rate", "Amount"],
        business.clone(),
    );

    table.header_lines = vec![
        format!("Bill No: {}", purchase.bill_number),
        format!("Supplier: {}", purchase.supplier_name),
        format!("Date: {}", format_report_date(clock.local_date(&purchase.purchase_date))),
    ];

    for item in &purchase.items {
        table.push_row(vec![
            product_cell(item.product_name()),
            item.quantity.to_string(),
            format_rupees(item.cost_price),
            format_rupees(item.amount()),
        ]);
    }

    table.total = Some(ReportTotal {
        label: INVOICE_TOTAL_LABEL.to_string(),
        amount: purchase.total_amount,
    });
    table.footer = "This is a computer generated purchase invoice.".to_string();
    table
}
