//! Response formatting

use analyzer_core::PriceRecord;

/// Render a price record as a one-line human-readable answer
///
/// Template: `"<company> (<ticker>): $<price> <currency> (<change>)"`,
/// with the price always shown to exactly two decimal places. Pure.
pub fn format_price(record: &PriceRecord) -> String {
    format!(
        "{} ({}): ${:.2} {} ({})",
        record.company_name, record.ticker, record.price, record.currency, record.change
    )
}
