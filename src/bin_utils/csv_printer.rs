use std::io::Write;

use chrono::NaiveDate;
use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::account::{AccountId, AccountKind};

#[derive(Debug, Serialize)]
pub struct AccountSummary {
    pub id: AccountId,
    pub holder: String,
    pub kind: AccountKind,
    pub opened: NaiveDate,
    pub balance: Decimal,
}

pub fn print_accounts<W>(
    output: &mut W,
    accounts: impl Iterator<Item = AccountSummary>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for acc in accounts {
        if let Err(err) = writer.serialize(acc) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
