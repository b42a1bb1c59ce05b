//! Test fixtures for the payments table parser


/// Header row of the record files the fixtures imitate
pub const PAYMENTS_HEADER: &str = "date,time,sequence,amount,comment";

/// Two well-formed rows from the 2022-07-17 09:00:00 file
pub fn create_test_table() -> String {
    r#"date,time,sequence,amount,comment
20220717,090000,211,500,payment2
20220717,090000,212,600,payment3"#
        .to_string()
}

/// Build a table from data rows, prefixed with the standard header
pub fn table_with_rows(rows: &[&str]) -> String {
    let mut table = String::from(PAYMENTS_HEADER);
    for row in rows {
        table.push('\n');
        table.push_str(row);
    }
    table.push('\n');
    table
}
