//! Line codec for the expense file
//!
//! Each expense is one line: `date, category, amount`. Fields are joined with
//! `", "` and nothing is quoted or escaped, so a category that itself contains
//! `", "` produces a line that will not decode. Everything that knows about
//! this layout lives here.

use crate::models::{parse_date, Amount, Expense};

/// Field separator
pub const DELIMITER: &str = ", ";

/// Encode an expense as a line (without the trailing newline)
pub fn encode_line(expense: &Expense) -> String {
    format!(
        "{}{}{}{}{}",
        expense.date_string(),
        DELIMITER,
        expense.category,
        DELIMITER,
        expense.amount
    )
}

/// Decode a line into an expense
///
/// Returns a human-readable reason on failure; the caller attaches the line
/// number.
pub fn decode_line(line: &str) -> Result<Expense, String> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();

    let [date, category, amount] = fields.as_slice() else {
        return Err(format!("expected 3 fields, found {}", fields.len()));
    };

    let date = parse_date(date).map_err(|_| format!("invalid date '{}'", date))?;
    let amount = Amount::parse(amount).map_err(|e| e.to_string())?;

    Ok(Expense::new(date, *category, amount))
}

/// Encode a sequence of expenses as file contents, one line each
pub fn encode_all(expenses: &[Expense]) -> String {
    let mut output = String::new();
    for expense in expenses {
        output.push_str(&encode_line(expense));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(category: &str, amount: u64) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
            category,
            Amount::new(amount),
        )
    }

    #[test]
    fn test_encode_line() {
        assert_eq!(encode_line(&expense("Groceries", 450)), "07-03-2024, Groceries, 450");
    }

    #[test]
    fn test_decode_line() {
        let decoded = decode_line("07-03-2024, Groceries, 450").unwrap();
        assert_eq!(decoded, expense("Groceries", 450));
    }

    #[test]
    fn test_decode_keeps_category_text_verbatim() {
        let decoded = decode_line("07-03-2024, Eating out & bars, 1200").unwrap();
        assert_eq!(decoded.category, "Eating out & bars");
    }

    #[test]
    fn test_delimiter_inside_category_does_not_decode() {
        let line = encode_line(&expense("Rent, March", 9000));
        assert_eq!(line, "07-03-2024, Rent, March, 9000");

        let reason = decode_line(&line).unwrap_err();
        assert_eq!(reason, "expected 3 fields, found 4");
    }

    #[test]
    fn test_decode_rejects_bad_fields() {
        assert!(decode_line("2024-03-07, Food, 10")
            .unwrap_err()
            .contains("invalid date"));
        assert!(decode_line("07-03-2024, Food, ten").is_err());
        assert!(decode_line("07-03-2024,Food,10").is_err());
    }

    #[test]
    fn test_encode_all() {
        let contents = encode_all(&[expense("A", 1), expense("B", 2)]);
        assert_eq!(contents, "07-03-2024, A, 1\n07-03-2024, B, 2\n");
        assert_eq!(encode_all(&[]), "");
    }
}
