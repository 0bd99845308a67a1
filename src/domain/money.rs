use std::fmt;

/// Amounts are integer cents to keep balance arithmetic exact.
/// $12.50 = 1250 cents.
pub type Cents = i64;

/// Render cents as a dollar string.
/// Example: 1250 -> "$12.50", -700 -> "-$7.00"
pub fn format_dollars(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}

/// Parse a decimal amount string into cents.
/// Example: "20" -> 2000, "12.5" -> 1250, "12.50" -> 1250
/// At most two decimal places are accepted.
pub fn parse_amount(input: &str) -> Result<Cents, ParseAmountError> {
    let input = input.trim();
    let (negative, unsigned) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (units_str, fraction_str) = match unsigned.split_once('.') {
        Some((units, fraction)) => (units, fraction),
        None => (unsigned, ""),
    };

    if units_str.is_empty() && fraction_str.is_empty() {
        return Err(ParseAmountError::InvalidFormat);
    }
    if fraction_str.len() > 2 {
        return Err(ParseAmountError::TooManyDecimals);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str
            .parse()
            .map_err(|_| ParseAmountError::InvalidFormat)?
    };

    let fraction: i64 = match fraction_str.len() {
        0 => 0,
        // A single digit is tenths: "12.5" means 50 cents
        1 => {
            fraction_str
                .parse::<i64>()
                .map_err(|_| ParseAmountError::InvalidFormat)?
                * 10
        }
        _ => fraction_str
            .parse()
            .map_err(|_| ParseAmountError::InvalidFormat)?,
    };

    let cents = units * 100 + fraction;
    Ok(if negative { -cents } else { cents })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    InvalidFormat,
    TooManyDecimals,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::InvalidFormat => write!(f, "invalid amount format"),
            ParseAmountError::TooManyDecimals => {
                write!(f, "amounts support at most two decimal places")
            }
        }
    }
}

impl std::error::Error for ParseAmountError {}
