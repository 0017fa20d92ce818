use std::iter;

/// Locale conventions for rendering a monetary amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: &'static str,
    /// Placed between the symbol and the digits.
    pub symbol_separator: char,
    pub decimal_separator: char,
    pub group_separator: char,
    pub fraction_digits: u32,
}

impl CurrencyFormat {
    /// Brazilian real, pt-BR conventions.
    pub const BRL: CurrencyFormat = CurrencyFormat {
        symbol: "R$",
        symbol_separator: '\u{a0}',
        decimal_separator: ',',
        group_separator: '.',
        fraction_digits: 2,
    };

    pub fn zero(&self) -> String {
        self.format(0.0)
    }

    /// Renders `amount` rounded half away from zero to the minor unit.
    /// Rounding works on the shortest decimal form of the amount, so `1.005`
    /// becomes `1,01` even though its binary value sits just below the tie.
    /// Non-finite amounts render as zero.
    pub fn format(&self, amount: f64) -> String {
        let amount = if amount.is_finite() { amount } else { 0.0 };
        let (whole, fraction) = round_decimal(amount.abs(), self.fraction_digits as usize);
        let negative = amount < 0.0 && (whole != "0" || fraction.bytes().any(|b| b != b'0'));

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(self.symbol);
        out.push(self.symbol_separator);
        out.push_str(&group_digits(&whole, self.group_separator));
        if !fraction.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(&fraction);
        }
        out
    }

    /// Renders a fraction as a percentage with up to two decimals, using the
    /// locale's decimal separator (`0.125` -> `12,5%`).
    pub fn percent(&self, fraction: f64) -> String {
        let pct = if fraction.is_finite() { fraction * 100.0 } else { 0.0 };
        let fixed = format!("{pct:.2}");
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        let trimmed = if trimmed == "-0" { "0" } else { trimmed };
        format!("{}%", trimmed.replace('.', &self.decimal_separator.to_string()))
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::BRL
    }
}

/// Rounds the shortest decimal form of a non-negative `value` half away
/// from zero. Returns the integer digits and exactly `fraction_digits`
/// fraction digits.
fn round_decimal(value: f64, fraction_digits: usize) -> (String, String) {
    // `Display` for f64 never uses exponent notation.
    let repr = value.to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(iter::repeat(b'0')).take(fraction_digits))
        .collect();

    let round_digit = frac_part.as_bytes().get(fraction_digits).copied().unwrap_or(b'0');
    if round_digit >= b'5' {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - fraction_digits;
    let whole = digits[..split].iter().map(|&b| b as char).collect();
    let fraction = digits[split..].iter().map(|&b| b as char).collect();
    (whole, fraction)
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
