//! Net value arithmetic for a contract after commission and product cost.

use super::currency::CurrencyFormat;

/// The three form values after lenient parsing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NetValueInputs {
    pub contract_value: f64,
    pub product_cost: f64,
    /// Commission as a percentage (10 means 10%).
    pub commission_pct: f64,
}

impl NetValueInputs {
    pub fn parse(contract_value: &str, product_cost: &str, commission_pct: &str) -> Self {
        Self {
            contract_value: parse_amount(contract_value),
            product_cost: parse_amount(product_cost),
            commission_pct: parse_amount(commission_pct),
        }
    }

    pub fn commission_rate(&self) -> f64 {
        percent_to_fraction(self.commission_pct)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NetValueBreakdown {
    pub contract_value: f64,
    pub product_cost: f64,
    pub commission_rate: f64,
    pub commission_amount: f64,
    pub net_value: f64,
}

/// Result of a recalculation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NetValue {
    /// Contract value is zero; nothing else is computed.
    Empty,
    Computed(NetValueBreakdown),
}

impl NetValue {
    /// Text written to the output element.
    pub fn formatted(&self, currency: &CurrencyFormat) -> String {
        match self {
            NetValue::Empty => currency.zero(),
            NetValue::Computed(breakdown) => currency.format(breakdown.net_value),
        }
    }

    pub fn breakdown(&self) -> Option<&NetValueBreakdown> {
        match self {
            NetValue::Empty => None,
            NetValue::Computed(breakdown) => Some(breakdown),
        }
    }
}

pub fn calculate_net_value(inputs: &NetValueInputs) -> NetValue {
    if inputs.contract_value == 0.0 {
        return NetValue::Empty;
    }

    let commission_rate = inputs.commission_rate();
    let commission_amount = inputs.contract_value * commission_rate;
    let net_value = inputs.contract_value - commission_amount - inputs.product_cost;

    NetValue::Computed(NetValueBreakdown {
        contract_value: inputs.contract_value,
        product_cost: inputs.product_cost,
        commission_rate,
        commission_amount,
        net_value,
    })
}

pub fn percent_to_fraction(pct: f64) -> f64 {
    finite_or_zero(pct / 100.0)
}

/// Parses the longest numeric prefix of `raw`, ignoring leading whitespace
/// and anything after the number. Input without a numeric prefix, and
/// non-finite results, become zero.
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let end = numeric_prefix_len(trimmed.as_bytes());
    if end == 0 {
        return 0.0;
    }
    trimmed[..end]
        .parse::<f64>()
        .map(finite_or_zero)
        .unwrap_or(0.0)
}

fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if frac_digits > 0 || int_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp.min(bytes.len())..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    pos
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn finite_or_zero(value: f64) -> f64 {
    // `-0.0 == 0.0`, so this also normalises negative zero.
    if value.is_finite() && value != 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn computed(contract: &str, cost: &str, pct: &str) -> NetValueBreakdown {
        match calculate_net_value(&NetValueInputs::parse(contract, cost, pct)) {
            NetValue::Computed(breakdown) => breakdown,
            NetValue::Empty => panic!("expected a computed net value"),
        }
    }

    #[test]
    fn contract_with_cost_and_commission() {
        let breakdown = computed("1000", "100", "10");
        assert_eq!(breakdown.commission_rate, 0.1);
        assert_eq!(breakdown.commission_amount, 100.0);
        assert_eq!(breakdown.net_value, 800.0);
    }

    #[test]
    fn zero_contract_short_circuits() {
        let inputs = NetValueInputs::parse("0", "250", "15");
        assert_eq!(calculate_net_value(&inputs), NetValue::Empty);
        assert_eq!(
            calculate_net_value(&inputs).formatted(&CurrencyFormat::BRL),
            "R$\u{a0}0,00"
        );
        assert!(calculate_net_value(&inputs).breakdown().is_none());
    }

    #[test]
    fn non_numeric_fields_count_as_zero() {
        let breakdown = computed("500", "abc", "");
        assert_eq!(breakdown.product_cost, 0.0);
        assert_eq!(breakdown.commission_amount, 0.0);
        assert_eq!(breakdown.net_value, 500.0);

        let inputs = NetValueInputs::parse("n/a", "10", "10");
        assert_eq!(calculate_net_value(&inputs), NetValue::Empty);
    }

    #[test]
    fn cost_above_contract_goes_negative() {
        assert_eq!(computed("100", "150", "0").net_value, -50.0);
    }

    #[test]
    fn commission_above_hundred_percent_is_accepted() {
        let breakdown = computed("200", "0", "150");
        assert_eq!(breakdown.commission_amount, 300.0);
        assert_eq!(breakdown.net_value, -100.0);
    }

    #[test]
    fn parse_amount_takes_numeric_prefix() {
        assert_eq!(parse_amount("12abc"), 12.0);
        assert_eq!(parse_amount("  7.5 "), 7.5);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("5."), 5.0);
        assert_eq!(parse_amount("-3.25"), -3.25);
        assert_eq!(parse_amount("+4"), 4.0);
        assert_eq!(parse_amount("1e3"), 1000.0);
        assert_eq!(parse_amount("2E-2x"), 0.02);
        assert_eq!(parse_amount("3e"), 3.0);
        assert_eq!(parse_amount("3e+"), 3.0);
        assert_eq!(parse_amount("1000,50"), 1000.0);
    }

    #[test]
    fn parse_amount_defaults_to_zero() {
        for raw in ["", "   ", "abc", "-", ".", "-.", "e5", "Infinity", "NaN", "1e999"] {
            assert_eq!(parse_amount(raw), 0.0, "input {raw:?}");
        }
        assert!(parse_amount("-0").is_sign_positive());
    }

    proptest! {
        #[test]
        fn zero_contract_ignores_other_fields(cost in ".*", pct in ".*") {
            let inputs = NetValueInputs::parse("0", &cost, &pct);
            prop_assert_eq!(calculate_net_value(&inputs), NetValue::Empty);
        }

        #[test]
        fn parse_amount_never_yields_non_finite(raw in ".*") {
            prop_assert!(parse_amount(&raw).is_finite());
        }

        #[test]
        fn net_matches_formula(
            contract in -1.0e9f64..1.0e9,
            cost in -1.0e9f64..1.0e9,
            pct in -200.0f64..200.0,
        ) {
            prop_assume!(contract != 0.0);
            let inputs = NetValueInputs { contract_value: contract, product_cost: cost, commission_pct: pct };
            let expected = contract - contract * (pct / 100.0) - cost;
            let net = calculate_net_value(&inputs);
            prop_assert_eq!(net.breakdown().map(|b| b.net_value), Some(expected));
        }
    }
}
