use super::calculator::{calculate_net_value, NetValue, NetValueInputs};

/// Element identifier of the formatted net value.
pub const RESULT_ELEMENT_ID: &str = "resultado_liquido";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    ContractValue,
    ProductCost,
    CommissionPct,
}

impl FormField {
    pub const ALL: [FormField; 3] = [
        FormField::ContractValue,
        FormField::ProductCost,
        FormField::CommissionPct,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            FormField::ContractValue => "valor_contrato",
            FormField::ProductCost => "custo_produto",
            FormField::CommissionPct => "percentual_comissao",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::ContractValue => "Contract value (R$)",
            FormField::ProductCost => "Product cost (R$)",
            FormField::CommissionPct => "Commission (%)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::CommissionPct => "0",
            _ => "0.00",
        }
    }

    pub fn step(&self) -> &'static str {
        match self {
            FormField::CommissionPct => "1",
            _ => "0.01",
        }
    }
}

/// Raw text of the three inputs, exactly as typed.
///
/// Only the raw values are kept; the net value is derived on demand so a
/// recalculation never sees anything from an earlier one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalculatorForm {
    contract_value: String,
    product_cost: String,
    commission_pct: String,
}

impl CalculatorForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::ContractValue => &self.contract_value,
            FormField::ProductCost => &self.product_cost,
            FormField::CommissionPct => &self.commission_pct,
        }
    }

    pub fn set(&mut self, field: FormField, raw: impl Into<String>) {
        let slot = match field {
            FormField::ContractValue => &mut self.contract_value,
            FormField::ProductCost => &mut self.product_cost,
            FormField::CommissionPct => &mut self.commission_pct,
        };
        *slot = raw.into();
    }

    pub fn inputs(&self) -> NetValueInputs {
        NetValueInputs::parse(&self.contract_value, &self.product_cost, &self.commission_pct)
    }

    pub fn net_value(&self) -> NetValue {
        calculate_net_value(&self.inputs())
    }
}
