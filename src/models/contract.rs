use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Contract {
    pub id: String,
    #[serde(rename = "factionSymbol")]
    pub faction_symbol: String,
    #[serde(rename = "type")]
    pub contract_type: String,
    pub terms: ContractTerms,
    pub accepted: bool,
    pub fulfilled: bool,
    pub expiration: DateTime<Utc>,
    #[serde(rename = "deadlineToAccept", default)]
    pub deadline_to_accept: Option<DateTime<Utc>>,
}

impl Contract {
    pub fn total_payment(&self) -> i64 {
        self.terms.payment.on_accepted + self.terms.payment.on_fulfilled
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContractTerms {
    pub deadline: DateTime<Utc>,
    pub payment: Payment,
    #[serde(default)]
    pub deliver: Vec<DeliveryItem>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Payment {
    #[serde(rename = "onAccepted")]
    pub on_accepted: i64,
    #[serde(rename = "onFulfilled")]
    pub on_fulfilled: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DeliveryItem {
    #[serde(rename = "tradeSymbol")]
    pub trade_symbol: String,
    #[serde(rename = "destinationSymbol")]
    pub destination_symbol: String,
    #[serde(rename = "unitsRequired")]
    pub units_required: u32,
    #[serde(rename = "unitsFulfilled")]
    pub units_fulfilled: u32,
}

impl DeliveryItem {
    pub fn units_remaining(&self) -> u32 {
        self.units_required.saturating_sub(self.units_fulfilled)
    }
}
