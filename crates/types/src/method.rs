//! Payment method tags and the field metadata attached to them.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Closed set of payment channels an instruction can describe.
///
/// Declaration order is the order offered to users; the first variant is
/// the fallback used when a stored payload cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    BankTransfer,
    CreditCard,
    Paypal,
    Stripe,
    Cheque,
    MobileWallet,
    Crypto,
    Other,
}

impl PaymentMethod {
    /// Every method, in display order.
    pub const ALL: [PaymentMethod; 9] = [
        PaymentMethod::Cash,
        PaymentMethod::BankTransfer,
        PaymentMethod::CreditCard,
        PaymentMethod::Paypal,
        PaymentMethod::Stripe,
        PaymentMethod::Cheque,
        PaymentMethod::MobileWallet,
        PaymentMethod::Crypto,
        PaymentMethod::Other,
    ];

    /// Wire tag, e.g. `BANK_TRANSFER`
    pub fn as_tag(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "CASH",
            PaymentMethod::BankTransfer => "BANK_TRANSFER",
            PaymentMethod::CreditCard => "CREDIT_CARD",
            PaymentMethod::Paypal => "PAYPAL",
            PaymentMethod::Stripe => "STRIPE",
            PaymentMethod::Cheque => "CHEQUE",
            PaymentMethod::MobileWallet => "MOBILE_WALLET",
            PaymentMethod::Crypto => "CRYPTO",
            PaymentMethod::Other => "OTHER",
        }
    }

    /// Parse a wire tag. Matching is exact; unknown tags return `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.as_tag() == tag)
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// Returned when a string is not one of the known method tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown payment method: {0}")]
pub struct UnknownMethodTag(pub String);

impl FromStr for PaymentMethod {
    type Err = UnknownMethodTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownMethodTag(s.to_string()))
    }
}

/// Input kind of a dynamic field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    Text,
    Email,
    Phone,
    Date,
}

impl FieldType {
    /// HTML `<input type>` a renderer should use for this field
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Phone => "tel",
            FieldType::Date => "date",
        }
    }
}

/// Static description of one input field of a payment method form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Key under which the value is stored, unique within a method
    pub key: &'static str,

    /// Human readable label, also used in error messages
    pub label: &'static str,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    pub required: bool,
}

impl FieldDescriptor {
    pub const fn required(key: &'static str, label: &'static str, field_type: FieldType) -> Self {
        Self {
            key,
            label,
            field_type,
            required: true,
        }
    }

    pub const fn optional(key: &'static str, label: &'static str, field_type: FieldType) -> Self {
        Self {
            key,
            label,
            field_type,
            required: false,
        }
    }

    /// Label as shown next to the input, with a ` *` marker on required fields
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.to_string()
        }
    }
}
