//! Field schema for each payment method.
//!
//! Tables are hand-authored; their order is the on-screen order of the form.

use payinstr_types::{
    FieldDescriptor,
    FieldType::{Date, Email, Phone, Text},
    PaymentMethod,
};

const NOTES: FieldDescriptor = FieldDescriptor::optional("notes", "Notes", Text);
const TRANSACTION_ID: FieldDescriptor =
    FieldDescriptor::required("transaction_id", "Transaction ID", Text);
const BANK_NAME: FieldDescriptor = FieldDescriptor::required("bank_name", "Bank Name", Text);

const CASH: &[FieldDescriptor] = &[FieldDescriptor::optional(
    "notes",
    "Notes (Optional)",
    Text,
)];

const BANK_TRANSFER: &[FieldDescriptor] = &[
    BANK_NAME,
    FieldDescriptor::required("account_no", "Account Number", Text),
    FieldDescriptor::required("account_holder", "Account Holder Name", Text),
    FieldDescriptor::optional("swift", "SWIFT Code", Text),
    FieldDescriptor::optional("reference", "Reference", Text),
    NOTES,
];

const CREDIT_CARD: &[FieldDescriptor] = &[
    FieldDescriptor::required("card_type", "Card Type (VISA, MASTERCARD)", Text),
    FieldDescriptor::required("last4", "Last 4 Digits", Text),
    TRANSACTION_ID,
    NOTES,
];

const PAYPAL: &[FieldDescriptor] = &[
    FieldDescriptor::required("paypal_email", "PayPal Email", Email),
    TRANSACTION_ID,
    NOTES,
];

const STRIPE: &[FieldDescriptor] = &[
    FieldDescriptor::required("stripe_email", "Stripe Email", Email),
    FieldDescriptor::required("payment_intent_id", "Payment Intent ID", Text),
    NOTES,
];

const CHEQUE: &[FieldDescriptor] = &[
    BANK_NAME,
    FieldDescriptor::required("cheque_no", "Cheque Number", Text),
    FieldDescriptor::required("date", "Date", Date),
    NOTES,
];

const MOBILE_WALLET: &[FieldDescriptor] = &[
    FieldDescriptor::required("wallet_name", "Wallet Name", Text),
    FieldDescriptor::required("wallet_number", "Wallet Number", Phone),
    TRANSACTION_ID,
    NOTES,
];

const CRYPTO: &[FieldDescriptor] = &[
    FieldDescriptor::required("crypto_currency", "Cryptocurrency", Text),
    FieldDescriptor::required("wallet_address", "Wallet Address", Text),
    FieldDescriptor::optional("transaction_hash", "Transaction Hash", Text),
    FieldDescriptor::required("network", "Network", Text),
    NOTES,
];

const OTHER: &[FieldDescriptor] = &[
    FieldDescriptor::required("description", "Payment Method Description", Text),
    NOTES,
];

/// Ordered field descriptors for `method`
pub fn fields_for(method: PaymentMethod) -> &'static [FieldDescriptor] {
    match method {
        PaymentMethod::Cash => CASH,
        PaymentMethod::BankTransfer => BANK_TRANSFER,
        PaymentMethod::CreditCard => CREDIT_CARD,
        PaymentMethod::Paypal => PAYPAL,
        PaymentMethod::Stripe => STRIPE,
        PaymentMethod::Cheque => CHEQUE,
        PaymentMethod::MobileWallet => MOBILE_WALLET,
        PaymentMethod::Crypto => CRYPTO,
        PaymentMethod::Other => OTHER,
    }
}

/// Ordered field descriptors for a raw method tag.
///
/// Unknown tags have no fields.
pub fn fields_for_tag(tag: &str) -> &'static [FieldDescriptor] {
    PaymentMethod::from_tag(tag).map(fields_for).unwrap_or(&[])
}

/// Descriptor for `key` within `method`, if the method declares it
pub fn field(method: PaymentMethod, key: &str) -> Option<&'static FieldDescriptor> {
    fields_for(method).iter().find(|f| f.key == key)
}

/// Field keys of `method`, in order
pub fn keys(method: PaymentMethod) -> impl Iterator<Item = &'static str> {
    fields_for(method).iter().map(|f| f.key)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_every_method_has_unique_fields() {
        for method in PaymentMethod::ALL {
            let fields = fields_for(method);
            assert!(!fields.is_empty(), "{method} has no fields");

            let unique: HashSet<_> = fields.iter().map(|f| f.key).collect();
            assert_eq!(unique.len(), fields.len(), "{method} has duplicate keys");
        }
    }

    #[test]
    fn test_bank_transfer_order() {
        let keys: Vec<_> = keys(PaymentMethod::BankTransfer).collect();
        assert_eq!(
            keys,
            [
                "bank_name",
                "account_no",
                "account_holder",
                "swift",
                "reference",
                "notes"
            ]
        );

        let required: Vec<_> = fields_for(PaymentMethod::BankTransfer)
            .iter()
            .filter(|f| f.required)
            .map(|f| f.key)
            .collect();
        assert_eq!(required, ["bank_name", "account_no", "account_holder"]);
    }

    #[test]
    fn test_typed_fields() {
        assert_eq!(
            field(PaymentMethod::Paypal, "paypal_email").map(|f| f.field_type),
            Some(Email)
        );
        assert_eq!(
            field(PaymentMethod::Stripe, "stripe_email").map(|f| f.field_type),
            Some(Email)
        );
        assert_eq!(
            field(PaymentMethod::MobileWallet, "wallet_number").map(|f| f.field_type),
            Some(Phone)
        );
        assert_eq!(
            field(PaymentMethod::Cheque, "date").map(|f| f.field_type),
            Some(Date)
        );
    }

    #[test]
    fn test_cash_is_minimal() {
        let fields = fields_for(PaymentMethod::Cash);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].key, "notes");
        assert_eq!(fields[0].label, "Notes (Optional)");
        assert!(!fields[0].required);
    }

    #[test]
    fn test_crypto_hash_is_optional() {
        let hash = field(PaymentMethod::Crypto, "transaction_hash").unwrap();
        assert!(!hash.required);
        assert!(field(PaymentMethod::Crypto, "network").unwrap().required);
    }

    #[test]
    fn test_tag_lookup() {
        assert_eq!(
            fields_for_tag("BANK_TRANSFER"),
            fields_for(PaymentMethod::BankTransfer)
        );
        assert!(fields_for_tag("UNKNOWN_TAG").is_empty());
        assert!(fields_for_tag("").is_empty());
    }

    #[test]
    fn test_field_lookup_misses() {
        assert!(field(PaymentMethod::Cash, "bank_name").is_none());
        assert!(field(PaymentMethod::BankTransfer, "paypal_email").is_none());
    }
}
