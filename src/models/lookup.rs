use lazy_static::lazy_static;
use std::collections::HashMap;

const ETISALAT: &str = "e& (Etisalat)";
const DU: &str = "du";

lazy_static! {
    /// UAE bank codes as they appear at positions 5-7 of an IBAN.
    static ref BANKS: HashMap<&'static str, &'static str> = {
        let mut banks = HashMap::new();
        banks.insert("033", "Emirates NBD");
        banks.insert("035", "First Abu Dhabi Bank (FAB)");
        banks.insert("030", "Abu Dhabi Commercial Bank (ADCB)");
        banks.insert("020", "Mashreq Bank");
        banks.insert("040", "Dubai Islamic Bank (DIB)");
        banks.insert("023", "Commercial Bank of Dubai (CBD)");
        banks.insert("032", "Emirates Islamic Bank");
        banks.insert("025", "Abu Dhabi Islamic Bank (ADIB)");
        banks.insert("045", "Sharjah Islamic Bank");
        banks.insert("065", "Ajman Bank");
        banks.insert("060", "United Arab Bank (UAB)");
        banks.insert("010", "National Bank of Fujairah (NBF)");
        banks.insert("012", "Invest Bank");
        banks.insert("016", "National Bank of Ras Al-Khaimah (RAKBANK)");
        banks.insert("046", "Bank of Sharjah");
        banks.insert("057", "Citibank UAE");
        banks.insert("031", "HSBC UAE");
        banks.insert("022", "Standard Chartered UAE");
        banks.insert("048", "Lloyds Bank UAE");
        banks.insert("052", "Barclays UAE");
        banks
    };

    /// Mobile dialling prefixes (with trunk zero) and their carrier.
    static ref MOBILE_PREFIXES: HashMap<&'static str, &'static str> = {
        let mut prefixes = HashMap::new();
        for prefix in ["050", "052", "054", "056", "057"] {
            prefixes.insert(prefix, ETISALAT);
        }
        for prefix in ["055", "058", "059"] {
            prefixes.insert(prefix, DU);
        }
        prefixes
    };
}

/// Resolves a 3-digit IBAN bank code to the bank's name.
pub fn bank_name(bank_code: &str) -> Option<&'static str> {
    BANKS.get(bank_code).copied()
}

/// Whether the bank code appears in the table. An IBAN with an unlisted bank
/// code is still valid; it just carries no bank name.
pub fn is_known_bank(bank_code: &str) -> bool {
    BANKS.contains_key(bank_code)
}

/// Resolves a 3-digit mobile prefix such as `050` to its carrier.
pub fn carrier(prefix: &str) -> Option<&'static str> {
    MOBILE_PREFIXES.get(prefix).copied()
}

/// Whether `prefix` (`0` plus the first two local digits) belongs to a carrier.
pub fn is_valid_mobile_prefix(prefix: &str) -> bool {
    MOBILE_PREFIXES.contains_key(prefix)
}
