//! WhatsApp deep links for purchase, renewal and upgrade requests

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::packages::Tier;

const WHATSAPP_BASE: &str = "https://wa.me";

/// Characters left alone by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Why the user is contacting the seller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactReason {
    Purchase,
    Renewal,
    Upgrade { from: Tier, to: Tier, price: u64 },
}

/// Pre-filled message text for a contact reason.
pub fn message(reason: &ContactReason, device_id: &str) -> String {
    match reason {
        ContactReason::Purchase => format!(
            "Halo Admin, saya ingin membeli lisensi Adzan App. ID Perangkat: {device_id}"
        ),
        ContactReason::Renewal => format!(
            "Halo Admin, saya ingin perpanjang lisensi Adzan App. ID Perangkat: {device_id}"
        ),
        ContactReason::Upgrade { from, to, price } => format!(
            "Halo Admin, saya ingin upgrade paket Adzan App.\n\n\
             Device ID: {device_id}\n\
             Paket Saat Ini: {from}\n\
             Paket Tujuan: {to}\n\
             Harga Upgrade: {}\n\n\
             Mohon kirimkan kode lisensi baru untuk paket {to}",
            format_rupiah(*price)
        ),
    }
}

/// `https://wa.me/<number>?text=<message>`
pub fn whatsapp_link(number: &str, text: &str) -> String {
    format!("{WHATSAPP_BASE}/{number}?text={}", encode_component(text))
}

pub fn link_for(number: &str, reason: &ContactReason, device_id: &str) -> String {
    whatsapp_link(number, &message(reason, device_id))
}

/// `Rp 1.420.000`
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {grouped}")
}

fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_spaces_newlines_and_colons() {
        assert_eq!(encode_component("a b\nc:d"), "a%20b%0Ac%3Ad");
        assert_eq!(encode_component("DEV-ABC_1.2"), "DEV-ABC_1.2");
        assert_eq!(encode_component("(a)!~*'"), "(a)!~*'");
        assert_eq!(encode_component("a&b=c?"), "a%26b%3Dc%3F");
    }

    #[test]
    fn encodes_multibyte_utf8() {
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn rupiah_grouping() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(999), "Rp 999");
        assert_eq!(format_rupiah(50_000), "Rp 50.000");
        assert_eq!(format_rupiah(1_420_000), "Rp 1.420.000");
    }
}
