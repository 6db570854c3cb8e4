//! Best-effort vendor/product extraction from device identifier strings.
//!
//! Identifier formats differ per platform. Two layouts are recognized:
//!
//! ```text
//! Xbox 360 Controller (STANDARD GAMEPAD Vendor: 045e Product: 028e)   colon style
//! 054c-0ce6-Wireless Controller                                      hyphen style
//! ```
//!
//! Parsers are tried in order and the first hit wins. Nothing here fails;
//! an unrecognized identifier simply yields `None`.

use tracing::debug;

/// Vendor and product ids as they appear in the identifier (hex text).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceIds {
    pub vendor: String,
    pub product: String,
}

type IdentifierParser = fn(&str) -> Option<DeviceIds>;

const PARSERS: &[IdentifierParser] = &[parse_colon_style, parse_hyphen_style];

pub fn parse_identifier(identifier: &str) -> Option<DeviceIds> {
    let ids = PARSERS.iter().find_map(|parse| parse(identifier));
    if ids.is_none() {
        debug!("No vendor/product ids in identifier {:?}", identifier);
    }
    ids
}

pub fn parse_colon_style(identifier: &str) -> Option<DeviceIds> {
    let mut pieces = identifier.split(':').skip(1);
    let vendor = pieces.next()?.split_whitespace().next()?;
    let product = pieces.next()?.split_whitespace().next()?.trim_end_matches(')');

    DeviceIds::checked(vendor, product)
}

pub fn parse_hyphen_style(identifier: &str) -> Option<DeviceIds> {
    let mut pieces = identifier.split('-');
    let vendor = pieces.next()?.trim();
    let product = pieces.next()?.trim();

    DeviceIds::checked(vendor, product)
}

impl DeviceIds {
    fn checked(vendor: &str, product: &str) -> Option<Self> {
        (is_hex_id(vendor) && is_hex_id(product)).then(|| Self {
            vendor: vendor.to_string(),
            product: product.to_string(),
        })
    }

    /// Numeric vendor id, when the text is a valid 16-bit hex number.
    pub fn vendor_u16(&self) -> Option<u16> {
        u16::from_str_radix(&self.vendor, 16).ok()
    }

    pub fn product_u16(&self) -> Option<u16> {
        u16::from_str_radix(&self.product, 16).ok()
    }
}

fn is_hex_id(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(vendor: &str, product: &str) -> Option<DeviceIds> {
        Some(DeviceIds {
            vendor: vendor.to_string(),
            product: product.to_string(),
        })
    }

    #[test]
    fn hyphen_style() {
        assert_eq!(
            parse_identifier("054c-0ce6-Wireless Controller"),
            ids("054c", "0ce6")
        );
    }

    #[test]
    fn colon_style() {
        assert_eq!(
            parse_identifier("Xbox 360 Controller (STANDARD GAMEPAD Vendor: 045e Product: 028e)"),
            ids("045e", "028e")
        );
    }

    #[test]
    fn colon_style_is_tried_first() {
        let id = "Pad (Vendor: 1234 Product: abcd) 0000-1111";
        assert_eq!(parse_identifier(id), ids("1234", "abcd"));
    }

    #[test]
    fn unrecognized_identifiers() {
        assert_eq!(parse_identifier(""), None);
        assert_eq!(parse_identifier("Xbox 360 Controller (XInput STANDARD GAMEPAD)"), None);
        assert_eq!(parse_identifier("Logitech Gamepad F310 - Wired"), None);
        assert_eq!(parse_identifier("Vendor: 045e"), None);
        assert_eq!(parse_colon_style("054c-0ce6-Wireless Controller"), None);
    }

    #[test]
    fn numeric_ids() {
        let parsed = parse_identifier("054c-0ce6-Wireless Controller").unwrap();
        assert_eq!(parsed.vendor_u16(), Some(0x054c));
        assert_eq!(parsed.product_u16(), Some(0x0ce6));

        let long = DeviceIds::checked("123456", "1").unwrap();
        assert_eq!(long.vendor_u16(), None);
    }
}
