use anyhow::{anyhow, Result};

/// Shortest accepted Solana address, in characters
pub const MIN_ADDRESS_LEN: usize = 32;
/// Longest accepted Solana address, in characters
pub const MAX_ADDRESS_LEN: usize = 44;

/// Base-58 alphabet: digits 1-9 and ASCII letters except `0`, `O`, `I`, `l`.
fn is_base58_char(c: char) -> bool {
    matches!(c, '1'..='9' | 'A'..='H' | 'J'..='N' | 'P'..='Z' | 'a'..='k' | 'm'..='z')
}

/// Checks that `address` has the shape of a Solana account address.
///
/// This is a shape check only. No checksum is verified, so a well-formed
/// address that does not exist on chain is accepted. The caller is expected
/// to have trimmed surrounding whitespace already.
pub fn validate_token_address(address: &str) -> Result<()> {
    if address.is_empty() {
        return Err(anyhow!("Token address cannot be empty"));
    }

    if let Some((position, c)) = address.char_indices().find(|&(_, c)| !is_base58_char(c)) {
        return Err(anyhow!(
            "Token address contains invalid character '{}' at position {}",
            c.escape_debug(),
            position
        ));
    }

    // Only ASCII remains at this point, so bytes == chars
    let len = address.len();
    if len < MIN_ADDRESS_LEN {
        return Err(anyhow!(
            "Token address is too short ({} characters, need at least {})",
            len,
            MIN_ADDRESS_LEN
        ));
    }

    if len > MAX_ADDRESS_LEN {
        return Err(anyhow!(
            "Token address is too long ({} characters, at most {})",
            len,
            MAX_ADDRESS_LEN
        ));
    }

    Ok(())
}

/// Boolean form of [`validate_token_address`].
pub fn is_valid_address(address: &str) -> bool {
    validate_token_address(address).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WSOL: &str = "So11111111111111111111111111111111111111112";

    #[test]
    fn test_validate_token_address_valid() {
        assert!(validate_token_address(WSOL).is_ok());
        assert!(validate_token_address("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v").is_ok());
        assert!(validate_token_address(&"1".repeat(32)).is_ok());
        assert!(validate_token_address(&"z".repeat(44)).is_ok());
    }

    #[test]
    fn test_validate_token_address_empty() {
        let err = validate_token_address("").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_validate_token_address_length_bounds() {
        let short = validate_token_address(&"a".repeat(31)).unwrap_err();
        assert!(short.to_string().contains("too short"));

        let long = validate_token_address(&"a".repeat(45)).unwrap_err();
        assert!(long.to_string().contains("too long"));
    }

    #[test]
    fn test_validate_token_address_reports_bad_character() {
        let mut address = "a".repeat(40);
        address.replace_range(7..8, "0");

        let err = validate_token_address(&address).unwrap_err().to_string();
        assert!(err.contains("'0'"));
        assert!(err.contains("position 7"));
    }

    #[test]
    fn test_is_valid_address_excluded_letters() {
        for c in ['0', 'O', 'I', 'l'] {
            let address = format!("{}{}", c, "a".repeat(40));
            assert!(!is_valid_address(&address), "should reject '{c}'");
        }
    }

    #[test]
    fn test_is_valid_address_untrimmed() {
        assert!(!is_valid_address(&format!(" {WSOL}")));
        assert!(!is_valid_address(&format!("{WSOL}\n")));
    }
}
