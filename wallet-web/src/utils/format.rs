//! Formatting utilities for the wallet display.

/// Format an address by showing the first `prefix_len` and last
/// `suffix_len` characters.
///
/// Addresses shorter than the combined lengths are returned as-is.
/// Ethereum addresses are ASCII hex, so byte slicing is safe.
///
/// # Examples
///
/// ```rust
/// use wallet_web::utils::format::format_address;
///
/// let addr = "0xAbc0000000000000000000000000000000000001";
/// assert_eq!(format_address(addr, 6, 4), "0xAbc0...0001");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let len = address.len();
    if len <= prefix_len + suffix_len || prefix_len >= len || suffix_len >= len {
        return address.to_string();
    }
    format!("{}...{}", &address[..prefix_len], &address[len - suffix_len..])
}

/// [`format_address`] with the default 6-character prefix and 4-character
/// suffix used across the UI.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}
