use mst_core::{AlgebraicSystem, ErrorInfo, MstError};

/// Parses a comma separated structural code into a packed bit pattern.
///
/// Whitespace around tokens is ignored. The empty string is the empty
/// structure. Tokens that are not decimal integers, and positions outside the
/// cycle, are rejected rather than skipped.
pub fn parse_code(system: &AlgebraicSystem, code: &str) -> Result<u64, MstError> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    let mut bits = 0u64;
    for (index, raw) in trimmed.split(',').enumerate() {
        let token = raw.trim();
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MstError::Code(
                ErrorInfo::new("code-token-malformed", "structural code token is not a position")
                    .with_context("token", token)
                    .with_context("index", index)
                    .with_context("code", code),
            ));
        }
        let position = token.parse::<u32>().ok().filter(|&p| p < u32::from(system.order()));
        match position {
            Some(position) => bits |= 1u64 << position,
            None => {
                return Err(MstError::Code(
                    ErrorInfo::new(
                        "code-position-out-of-range",
                        "structural code position lies outside the cycle",
                    )
                    .with_context("token", token)
                    .with_context("order", system.order())
                    .with_context("code", code),
                ))
            }
        }
    }
    Ok(bits)
}

/// Joins ascending positions into a structural code.
pub fn format_code(places: &[u8]) -> String {
    places
        .iter()
        .map(|place| place.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
