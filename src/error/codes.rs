/// Error code registry for Pocketkit
///
/// Error codes are organized by category:
/// - 3000-3999: Input file errors
/// - 7000-7999: Validation errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Input file errors (3000-3999)
    pub const INPUT_IO_ERROR: u16 = 3001;
    pub const INPUT_PERMISSION_DENIED: u16 = 3002;
    pub const INPUT_NOT_FOUND: u16 = 3004;
    pub const INPUT_INVALID_ENCODING: u16 = 3006;
    pub const INPUT_NO_VALID_ENTRIES: u16 = 3013;

    // Validation errors (7000-7999)
    pub const VALIDATION_INVALID_INPUT: u16 = 7001;
    pub const VALIDATION_OUT_OF_RANGE: u16 = 7002;

    // Other errors (9000-9999)
    pub const OTHER_GENERIC: u16 = 9000;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_ranges() {
        assert!((3000..4000).contains(&ErrorCode::INPUT_NO_VALID_ENTRIES));
        assert!((7000..8000).contains(&ErrorCode::VALIDATION_OUT_OF_RANGE));
    }
}
