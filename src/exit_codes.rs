//! Custom exit codes for the tenantctl application
//!
//! This module defines specific exit codes for different error conditions
//! to make scripting and automation easier.

/// Custom exit codes for tenantctl
///
/// These codes follow the BSD sysexits.h conventions where possible:
/// - 64-78: Standard exit codes from sysexits.h
/// - 100+: Custom application-specific codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum TenantctlExitCode {
    /// Command line usage error (64) - Invalid identifier, role or missing argument
    UsageError = exitcode::USAGE,

    /// Data format error (65) - Request or response could not be (de)serialized
    DataError = exitcode::DATAERR,

    /// Cannot open input file (66) - Policy file not found or unreadable
    NoInput = exitcode::NOINPUT,

    /// Temporary failure (75) - The request timed out
    TempFail = exitcode::TEMPFAIL,

    /// Configuration error (78) - Missing or malformed configuration
    ConfigError = exitcode::CONFIG,

    /// Authentication error (100) - The API key was rejected
    AuthError = 100,

    /// Network error (101) - Connection or communication issues
    NetworkError = 101,

    /// API error (102) - Remote API returned an error
    ApiError = 102,
}

impl TenantctlExitCode {
    /// Convert to numeric exit code
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<TenantctlExitCode> for i32 {
    fn from(code: TenantctlExitCode) -> Self {
        code.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sysexits_values() {
        assert_eq!(TenantctlExitCode::UsageError.code(), 64);
        assert_eq!(TenantctlExitCode::DataError.code(), 65);
        assert_eq!(TenantctlExitCode::TempFail.code(), 75);
        assert_eq!(i32::from(TenantctlExitCode::ConfigError), 78);
        assert_eq!(TenantctlExitCode::ApiError.code(), 102);
    }
}
