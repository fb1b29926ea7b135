//! Service-specific tests
//!
//! Each service has its own test file; all of them work inside
//! throwaway `tempfile` directories.
