//! Test fixtures shared by the deduplicator test suites

/// Standard test data and fixtures
pub struct TestFixtures;

#[allow(dead_code)]
impl TestFixtures {
    pub const FILE_NAME: &'static str = "tokens.txt";

    /// Token address list with repeats
    pub const TOKEN_LIST: &'static str = "\
0x6b175474e89094c44da98b954eedeac495271d0f
0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48
0x6b175474e89094c44da98b954eedeac495271d0f
0xdac17f958d2ee523a2206206994597c13d831ec7
0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48
";

    pub const TOKEN_LIST_UNIQUE: &'static str = "\
0x6b175474e89094c44da98b954eedeac495271d0f
0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48
0xdac17f958d2ee523a2206206994597c13d831ec7
";

    /// The five-line scenario: a, b, a, c, b
    pub fn scenario_lines() -> Vec<&'static str> {
        vec!["a\n", "b\n", "a\n", "c\n", "b\n"]
    }
}
