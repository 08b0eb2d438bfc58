/// JSON-RPC endpoint for the Monad testnet. The NFT indexer shares its base URL.
pub const RPC_URL: &str = "https://monad-testnet.g.alchemy.com/v2/t8TcyfIGJYS3otYySM2t6";

/// Base URL of the leaderboard HTTP API.
pub const LEADERBOARD_API_URL: &str = "https://monad-leaderboard-theta.vercel.app/api";

/// Public leaderboard site opened by the "Break Monad" button.
pub const LEADERBOARD_SITE_URL: &str = "https://monad-leaderboard-theta.vercel.app/";

/// Symbol of the native asset.
pub const NATIVE_SYMBOL: &str = "MON";

/// Decimals of the native asset.
pub const NATIVE_DECIMALS: u8 = 18;

/// Decimals assumed for a token whose balance has not been read yet.
pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;

/// Local storage key holding the user-added tokens.
pub const CUSTOM_TOKENS_KEY: &str = "monad_custom_tokens";

/// Fractional digits kept on every normalized balance.
pub const DISPLAY_PRECISION: u32 = 5;

/// Fractional digits shown on percentages.
pub const PERCENT_PRECISION: usize = 2;

/// Tokens tracked out of the box, in display order.
pub const DEFAULT_TOKENS: [(&str, &str); 8] = [
    ("DAK", "0x0F0BDEbF0F83cD1EE3974779Bcb7315f9808c714"),
    ("CHOG", "0xE0590015A873bF326bd645c3E1266d4db41C4E6B"),
    ("YAKI", "0xfe140e1dCe99Be9F4F15d657CD9b7BF622270C50"),
    ("CULT", "0xAbF39775d23c5B6C0782f3e35B51288bdaf946e2"),
    ("GMONAD", "0x93C33B999230eE117863a82889Fdb342cd6D5C64"),
    ("aprMON", "0xb2f82D0f38dc453D596Ad40A37799446Cc89274A"),
    ("shMON", "0x1b4Cb47622705F0F67b6B18bBD1cB1a91fc77d37"),
    ("sMON", "0xe1d2439b75fb9746E7Bc6cB777Ae10AA7f7ef9c5"),
];

/// Chart colours, assigned by position modulo length.
pub const CHART_COLORS: [&str; 8] = [
    "#8b5cf6", "#f97316", "#10b981", "#ef4444", "#6366f1", "#14b8a6", "#f43f5e", "#eab308",
];

// Trivia
pub const ROUND_SECONDS: u32 = 15;
pub const REVEAL_DELAY_MS: u32 = 500;
pub const OPTIONS_PER_ITEM: usize = 4;
