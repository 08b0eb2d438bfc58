mod layout;
mod distribution_chart;
mod stat_card;
mod wallet_button;

pub use layout::Layout;
pub use distribution_chart::DistributionChart;
pub use stat_card::StatCard;
pub use wallet_button::WalletButton;
