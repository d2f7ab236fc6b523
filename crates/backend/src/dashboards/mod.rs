pub mod d400_capital_overview;
pub mod d401_alerts;
pub mod d402_home;
pub mod d403_analytics;
