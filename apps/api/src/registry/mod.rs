// Resource registry: users, portfolios and their sections.
// Users and portfolios live in `PortfolioStore`; sections are validated and echoed only.

pub mod handlers;
pub mod store;

pub use store::PortfolioStore;

pub const USER_EXISTS: &str = "이미 존재하는 사용자입니다.";
pub const PORTFOLIO_EXISTS: &str = "이미 존재하는 포트폴리오입니다.";
pub const PORTFOLIO_NOT_FOUND: &str = "포트폴리오를 찾을 수 없습니다.";
