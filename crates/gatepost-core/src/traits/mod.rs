mod screener;

pub use screener::IScreener;
