pub mod closeness_chart;
pub mod toast;

pub use closeness_chart::closeness_chart;
pub use toast::toast_stack;
