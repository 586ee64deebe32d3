pub mod rates;

pub use rates::rates_page;
