pub mod banners;
pub mod faqs;
pub mod pages;
