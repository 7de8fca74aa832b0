pub mod a001_vendor;
pub mod a002_user;
pub mod a003_brand;
pub mod a004_category;
pub mod a005_product;
pub mod a006_order;
pub mod a007_quotation;
pub mod a008_cancel_reason;
pub mod a009_cms;
pub mod a010_service_lead;
