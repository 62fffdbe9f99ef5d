pub mod prelude;

pub mod ad;
pub mod category_data;
pub mod user_details;
