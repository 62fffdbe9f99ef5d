pub use super::ad::Entity as Ad;
pub use super::category_data::Entity as CategoryData;
pub use super::user_details::Entity as UserDetails;
