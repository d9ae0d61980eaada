pub mod dict;
pub mod settings;
pub mod suggest;
pub mod unicode;
pub mod user_dict;
