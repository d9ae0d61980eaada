/// Print the error and exit with status 1.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}
pub(crate) use die;

pub mod config_ops;
pub mod dict_ops;
pub mod suggest_ops;
pub mod user_dict_ops;
