//! Pure helper functions.
//!
//! Every file below is a self-contained source group: it only refers to its
//! siblings through `super::`, so the build tool can embed the files verbatim
//! as inline modules of the generated distributable.

pub mod collections;
pub mod dates;
pub mod error;
pub mod namespace;
pub mod numbers;
pub mod random;
pub mod strings;
pub mod validation;
pub mod value;

pub use collections::{hash_to_object, map_collection, unique_values, unique_values_by};
pub use dates::try_parse_date;
pub use error::HelperError;
pub use namespace::{Binding, ImportError, ImportPolicy, ImportRequest, Invoke, Namespace};
pub use numbers::{is_prime, number_between, pad_left};
pub use random::{random_string, unique_random_values};
pub use strings::{
    Splitter, TokenMap, char_at_is_lower_case, char_at_is_upper_case, cleanup_whitespace,
    interpolate, repeat_string, split_and_clean, truncate_string,
};
pub use validation::{check_email_validity, check_postal_code, regex_for_diacriticals};
pub use value::{Callback, Value};
