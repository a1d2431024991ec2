//! Split a page URL's query string into ordered `[key, value]` pairs.
//!
//! ```
//! let params = urlparams::get_parameters("?a=1&flag&a=2");
//! assert_eq!(params.to_json().unwrap(), r#"[["a","1"],["flag"],["a","2"]]"#);
//! assert_eq!(params.get("a"), Some("1"));
//! ```

#[doc(hidden)]
pub mod logger;
pub mod url_params;

pub use url_params::{
  get_clean_query_string, get_parameters, get_parameters_from_url, search_from_url, ParameterList,
  ParameterPair,
};
