use std::fmt;

use serde::{Deserialize, Serialize};

use crate::log;

/// One `=`-delimited split of a query segment.
///
/// Usually `[key, value]`, but a segment without `=` gives a single element and
/// a segment such as `a=1=2` gives three.
pub type ParameterPair = Vec<String>;

/// Ordered list of every segment of a query string, duplicates included.
///
/// Serializes as a plain array of arrays, e.g. `[["a","1"],["b","2"]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterList(Vec<ParameterPair>);

impl ParameterList {
  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, ParameterPair> {
    self.0.iter()
  }

  pub fn into_inner(self) -> Vec<ParameterPair> {
    self.0
  }

  /**
   * Value of the first pair named `key`. Returns None when the key is missing
   * or when that pair has no `=` at all.
   */
  pub fn get(&self, key: &str) -> Option<&str> {
    self
      .0
      .iter()
      .find(|pair| pair.first().map(String::as_str) == Some(key))
      .and_then(|pair| pair.get(1))
      .map(String::as_str)
  }

  /**
   * Values of every pair named `key`, in order of appearance.
   */
  pub fn get_all(&self, key: &str) -> Vec<&str> {
    self
      .0
      .iter()
      .filter(|pair| pair.first().map(String::as_str) == Some(key))
      .filter_map(|pair| pair.get(1).map(String::as_str))
      .collect()
  }

  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string(self)
  }
}

impl fmt::Display for ParameterList {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, pair) in self.0.iter().enumerate() {
      if i > 0 {
        f.write_str("&")?;
      }
      f.write_str(&pair.join("="))?;
    }

    Ok(())
  }
}

impl From<Vec<ParameterPair>> for ParameterList {
  fn from(pairs: Vec<ParameterPair>) -> Self {
    Self(pairs)
  }
}

impl IntoIterator for ParameterList {
  type Item = ParameterPair;
  type IntoIter = std::vec::IntoIter<ParameterPair>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl<'a> IntoIterator for &'a ParameterList {
  type Item = &'a ParameterPair;
  type IntoIter = std::slice::Iter<'a, ParameterPair>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}

/**
 * Strip the leading `?` (only one) from a location's search string.
 */
pub fn get_clean_query_string(search: &str) -> &str {
  search.strip_prefix('?').unwrap_or(search)
}

/**
 * Split a search string into its parameters, left to right.
 *
 * Nothing is decoded or deduplicated. An empty search string still yields one
 * segment, so the result is `[[""]]` rather than an empty list.
 */
pub fn get_parameters(search: &str) -> ParameterList {
  let params: ParameterList = get_clean_query_string(search)
    .split('&')
    .map(|segment| segment.split('=').map(str::to_string).collect())
    .collect::<Vec<ParameterPair>>()
    .into();

  log!("[UrlParams] Extracted {} segment(s) from {:?}", params.len(), search);

  params
}

/**
 * The `search` portion of a full URL: everything from the first `?` up to the
 * fragment, `?` included. Empty when there is no query or the query is empty.
 */
pub fn search_from_url(url: &str) -> &str {
  let without_fragment = match url.find('#') {
    Some(idx) => &url[..idx],
    None => url,
  };

  match without_fragment.find('?') {
    Some(idx) if idx + 1 < without_fragment.len() => &without_fragment[idx..],
    _ => "",
  }
}

pub fn get_parameters_from_url(url: &str) -> ParameterList {
  get_parameters(search_from_url(url))
}
