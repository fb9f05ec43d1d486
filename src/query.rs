//! Query string encoding.
//!
//! Parameters are anything that iterates as `(key, value)` pairs: a
//! `HashMap<String, String>`, a `BTreeMap`, a slice of tuples or an
//! [`OrderQuery`]. Values only need to be [`Display`], so numbers can be passed
//! without converting them first. Pairs are encoded in iteration order with
//! `application/x-www-form-urlencoded` rules (the same rules browsers use for
//! `URLSearchParams`, so a space becomes `+`).
use std::fmt::Display;
use url::form_urlencoded;

/// Encodes `params` as `k1=v1&k2=v2`. An empty input gives an empty string.
pub fn encode<I, K, V>(params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    let mut ser = form_urlencoded::Serializer::new(String::new());
    for (k, v) in params {
        ser.append_pair(k.as_ref(), &v.to_string());
    }
    ser.finish()
}

/// Listing filters understood by the orders service.
///
/// `previous_token` and `next_token` are opaque strings returned in an
/// [`Orders`](crate::models::Orders) page. Unset fields are left out of the
/// query and the service applies its own defaults (offset 0, limit 10).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQuery {
    pub previous_token: Option<String>,
    pub next_token: Option<String>,
    pub offset: Option<i32>,
    pub limit: Option<i32>,
}

impl OrderQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous_token<S: Into<String>>(mut self, token: S) -> Self {
        self.previous_token = Some(token.into());
        self
    }

    pub fn next_token<S: Into<String>>(mut self, token: S) -> Self {
        self.next_token = Some(token.into());
        self
    }

    pub fn offset(mut self, offset: i32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The set fields as `(name, value)` pairs, in a fixed order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(t) = &self.previous_token {
            pairs.push(("previous_token", t.clone()));
        }
        if let Some(t) = &self.next_token {
            pairs.push(("next_token", t.clone()));
        }
        if let Some(o) = self.offset {
            pairs.push(("offset", o.to_string()));
        }
        if let Some(l) = self.limit {
            pairs.push(("limit", l.to_string()));
        }
        pairs
    }
}

impl<'a> IntoIterator for &'a OrderQuery {
    type Item = (&'static str, String);
    type IntoIter = std::vec::IntoIter<(&'static str, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_pairs().into_iter()
    }
}
