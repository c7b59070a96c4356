//! Ordered request parameters and their form encoding.
//!
//! Every Web API call sends an ordered set of key/value pairs as a
//! percent-encoded form body. The token is always the final pair, appended
//! exactly once just before encoding.

use url::form_urlencoded;

/// Ordered key/value parameter set for one API call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    pairs: Vec<(String, String)>,
}

impl RequestParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a parameter
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Append a parameter, builder style
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Append a parameter only when a value is present
    pub fn opt_param(mut self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Append the token as the final pair
    ///
    /// Must be called at most once per parameter set; the connection layer
    /// is the single call site for authorized requests.
    pub fn with_token(mut self, token: &str) -> Self {
        self.push("token", token);
        self
    }

    /// Percent-encode into a form body
    ///
    /// Pairs are joined with `&`, key and value with `=`; an empty value
    /// still emits its key (`key=`).
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    /// Decode a form body back into ordered pairs
    pub fn decode(body: &str) -> Self {
        let pairs = form_urlencoded::parse(body.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    /// Look up the first value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The last pair, if any
    pub fn last(&self) -> Option<(&str, &str)> {
        self.pairs.last().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RequestParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for RequestParams {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_encode_joins_pairs() {
        let params = RequestParams::new()
            .param("channel", "#general")
            .param("text", "hello world");

        assert_eq!(params.encode(), "channel=%23general&text=hello+world");
    }

    #[test]
    fn test_encode_empty_value_keeps_key() {
        let params = RequestParams::new().param("text", "");
        assert_eq!(params.encode(), "text=");
    }

    #[test_case("simple value")]
    #[test_case("reserved &=?#/ chars")]
    #[test_case(":princess: émoji")]
    #[test_case("")]
    fn test_encode_decode_round_trip(value: &str) {
        let params = RequestParams::new()
            .param("text", value)
            .param("channel", "#general");

        let decoded = RequestParams::decode(&params.encode());
        assert_eq!(decoded, params);
    }

    #[test]
    fn test_order_preserved() {
        let params = RequestParams::new()
            .param("b", "2")
            .param("a", "1")
            .param("c", "3");

        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_with_token_appends_last() {
        let params = RequestParams::new()
            .param("channel", "#general")
            .param("text", "hi")
            .with_token("xoxb-secret");

        assert_eq!(params.last(), Some(("token", "xoxb-secret")));
        assert_eq!(params.iter().filter(|(k, _)| *k == "token").count(), 1);
        assert!(params.encode().ends_with("token=xoxb-secret"));
    }

    #[test]
    fn test_opt_param_skips_none() {
        let params = RequestParams::new()
            .param("text", "hi")
            .opt_param("username", None::<String>)
            .opt_param("icon_emoji", Some(":hamster:"));

        assert!(!params.contains_key("username"));
        assert_eq!(params.get("icon_emoji"), Some(":hamster:"));
    }
}
