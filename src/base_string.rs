use crate::encode::encode;
use crate::value::{Params, Value};
use log::trace;
use std::collections::BTreeMap;

/// Build the canonical base string for a parameter mapping.
///
/// Every key and value is percent-encoded with [`encode`], entries are sorted by encoded key
/// (byte-wise), and the pairs are joined with `&`.  A [`Value::Sequence`] contributes one
/// `key=element` pair per element, with elements sorted after encoding.  An empty mapping
/// produces an empty string.
///
/// The result depends only on the contents of `params`.  If two raw keys encode to the same
/// string (a space and a `~` both encode to `~`), the one that sorts last wins.
///
/// ```
/// use wyx_sign::{build_base_string, Params, Value};
///
/// let mut params = Params::new();
/// params.insert("uid".to_string(), Value::from(42));
/// params.insert("ids".to_string(), Value::from(vec!["b", "a"]));
/// assert_eq!(build_base_string(&params), "ids=a&ids=b&uid=42");
/// ```
pub fn build_base_string(params: &Params) -> String {
    let encoded: BTreeMap<String, Value> = params
        .iter()
        .map(|(k, v)| {
            let v = match v {
                Value::Scalar(s) => Value::Scalar(encode(s)),
                Value::Sequence(items) => {
                    let mut items: Vec<String> = items.iter().map(|i| encode(i)).collect();
                    items.sort();
                    Value::Sequence(items)
                }
            };
            (encode(k), v)
        })
        .collect();

    let mut pairs: Vec<String> = Vec::with_capacity(encoded.len());
    for (key, value) in &encoded {
        match value {
            Value::Scalar(s) => pairs.push(format!("{}={}", key, s)),
            Value::Sequence(items) => {
                pairs.extend(items.iter().map(|item| format!("{}={}", key, item)))
            }
        }
    }

    let base = pairs.join("&");
    trace!("built base string {:?}", base);
    base
}
