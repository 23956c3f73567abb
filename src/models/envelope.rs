//! Generic unwrap for the backend's `data`-nested response envelopes.

use serde::Deserialize;

/// Article and category endpoints wrap their payload in either
/// `{ data: { data: T } }` or `{ data: T }` depending on the route.
#[derive(Debug, Deserialize)]
pub(crate) struct Enveloped<T> {
    data: Layer<T>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Layer<T> {
    Nested { data: T },
    Direct(T),
}

impl<T> Enveloped<T> {
    pub(crate) fn into_inner(self) -> T {
        match self.data {
            Layer::Nested { data } => data,
            Layer::Direct(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Enveloped;
    use serde_json::json;

    #[test]
    fn unwraps_single_and_double_nesting() {
        let single: Enveloped<Vec<String>> =
            serde_json::from_value(json!({ "data": ["a"] })).unwrap();
        assert_eq!(single.into_inner(), vec!["a".to_string()]);

        let double: Enveloped<Vec<String>> =
            serde_json::from_value(json!({ "data": { "data": ["b"] } })).unwrap();
        assert_eq!(double.into_inner(), vec!["b".to_string()]);
    }

    #[test]
    fn missing_data_key_is_an_error() {
        let parsed = serde_json::from_value::<Enveloped<Vec<String>>>(json!({ "rows": [] }));
        assert!(parsed.is_err());
    }
}
