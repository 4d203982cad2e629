//! Flattened string form shared by every shape.
//!
//! A shape prints as `{Name: value,Name: value}` in member order and only
//! lists the members that are present. Lists print as `[a, b]` and maps as
//! `{k=v, k2=v2}`; nested shapes use their own `Display`.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use itertools::Itertools;

pub struct ShapeFormatter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b> ShapeFormatter<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        let result = f.write_str("{");
        ShapeFormatter {
            f,
            result,
            has_fields: false,
        }
    }

    fn write_member(&mut self, name: &str, value: &dyn Display) {
        if self.result.is_err() {
            return;
        }
        let separator = if self.has_fields { "," } else { "" };
        self.has_fields = true;
        self.result = write!(self.f, "{}{}: {}", separator, name, value);
    }

    pub fn field<T: Display>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if let Some(v) = value {
            self.write_member(name, v);
        }
        self
    }

    pub fn list<T: Display>(&mut self, name: &str, value: &Option<Vec<T>>) -> &mut Self {
        if let Some(items) = value {
            let rendered = format!("[{}]", items.iter().join(", "));
            self.write_member(name, &rendered);
        }
        self
    }

    pub fn map<V: Display>(&mut self, name: &str, value: &Option<BTreeMap<String, V>>) -> &mut Self {
        if let Some(entries) = value {
            let rendered = format!(
                "{{{}}}",
                entries.iter().map(|(k, v)| format!("{}={}", k, v)).join(", ")
            );
            self.write_member(name, &rendered);
        }
        self
    }

    pub fn finish(&mut self) -> fmt::Result {
        self.result?;
        self.f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        name: Option<String>,
        count: Option<i32>,
        items: Option<Vec<String>>,
        labels: Option<BTreeMap<String, String>>,
    }

    impl Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            ShapeFormatter::new(f)
                .field("Name", &self.name)
                .field("Count", &self.count)
                .list("Items", &self.items)
                .map("Labels", &self.labels)
                .finish()
        }
    }

    #[test]
    fn test_empty_shape() {
        let s = Sample {
            name: None,
            count: None,
            items: None,
            labels: None,
        };
        assert_eq!(s.to_string(), "{}");
    }

    #[test]
    fn test_only_present_members() {
        let s = Sample {
            name: None,
            count: Some(3),
            items: Some(vec!["a".to_string(), "b".to_string()]),
            labels: None,
        };
        assert_eq!(s.to_string(), "{Count: 3,Items: [a, b]}");
    }

    #[test]
    fn test_map_rendering() {
        let mut labels = BTreeMap::new();
        labels.insert("epochs".to_string(), "10".to_string());
        labels.insert("alpha".to_string(), "0.1".to_string());
        let s = Sample {
            name: Some("job".to_string()),
            count: None,
            items: Some(vec![]),
            labels: Some(labels),
        };
        assert_eq!(
            s.to_string(),
            "{Name: job,Items: [],Labels: {alpha=0.1, epochs=10}}"
        );
    }
}
