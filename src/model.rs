use crate::error::BridgeError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Joins values within a category line; values must not contain it.
pub const VALUE_SEPARATOR: char = ',';
/// Separates a category name from its values; names must not contain it.
pub const NAME_SEPARATOR: char = ':';

/// A named group of allowed values, in the order the caller supplied them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub values: Vec<String>,
}

impl Category {
    pub fn new<N, I, V>(name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Category {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// An ordered set of categories, validated once at construction and
/// read-only thereafter. Order is preserved exactly as supplied; nothing
/// is deduplicated or sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    categories: Vec<Category>,
}

impl Model {
    /// Build a model, rejecting empty names, duplicate names (ordinal,
    /// case-sensitive) and content that collides with the grammar
    /// delimiters. An empty category list is allowed; the engine just
    /// produces degenerate output for it.
    pub fn new(categories: Vec<Category>) -> Result<Self, BridgeError> {
        {
            let mut seen: HashSet<&str> = HashSet::new();
            for category in &categories {
                if category.name.is_empty() {
                    return Err(BridgeError::invalid_input("category name cannot be empty"));
                }
                if category.name.contains(NAME_SEPARATOR) {
                    return Err(BridgeError::invalid_input(format!(
                        "category name `{}` contains `{}`",
                        category.name, NAME_SEPARATOR
                    )));
                }
                for value in &category.values {
                    if value.contains(VALUE_SEPARATOR) {
                        return Err(BridgeError::invalid_input(format!(
                            "value `{}` in category `{}` contains `{}`",
                            value, category.name, VALUE_SEPARATOR
                        )));
                    }
                }
                if !seen.insert(category.name.as_str()) {
                    return Err(BridgeError::invalid_input(format!(
                        "duplicate category name `{}`",
                        category.name
                    )));
                }
            }
        }
        Ok(Model { categories })
    }

    /// Load a model from a spec document on disk. `.yaml`/`.yml` parse as
    /// YAML, anything else as JSON.
    pub fn from_spec_file(path: impl AsRef<Path>) -> Result<Self, BridgeError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let spec: ModelSpec = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&raw).map_err(|e| {
                BridgeError::invalid_input(format!("malformed model spec: {}", e))
            })?,
            _ => serde_json::from_str(&raw).map_err(|e| {
                BridgeError::invalid_input(format!("malformed model spec: {}", e))
            })?,
        };
        Model::new(spec.categories)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// On-disk description of a model: an ordered list of named value groups.
/// A list rather than a map so caller order survives deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSpec {
    pub categories: Vec<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn preserves_category_and_value_order() -> anyhow::Result<()> {
        let model = Model::new(vec![
            Category::new("Color", ["Red", "Green"]),
            Category::new("Size", ["S", "M"]),
        ])?;
        let names: Vec<&str> = model.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Color", "Size"]);
        assert_eq!(model.categories()[0].values, ["Red", "Green"]);
        Ok(())
    }

    #[test]
    fn rejects_empty_name() {
        let err = Model::new(vec![Category::new("", ["x"])]).unwrap_err();
        assert!(matches!(err, BridgeError::InvalidInput { .. }));
    }

    #[test]
    fn rejects_duplicate_name() {
        let err = Model::new(vec![
            Category::new("Color", ["Red"]),
            Category::new("Color", ["Green"]),
        ])
        .unwrap_err();
        assert!(matches!(err, BridgeError::InvalidInput { .. }));
    }

    #[test]
    fn rejects_delimiter_collisions() {
        let err = Model::new(vec![Category::new("A:B", ["x"])]).unwrap_err();
        assert!(matches!(err, BridgeError::InvalidInput { .. }));
        let err = Model::new(vec![Category::new("A", ["x,y"])]).unwrap_err();
        assert!(matches!(err, BridgeError::InvalidInput { .. }));
    }

    #[test]
    fn empty_model_is_allowed() -> anyhow::Result<()> {
        let model = Model::new(vec![])?;
        assert!(model.is_empty());
        Ok(())
    }

    #[test]
    fn json_and_yaml_specs_load_the_same_model() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let json_path = dir.path().join("model.json");
        let mut f = std::fs::File::create(&json_path)?;
        write!(
            f,
            r#"{{"categories":[{{"name":"Color","values":["Red","Green"]}},{{"name":"Size","values":["S","M"]}}]}}"#
        )?;

        let yaml_path = dir.path().join("model.yaml");
        let mut f = std::fs::File::create(&yaml_path)?;
        write!(
            f,
            "categories:\n  - name: Color\n    values: [Red, Green]\n  - name: Size\n    values: [S, M]\n"
        )?;

        let from_json = Model::from_spec_file(&json_path)?;
        let from_yaml = Model::from_spec_file(&yaml_path)?;
        assert_eq!(from_json, from_yaml);
        Ok(())
    }

    #[test]
    fn malformed_spec_document_is_invalid_input() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("model.json");
        std::fs::write(&path, "{not json")?;
        let err = Model::from_spec_file(&path).unwrap_err();
        assert!(matches!(err, BridgeError::InvalidInput { .. }));
        Ok(())
    }
}
