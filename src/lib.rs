//! Bridge between structured test-input categories and a PICT-style
//! combinatorial test-generation engine.
//!
//! The engine is an opaque external collaborator: this crate serializes
//! named value groups into its flat model-file grammar, invokes it, and
//! parses its tab-separated output back into (category, value) rows. The
//! combinatorial algorithm itself lives entirely in the engine.

pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod writer;

pub use engine::{execute, CliEngine, Engine};
pub use error::BridgeError;
pub use model::{Category, Model, ModelSpec};
pub use parser::{parse, ResultRow, ResultSet};
pub use writer::{ModelWriter, PathProvider, TempPathProvider};

/// Write `model` to a fresh artifact, run the engine on it, and parse the
/// resulting rows. The artifact path is the only argument forwarded to the
/// engine, and the artifact is left in place afterwards.
pub fn generate(
    model: &Model,
    engine: &dyn Engine,
    writer: &ModelWriter,
) -> Result<ResultSet, BridgeError> {
    let path = writer.write(model)?;
    let raw = engine::execute(engine, &[path.to_string_lossy().into_owned()])?;
    parser::parse(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pass-through double: reads the model file it is pointed at and emits
    /// one output line per model line, with the header as the category
    /// names and a single row of each category's first value.
    struct FirstValueEngine;

    impl Engine for FirstValueEngine {
        fn invoke(&self, argv: &[String]) -> Result<(i32, String), BridgeError> {
            let text = std::fs::read_to_string(&argv[1])?;
            let mut names = Vec::new();
            let mut firsts = Vec::new();
            for line in text.lines() {
                if line.starts_with('#') || line.trim().is_empty() {
                    continue;
                }
                let (name, values) = line.split_once(": ").unwrap();
                names.push(name.to_string());
                firsts.push(values.split(',').next().unwrap().to_string());
            }
            Ok((
                0,
                format!("{}\n{}\n", names.join("\t"), firsts.join("\t")),
            ))
        }
    }

    #[test]
    fn round_trip_preserves_category_names_in_order() -> anyhow::Result<()> {
        let model = Model::new(vec![
            Category::new("Feature.Gate.1", ["true", "false"]),
            Category::new("Feature.Gate.2", ["true", "false"]),
        ])?;

        let set = generate(&model, &FirstValueEngine, &ModelWriter::new())?;

        let names: Vec<&str> = model.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(set.header, names);
        assert_eq!(set.rows.len(), 1);
        assert_eq!(
            set.rows[0].pairs[0],
            ("Feature.Gate.1".to_string(), "true".to_string())
        );
        assert_eq!(
            set.rows[0].pairs[1],
            ("Feature.Gate.2".to_string(), "true".to_string())
        );
        Ok(())
    }

    #[test]
    fn engine_failure_aborts_before_parsing() -> anyhow::Result<()> {
        struct FailingEngine;
        impl Engine for FailingEngine {
            fn invoke(&self, _argv: &[String]) -> Result<(i32, String), BridgeError> {
                Ok((5, "not a table".to_string()))
            }
        }

        let model = Model::new(vec![Category::new("A", ["x"])])?;
        let err = generate(&model, &FailingEngine, &ModelWriter::new()).unwrap_err();
        assert!(matches!(err, BridgeError::Engine { code: 5 }));
        Ok(())
    }
}
