use serde::Serialize;

use crate::registry::{Registry, Resolution};

#[derive(Serialize, Clone, Debug)]
pub struct ClassifiedType {
    pub input: String,
    #[serde(flatten)]
    pub resolution: Resolution,
}

#[derive(Serialize, Clone, Debug)]
pub struct ClassifyJsonOutput {
    pub results: Vec<ClassifiedType>,
}

impl ClassifyJsonOutput {
    pub fn classify_all<'a>(
        registry: &Registry,
        inputs: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let results = inputs
            .into_iter()
            .map(|input| ClassifiedType {
                input: input.to_string(),
                resolution: registry.resolve(input),
            })
            .collect();
        ClassifyJsonOutput { results }
    }

    pub fn into_string(self) -> String {
        serde_json::to_string(&self).expect("classify output serialization")
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct LintJsonOutput {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl LintJsonOutput {
    pub fn from_findings(registry: &Registry, findings: Vec<String>) -> Self {
        LintJsonOutput {
            ok: findings.is_empty(),
            entries: Some(registry.len()),
            errors: findings,
        }
    }

    pub fn error(message: String) -> Self {
        LintJsonOutput {
            ok: false,
            entries: None,
            errors: vec![message],
        }
    }

    pub fn into_string(self) -> String {
        serde_json::to_string(&self).expect("lint output serialization")
    }
}
