// src/syllabus.rs

//! Syllabus hierarchy: subject -> modules -> topics.
//!
//! A tree is built in one go from a list of [`ModuleSpec`]s and never
//! mutated afterwards. Callers get fresh copies through
//! [`SyllabusTree::export`], so changing an exported tree never touches the
//! stored one.

use serde::{Deserialize, Serialize};

use crate::errors::{PlannerError, Result};

/// Upper bound on modules per subject.
pub const MAX_MODULES: usize = 256;

/// Upper bound on topics per module.
pub const MAX_TOPICS_PER_MODULE: usize = 1024;

/// A named module and its ordered topics, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSpec {
    pub name: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl ModuleSpec {
    pub fn new<I, S>(name: &str, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            topics: topics.into_iter().map(Into::into).collect(),
        }
    }
}

/// Serializable tree node: `{"name": ..., "children": [...]}`.
///
/// Leaves have an empty `children` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllabusNode {
    pub name: String,
    pub children: Vec<SyllabusNode>,
}

impl SyllabusNode {
    pub fn leaf(name: &str) -> Self {
        Self {
            name: name.to_string(),
            children: Vec::new(),
        }
    }
}

/// The stored syllabus of one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllabusTree {
    root: SyllabusNode,
}

impl SyllabusTree {
    /// Build `subject -> modules -> topics`, preserving the given order.
    ///
    /// Fails with [`PlannerError::SyllabusTooLarge`] if the module or topic
    /// counts exceed [`MAX_MODULES`] / [`MAX_TOPICS_PER_MODULE`].
    pub fn build(subject: &str, modules: &[ModuleSpec]) -> Result<Self> {
        check_limits(subject, modules)?;

        let children = modules
            .iter()
            .map(|module| SyllabusNode {
                name: module.name.clone(),
                children: module.topics.iter().map(|t| SyllabusNode::leaf(t)).collect(),
            })
            .collect();

        Ok(Self {
            root: SyllabusNode {
                name: subject.to_string(),
                children,
            },
        })
    }

    pub fn subject(&self) -> &str {
        &self.root.name
    }

    /// A fresh, owned copy of the whole tree.
    pub fn export(&self) -> SyllabusNode {
        self.root.clone()
    }

    /// The module list this tree was built from.
    pub fn modules(&self) -> Vec<ModuleSpec> {
        self.root
            .children
            .iter()
            .map(|module| ModuleSpec {
                name: module.name.clone(),
                topics: module.children.iter().map(|t| t.name.clone()).collect(),
            })
            .collect()
    }

    /// Total number of topic leaves.
    pub fn topic_count(&self) -> usize {
        self.root.children.iter().map(|m| m.children.len()).sum()
    }

    /// Indented outline, one node per line:
    ///
    /// ```text
    /// - Math
    ///   - Algebra
    ///     - Eq1
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Explicit stack; children pushed in reverse so they pop in order.
        let mut stack: Vec<(&SyllabusNode, usize)> = vec![(&self.root, 0)];

        while let Some((node, depth)) = stack.pop() {
            out.push_str(&"  ".repeat(depth));
            out.push_str("- ");
            out.push_str(&node.name);
            out.push('\n');

            for child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }

        out
    }
}

/// Reject module lists larger than [`MAX_MODULES`] / [`MAX_TOPICS_PER_MODULE`].
pub fn check_limits(subject: &str, modules: &[ModuleSpec]) -> Result<()> {
    if modules.len() > MAX_MODULES {
        return Err(PlannerError::SyllabusTooLarge(format!(
            "subject '{}' has {} modules (max {})",
            subject,
            modules.len(),
            MAX_MODULES
        )));
    }

    if let Some(module) = modules
        .iter()
        .find(|m| m.topics.len() > MAX_TOPICS_PER_MODULE)
    {
        return Err(PlannerError::SyllabusTooLarge(format!(
            "module '{}' of subject '{}' has {} topics (max {})",
            module.name,
            subject,
            module.topics.len(),
            MAX_TOPICS_PER_MODULE
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn math() -> SyllabusTree {
        SyllabusTree::build(
            "Math",
            &[
                ModuleSpec::new("Algebra", ["Eq1", "Eq2"]),
                ModuleSpec::new("Geometry", ["Angles"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn export_matches_nested_shape() {
        let tree = SyllabusTree::build("Math", &[ModuleSpec::new("Algebra", ["Eq1", "Eq2"])]).unwrap();

        let json = serde_json::to_value(tree.export()).unwrap();
        let expected = serde_json::json!({
            "name": "Math",
            "children": [{
                "name": "Algebra",
                "children": [
                    {"name": "Eq1", "children": []},
                    {"name": "Eq2", "children": []}
                ]
            }]
        });
        assert_eq!(json, expected);
    }

    #[test]
    fn modules_round_trip_in_order() {
        let tree = math();
        assert_eq!(
            tree.modules(),
            vec![
                ModuleSpec::new("Algebra", ["Eq1", "Eq2"]),
                ModuleSpec::new("Geometry", ["Angles"]),
            ]
        );
        assert_eq!(tree.topic_count(), 3);
    }

    #[test]
    fn exported_copy_is_independent() {
        let tree = math();
        let mut copy = tree.export();
        copy.children.clear();
        copy.name.push_str("!!");
        assert_eq!(tree.export().children.len(), 2);
        assert_eq!(tree.subject(), "Math");
    }

    #[test]
    fn render_indents_by_depth() {
        let rendered = math().render();
        assert_eq!(
            rendered,
            "- Math\n  - Algebra\n    - Eq1\n    - Eq2\n  - Geometry\n    - Angles\n"
        );
    }

    #[test]
    fn module_with_no_topics_is_a_leaf() {
        let tree = SyllabusTree::build("Art", &[ModuleSpec::new("Sketching", Vec::<String>::new())]).unwrap();
        assert!(tree.export().children[0].children.is_empty());
    }

    #[test]
    fn oversized_syllabus_is_rejected() {
        let modules: Vec<ModuleSpec> = (0..=MAX_MODULES)
            .map(|i| ModuleSpec::new(&format!("M{i}"), Vec::<String>::new()))
            .collect();
        assert!(matches!(
            SyllabusTree::build("Huge", &modules),
            Err(PlannerError::SyllabusTooLarge(_))
        ));

        let topics: Vec<String> = (0..=MAX_TOPICS_PER_MODULE).map(|i| format!("T{i}")).collect();
        let err = SyllabusTree::build("Huge", &[ModuleSpec::new("Big", topics)]).unwrap_err();
        assert!(err.to_string().contains("'Big'"));
    }
}
