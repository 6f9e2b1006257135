use bias_types::{Family, GestureId, RegisterError};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::registry::IdRegistry;

pub static BUILTIN_GESTURES: &str = include_str!("gestures.kdl");

static FAMILY_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Parse(#[from] knuffel::Error),
    #[error("Bad family name `{0}`")]
    BadFamilyName(String),
    #[error("`dofs` only applies to MotionShortcut gestures, found on `{description}` in `{family}`")]
    UnexpectedDofs { family: String, description: String },
    #[error(transparent)]
    Register(#[from] RegisterError),
}

#[derive(Debug, knuffel::Decode)]
pub struct FamilyNode {
    #[knuffel(argument)]
    pub name: String,

    #[knuffel(children(name = "gesture"))]
    pub gestures: Vec<GestureNode>,
}

#[derive(Debug, knuffel::Decode)]
pub struct GestureNode {
    #[knuffel(argument)]
    pub description: String,
    /// Auto-allocated when absent
    #[knuffel(property, default)]
    pub id: Option<i32>,
    #[knuffel(property, default)]
    pub dofs: Option<u8>,
}

/**
 * Gesture ids declared in a KDL document:
 *
 * ```kdl
 * family "MotionShortcut" {
 *     gesture "LEFT" id=37 dofs=2
 * }
 * family "SwipeShortcut" {
 *     gesture "UP"
 * }
 * ```
 */
#[derive(Debug)]
pub struct GestureTable {
    families: Vec<FamilyNode>,
}

impl GestureTable {
    pub fn parse(file_name: &str, text: &str) -> Result<Self, ConfigError> {
        let families = knuffel::parse::<Vec<FamilyNode>>(file_name, text)?;

        for family in &families {
            if !FAMILY_NAME.is_match(&family.name) {
                return Err(ConfigError::BadFamilyName(family.name.clone()));
            }

            if Family::from_name(&family.name) != Family::Motion {
                if let Some(gesture) = family.gestures.iter().find(|g| g.dofs.is_some()) {
                    return Err(ConfigError::UnexpectedDofs {
                        family: family.name.clone(),
                        description: gesture.description.clone(),
                    });
                }
            }
        }

        Ok(Self { families })
    }

    pub fn builtin() -> Result<Self, ConfigError> {
        Self::parse("gestures.kdl", BUILTIN_GESTURES)
    }

    pub fn families(&self) -> &[FamilyNode] {
        &self.families
    }

    /// Number of gestures across all families
    pub fn len(&self) -> usize {
        self.families.iter().map(|family| family.gestures.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registers every gesture in document order. With `strict` the first
    /// gesture that would overwrite an existing description aborts; entries
    /// registered before it stay registered.
    pub fn apply(
        &self,
        registry: &IdRegistry,
        strict: bool,
    ) -> Result<Vec<(Family, GestureId)>, ConfigError> {
        let mut registered = Vec::with_capacity(self.len());

        for node in &self.families {
            let family = Family::from_name(&node.name);

            for gesture in &node.gestures {
                let description = gesture.description.as_str();
                let id = match gesture.id {
                    Some(id) if strict => registry.try_register_id(&family, id, description)?,
                    Some(id) => registry.register_id(&family, id, description),
                    None => registry.register_next_id(&family, description)?,
                };

                if let Some(dofs) = gesture.dofs {
                    registry.set_dofs(id, dofs);
                }

                registered.push((family.clone(), id));
            }

            debug!("Bias: registered {} {} gestures", node.gestures.len(), family);
        }

        Ok(registered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_parses() {
        let table = GestureTable::builtin().unwrap();
        assert_eq!(table.families().len(), 2);
        assert_eq!(table.len(), 8);
    }

    #[test]
    fn missing_ids_are_allocated_in_order() {
        let table = GestureTable::parse(
            "swipe.kdl",
            r#"
            family "SwipeShortcut" {
                gesture "UP"
                gesture "DOWN"
                gesture "FAR" id=10
                gesture "AFTER_FAR"
            }
            "#,
        )
        .unwrap();

        let registry = IdRegistry::new();
        let swipe = Family::custom("SwipeShortcut");
        let ids = table.apply(&registry, false).unwrap();

        assert_eq!(
            ids,
            vec![
                (swipe.clone(), GestureId(0)),
                (swipe.clone(), GestureId(1)),
                (swipe.clone(), GestureId(10)),
                (swipe.clone(), GestureId(11)),
            ]
        );
        assert_eq!(registry.description(&swipe, 11).as_deref(), Some("AFTER_FAR"));
    }

    #[test]
    fn strict_apply_stops_on_overwrite() {
        let registry = IdRegistry::new();
        registry.register_id(&Family::Motion, 3, "MIDDLE");

        let err = GestureTable::builtin()
            .unwrap()
            .apply(&registry, true)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Register(_)));
        assert_eq!(registry.description(&Family::Motion, 3).as_deref(), Some("MIDDLE"));
        assert!(registry.has_id(&Family::Motion, 37));
    }

    #[test]
    fn lenient_apply_overwrites() {
        let registry = IdRegistry::new();
        registry.register_id(&Family::Motion, 3, "MIDDLE");

        GestureTable::builtin().unwrap().apply(&registry, false).unwrap();
        assert_eq!(registry.description(&Family::Motion, 3).as_deref(), Some("CENTER"));
    }

    #[test]
    fn exhausted_family_is_an_error() {
        let table = GestureTable::parse(
            "edge.kdl",
            r#"family "KeyShortcut" { gesture "LAST" id=2147483647; gesture "PAST"; }"#,
        )
        .unwrap();

        let err = table.apply(&IdRegistry::new(), false).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Register(RegisterError::IdSpaceExhausted { family: Family::Key })
        ));
    }

    #[test]
    fn rejects_bad_family_names() {
        let err = GestureTable::parse("bad.kdl", r#"family "Two Words" { gesture "X"; }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::BadFamilyName(name) if name == "Two Words"));
    }

    #[test]
    fn rejects_dofs_outside_motion() {
        let err = GestureTable::parse(
            "bad.kdl",
            r#"family "ClickShortcut" { gesture "LEFT" id=37 dofs=2; }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::UnexpectedDofs { .. }));
    }

    #[test]
    fn reports_syntax_errors() {
        let err = GestureTable::parse("bad.kdl", "family {").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
