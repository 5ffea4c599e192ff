//! Item templates and the (group, index) -> template index.

use game_types::ItemGroup;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::{error, info, warn};

use crate::{error::ItemError, registry::EnumRegistry};

/// Static description of an item kind, as exported from classic data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemTemplate {
    pub index: u16,
    pub name: String,
    pub base_weight: f32,
    pub base_price: u32,
    pub variants: u8,
    pub is_one_handed: bool,
    pub world_texture_archive: u16,
    pub world_texture_record: u16,
    pub player_texture_archive: u16,
    pub player_texture_record: u16,
}

/// Returned for any lookup that cannot be satisfied.
static EMPTY_TEMPLATE: ItemTemplate = ItemTemplate {
    index: 0,
    name: String::new(),
    base_weight: 0.0,
    base_price: 0,
    variants: 0,
    is_one_handed: false,
    world_texture_archive: 0,
    world_texture_record: 0,
    player_texture_archive: 0,
    player_texture_record: 0,
};

impl ItemTemplate {
    pub fn empty() -> &'static ItemTemplate {
        &EMPTY_TEMPLATE
    }
}

/// Parses a template database: a JSON array ordered by template ordinal.
pub fn parse_templates(json: &str) -> anyhow::Result<Vec<ItemTemplate>> {
    Ok(serde_json::from_str(json)?)
}

/// Loads the template database at `path`. Failure is not fatal: it is
/// logged and an empty table is returned, so every lookup falls back to
/// the empty template.
pub fn load_templates<P: AsRef<Path>>(path: P) -> Vec<ItemTemplate> {
    let path = path.as_ref();
    let result = fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|json| parse_templates(&json));

    match result {
        Ok(templates) => {
            info!("Loaded {} item templates from {:?}", templates.len(), path);
            templates
        }
        Err(e) => {
            error!(
                "Could not load item template database {:?}. Check file exists and is in correct format: {}",
                path, e
            );
            Vec::new()
        }
    }
}

pub struct TemplateIndex {
    registry: EnumRegistry,
    templates: Vec<ItemTemplate>,
}

impl TemplateIndex {
    pub fn new(registry: EnumRegistry, templates: Vec<ItemTemplate>) -> Self {
        Self {
            registry,
            templates,
        }
    }

    /// Classic registry over the template database at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        Self::new(EnumRegistry::classic(), load_templates(path))
    }

    pub fn registry(&self) -> &EnumRegistry {
        &self.registry
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Template for the `index`th member of `group`.
    ///
    /// An unmapped group is an error. An index past the end of the group, or
    /// an ordinal missing from the loaded table, yields the empty template.
    pub fn resolve(&self, group: ItemGroup, index: u16) -> Result<&ItemTemplate, ItemError> {
        let Some(ordinal) = self.registry.template_ordinal(group, index)? else {
            warn!("Item index out of range: Group={:?} Index={}", group, index);
            return Ok(ItemTemplate::empty());
        };

        match self.templates.get(ordinal as usize) {
            Some(template) => Ok(template),
            None => {
                warn!(
                    "Template ordinal {} missing from table of {} ({:?} index {})",
                    ordinal,
                    self.templates.len(),
                    group,
                    index
                );
                Ok(ItemTemplate::empty())
            }
        }
    }

    /// Global template ordinal of the `index`th member of `group`.
    pub fn ordinal(&self, group: ItemGroup, index: u16) -> Result<Option<u16>, ItemError> {
        self.registry.template_ordinal(group, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_types::Weapons;
    use std::io::Write;

    fn numbered_table(count: u16) -> Vec<ItemTemplate> {
        (0..count)
            .map(|i| ItemTemplate {
                index: i,
                name: format!("Template {}", i),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_parse_camel_case_and_defaults() {
        let json = r#"[
            {"index": 0, "name": "Holly berries", "baseWeight": 0.1, "variants": 1},
            {"index": 1, "name": "Dagger", "isOneHanded": true,
             "playerTextureArchive": 250, "playerTextureRecord": 3, "hitPoints": 200}
        ]"#;

        let templates = parse_templates(json).unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].name, "Holly berries");
        assert_eq!(templates[0].player_texture_archive, 0);
        assert!(templates[1].is_one_handed);
        assert_eq!(templates[1].player_texture_archive, 250);
        assert_eq!(templates[1].player_texture_record, 3);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let templates = load_templates(dir.path().join("ItemTemplates.json"));
        assert!(templates.is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not a list").unwrap();
        assert!(load_templates(file.path()).is_empty());
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"index": 0, "name": "Ruby"}}]"#).unwrap();
        let index = TemplateIndex::load(file.path());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_resolve_first_weapon() {
        let index = TemplateIndex::new(EnumRegistry::classic(), numbered_table(283));
        let template = index.resolve(ItemGroup::Weapons, 0).unwrap();
        assert_eq!(template.index, Weapons::Dagger.ordinal());
    }

    #[test]
    fn test_resolve_out_of_range_is_empty() {
        let index = TemplateIndex::new(EnumRegistry::classic(), numbered_table(283));
        let len = Weapons::ALL.len() as u16;

        assert_eq!(
            index.resolve(ItemGroup::Weapons, len - 1).unwrap().index,
            Weapons::Arrow.ordinal()
        );
        assert!(std::ptr::eq(
            index.resolve(ItemGroup::Weapons, len).unwrap(),
            ItemTemplate::empty()
        ));
        assert!(std::ptr::eq(
            index.resolve(ItemGroup::Weapons, u16::MAX).unwrap(),
            ItemTemplate::empty()
        ));
    }

    #[test]
    fn test_resolve_with_empty_table_is_empty() {
        let index = TemplateIndex::new(EnumRegistry::classic(), Vec::new());
        assert!(std::ptr::eq(
            index.resolve(ItemGroup::Weapons, 0).unwrap(),
            ItemTemplate::empty()
        ));
    }

    #[test]
    fn test_resolve_unmapped_group_fails() {
        let index = TemplateIndex::new(EnumRegistry::new(), numbered_table(10));
        assert_eq!(
            index.resolve(ItemGroup::Books, 0),
            Err(ItemError::UnmappedGroup(ItemGroup::Books))
        );
    }
}
