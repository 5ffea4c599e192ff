use game_types::ItemGroup;

/// The fields of an item record that item services read. Owned by the
/// inventory model; never modified here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInstance {
    pub group: ItemGroup,
    /// Position within the group's ordinal enumeration.
    pub group_index: u16,
    /// Stored name. May contain the template name placeholder.
    pub name: String,
    /// Raw material value, interpreted per group.
    pub material: u16,
    /// Raw dye colour value.
    pub color: u8,
    pub player_texture_archive: u16,
    pub player_texture_record: u16,
    /// Record id from the legacy save format. The low byte is a sub-record tag.
    pub legacy_record_id: u32,
}

impl Default for ItemInstance {
    fn default() -> Self {
        Self {
            group: ItemGroup::Drugs,
            group_index: 0,
            name: String::new(),
            material: 0,
            color: 0,
            player_texture_archive: 0,
            player_texture_record: 0,
            legacy_record_id: 0,
        }
    }
}
