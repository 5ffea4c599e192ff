use anyhow::{Result, bail};
use clap::Parser;
use game_types::{ItemGroup, ItemHands, MetalType};
use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;

use item_services::{
    ArxTextureSource, EnglishTextProvider, ImageKey, ItemInstance, ItemServices, ServicesSettings,
    TemplateIndex, equip, metal, names,
};

#[derive(Parser)]
#[command(name = "item-inspect")]
#[command(about = "Resolve an item's template, name, metal type and image")]
struct Cli {
    #[arg(long, default_value = "item-services.toml")]
    settings: PathBuf,

    /// Item group, by name (e.g. Weapons) or number.
    #[arg(value_parser = parse_group)]
    group: ItemGroup,

    /// Index within the group.
    index: u16,

    #[arg(long, default_value_t = 0)]
    color: u8,

    #[arg(long, default_value_t = 0)]
    variant: u8,

    #[arg(long)]
    mask_removed: bool,

    #[arg(long, default_value_t = 0)]
    material: u16,

    /// Stored item name; defaults to the template name.
    #[arg(long, default_value = "%it")]
    name: String,
}

fn parse_group(s: &str) -> Result<ItemGroup> {
    if let Ok(value) = s.parse::<u8>() {
        return Ok(ItemGroup::try_from(value)?);
    }
    match ItemGroup::ALL
        .iter()
        .find(|group| format!("{:?}", group).eq_ignore_ascii_case(s))
    {
        Some(group) => Ok(*group),
        None => bail!("unknown item group {:?}", s),
    }
}

#[derive(Serialize)]
struct Report {
    group: ItemGroup,
    index: u16,
    template: String,
    name: String,
    hands: ItemHands,
    metal: MetalType,
    image_key: String,
    image: Option<ImageSize>,
}

#[derive(Serialize)]
struct ImageSize {
    width: u32,
    height: u32,
}

fn main() -> Result<()> {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    let settings = ServicesSettings::load(&cli.settings);
    let templates = TemplateIndex::load(&settings.templates_path);

    let template = templates.resolve(cli.group, cli.index)?.clone();
    let ordinal = templates.ordinal(cli.group, cli.index)?;
    let item = ItemInstance {
        group: cli.group,
        group_index: cli.index,
        name: cli.name,
        material: cli.material,
        color: cli.color,
        player_texture_archive: template.player_texture_archive,
        player_texture_record: template.player_texture_record,
        legacy_record_id: 0,
    };
    let image_key = ImageKey::for_item(&item, cli.variant, cli.mask_removed)?;

    let image = match ArxTextureSource::open(&settings.archive_path) {
        Ok(textures) => {
            let mut services = ItemServices::with_settings(templates, textures, &settings.cache);
            let image = services.item_image(&item, cli.variant, cli.mask_removed)?;
            Some(ImageSize {
                width: image.width(),
                height: image.height(),
            })
        }
        Err(e) => {
            warn!("Images unavailable, could not open {:?}: {}", settings.archive_path, e);
            None
        }
    };

    let report = Report {
        group: item.group,
        index: item.group_index,
        name: names::resolve_name(&item, &template, &EnglishTextProvider),
        template: template.name,
        hands: ordinal
            .map(|ordinal| equip::item_hands(item.group, ordinal))
            .unwrap_or_default(),
        metal: metal::classify(item.group, item.material),
        image_key: image_key.to_string(),
        image,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
