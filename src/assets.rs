//! Asset loading
//!
//! Sprites, tile images and the overlay font, loaded once at startup.
//! Any configured file that fails to load aborts startup with the path
//! in the error chain.

use anyhow::{Context, Result};
use macroquad::prelude::*;
use crate::config::{SpriteAsset, SpriteAssets, TileAsset};
use crate::game::{Sprite, SpriteId, SpriteTable};
use crate::tiles::palette::PaletteEntry;
use crate::tiles::TilePalette;

/// Load an image as a pixel-art texture
async fn load_image(path: &str) -> Result<Texture2D> {
    let texture = load_texture(path)
        .await
        .with_context(|| format!("Failed loading image {}", path))?;
    texture.set_filter(FilterMode::Nearest);
    log::info!("Loaded image {} ({}x{})", path, texture.width(), texture.height());
    Ok(texture)
}

async fn load_sprite(asset: &SpriteAsset) -> Result<Sprite> {
    Ok(Sprite {
        image: Some(load_image(&asset.path).await?),
        size: vec2(asset.size.0, asset.size.1),
    })
}

/// Build the sprite table. The nil sprite stays empty.
pub async fn load_sprites(assets: &SpriteAssets) -> Result<SpriteTable> {
    let mut table = SpriteTable::new();
    table.set(SpriteId::Player, load_sprite(&assets.player).await.context("player sprite")?);
    table.set(SpriteId::Rock, load_sprite(&assets.rock).await.context("rock sprite")?);
    if let Some(tree) = &assets.tree {
        table.set(SpriteId::Tree, load_sprite(tree).await.context("tree sprite")?);
    }
    Ok(table)
}

/// Build the tile palette in config order, so tile ids follow that order
pub async fn load_palette(tiles: &[TileAsset]) -> Result<TilePalette> {
    let mut palette = TilePalette::new();
    for tile in tiles {
        let image = match &tile.path {
            Some(path) => Some(
                load_image(path)
                    .await
                    .with_context(|| format!("tile '{}'", tile.name))?,
            ),
            None => None,
        };
        palette.push(PaletteEntry {
            name: tile.name.clone(),
            image,
            color: Color::from_hex(tile.color),
        });
    }
    log::info!("Tile palette: {} tiles", palette.len());
    Ok(palette)
}

/// Load the overlay font, if one is configured
pub async fn load_font(path: Option<&str>) -> Result<Option<Font>> {
    let Some(path) = path else { return Ok(None) };
    let font = load_ttf_font(path)
        .await
        .with_context(|| format!("Failed loading font {}", path))?;
    log::info!("Loaded font {}", path);
    Ok(Some(font))
}
