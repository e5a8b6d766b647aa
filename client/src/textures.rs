use anyhow::{Context, Result, anyhow};
use macroquad::texture::{FilterMode, Texture2D, load_texture};
use tilewalk_shared::state::WALK_FRAME_COUNT;

const WALK_TEXTURE_PREFIX: &str = "./assets/texture/player/walk-";
const IDLE_TEXTURE_PATH: &str = "./assets/texture/player/idle.png";

pub struct PlayerTextures {
    pub walk: Vec<Texture2D>,
    pub idle: Texture2D,
}

impl PlayerTextures {
    pub async fn load() -> Result<PlayerTextures> {
        let mut walk = Vec::with_capacity(WALK_FRAME_COUNT);
        for i in 0..WALK_FRAME_COUNT {
            walk.push(load_pixel_texture(&format!("{WALK_TEXTURE_PREFIX}{i}.png")).await?);
        }
        let idle = load_pixel_texture(IDLE_TEXTURE_PATH).await?;

        log::info!("loaded {} walk frames and idle texture", walk.len());
        Ok(PlayerTextures { walk, idle })
    }

    pub fn walk_frame(&self, frame: usize) -> &Texture2D {
        &self.walk[frame]
    }

    /// Shutdown hook for the frame loop. The release itself is the drop of
    /// each `Texture2D`; this gives it one named, logged call site, and taking
    /// `self` rules out a second one.
    pub fn cleanup(self) {
        log::info!("unloading {} player textures", self.walk.len() + 1);
    }
}

async fn load_pixel_texture(path: &str) -> Result<Texture2D> {
    let texture = load_texture(path)
        .await
        .map_err(|e| anyhow!("{e:?}"))
        .with_context(|| format!("load texture {path}"))?;
    texture.set_filter(FilterMode::Nearest);
    Ok(texture)
}
