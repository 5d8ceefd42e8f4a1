use anyhow::Result;
use chrono::Local;
use rand::RngExt;

use super::PaletteSource;
use super::catalog::{RANDOM_TEMPLATES, TOP_PALETTES, Template};
use crate::types::{Palette, PaletteId};

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

const MIN_VOTES: u32 = 100;
const MAX_VOTES: u32 = 1100;

/// Serves the built-in catalog. Random palettes get ids counting up from the
/// creation time in milliseconds.
pub struct MockPaletteSource {
    next_id: PaletteId,
}

impl MockPaletteSource {
    pub fn new() -> Self {
        let now_ms = Local::now().timestamp_millis();
        Self {
            next_id: PaletteId::try_from(now_ms).unwrap_or_default(),
        }
    }

    fn take_id(&mut self) -> PaletteId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }
}

impl Default for MockPaletteSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteSource for MockPaletteSource {
    fn random_palette(&mut self) -> Result<Palette> {
        let mut rng = rand::rng();
        let template = &RANDOM_TEMPLATES[rng.random_range(0..RANDOM_TEMPLATES.len())];
        let num_votes = rng.random_range(MIN_VOTES..MAX_VOTES);
        let id = self.take_id();
        tracing::trace!(id, title = template.title, "generated palette");
        Ok(to_palette(id, num_votes, template))
    }

    fn top_palettes(&mut self) -> Result<Vec<Palette>> {
        Ok(TOP_PALETTES
            .iter()
            .map(|ranked| to_palette(ranked.id, ranked.num_votes, &ranked.template))
            .collect())
    }
}

fn to_palette(id: PaletteId, num_votes: u32, template: &Template) -> Palette {
    Palette {
        id,
        title: template.title.to_string(),
        user_name: template.user_name.to_string(),
        num_votes,
        colors: template.colors.iter().map(|c| c.to_string()).collect(),
    }
}
