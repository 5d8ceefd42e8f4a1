/// Palette data sources. The UI only talks to `PaletteSource`, so the mock
/// catalog can be swapped for a real backend.
mod catalog;
mod mock;

use anyhow::Result;

use crate::types::Palette;

pub use mock::MockPaletteSource;

pub trait PaletteSource {
    /// One freshly generated palette.
    fn random_palette(&mut self) -> Result<Palette>;

    /// The curated list, most voted first.
    fn top_palettes(&mut self) -> Result<Vec<Palette>>;

    /// `count` independent random palettes for the gallery.
    fn inspiration(&mut self, count: usize) -> Result<Vec<Palette>> {
        (0..count).map(|_| self.random_palette()).collect()
    }
}
