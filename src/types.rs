use serde::Serialize;

pub type PaletteId = u64;

/// A named set of five swatches, as shown on a palette card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub id: PaletteId,
    pub title: String,
    pub user_name: String,
    pub num_votes: u32,
    pub colors: Vec<String>,
}

impl Palette {
    /// All swatches as one comma separated line.
    pub fn hex_list(&self) -> String {
        self.colors.join(", ")
    }
}

/// The palette requests the UI can have in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteQuery {
    Random,
    Top,
    Inspiration,
}
