use std::fmt;

/// One line of a Mozc system dictionary: `reading\tleft_id\tright_id\tcost\tsurface`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MozcEntry {
    pub reading: String,
    pub left_id: u16,
    pub right_id: u16,
    pub cost: i16,
    pub surface: String,
}

impl MozcEntry {
    pub fn key(&self) -> DedupKey {
        DedupKey {
            reading: self.reading.clone(),
            left_id: self.left_id,
            right_id: self.right_id,
            surface: self.surface.clone(),
        }
    }
}

impl fmt::Display for MozcEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.reading, self.left_id, self.right_id, self.cost, self.surface
        )
    }
}

/// Identity of a dictionary entry for duplicate detection. Cost is not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    pub reading: String,
    pub left_id: u16,
    pub right_id: u16,
    pub surface: String,
}
