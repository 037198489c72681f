/// A catalog artwork and its categorical attributes.
///
/// The catalog is fixed at process start, so every attribute is a static
/// string drawn from the closed vocabulary shared with the mapping tables
/// in `services::mapping`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artwork {
    pub title: &'static str,
    pub style: &'static str,
    pub genre: &'static str,
    pub medium: &'static str,
    pub mood: &'static str,
    pub region: &'static str,
    pub message: &'static str,
}
