/// Length of a canonical hyphenated UUID, which is what the dictionary API
/// hands out as resource identifiers.
pub const RESOURCE_ID_LENGTH: usize = 36;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceId(String);

impl ResourceId {
    /// Only the length is checked. The API does not promise anything
    /// about the identifier beyond its shape.
    ///
    /// Length is counted in `char`s. UTF-16 code units would give the same
    /// answer for every UUID rendering and only disagree on characters
    /// outside the Basic Multilingual Plane.
    pub fn parse(s: String) -> Result<ResourceId, String> {
        let length = s.chars().count();
        if length == RESOURCE_ID_LENGTH {
            Ok(Self(s))
        } else {
            Err(format!(
                "{:?} is not a valid resource id: expected {} characters, found {}.",
                s, RESOURCE_ID_LENGTH, length
            ))
        }
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
