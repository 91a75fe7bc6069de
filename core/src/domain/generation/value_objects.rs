#[derive(Debug, Clone, Default)]
pub struct GenerateInput {
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ProcessImageInput {
    /// Base64 payload, optionally wrapped in a data URL.
    pub image: Option<String>,
    pub prompt: Option<String>,
}
