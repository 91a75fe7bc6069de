use crate::domain::rendering::entities::DisplayBlock;

/// Turns free oracle text into something displayable. Kept behind a trait so
/// the oracle's output format can change without touching the orchestrator.
pub trait ResultRenderer: Send + Sync {
    fn render(&self, text: &str) -> DisplayBlock;
}
