pub mod llm;
pub mod relay;

#[cfg(test)]
pub(crate) mod test_support;
